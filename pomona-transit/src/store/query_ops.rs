use super::{codec, store_error::StoreError};
use crate::model::{
    ActualStopRow, Bus, Driver, OfferingSummaryRow, RouteRow, ScheduleRow, Stop, Trip, TripStopRow,
    WeeklyScheduleRow,
};
use chrono::Days;
use rusqlite::{params, Connection};

/// every offering of a trip matching the given route on the given date,
/// ordered by scheduled start time.
pub fn schedule(
    conn: &Connection,
    origin: &str,
    destination: &str,
    date: &str,
) -> Result<Vec<ScheduleRow>, StoreError> {
    let date_text = codec::format_date(&codec::parse_date(date)?);
    let mut stmt = conn.prepare(
        "SELECT o.trip_number, o.date, o.scheduled_start, o.scheduled_arrival, d.name, o.bus_id
         FROM trip_offering o
         JOIN trip t ON t.trip_number = o.trip_number
         JOIN driver d ON d.driver_id = o.driver_id
         WHERE t.origin = ?1 AND t.destination = ?2 AND o.date = ?3
         ORDER BY o.scheduled_start",
    )?;
    let rows = stmt
        .query_map(params![origin, destination, date_text], |row| {
            Ok(ScheduleRow {
                trip_number: row.get(0)?,
                date: codec::read_date(row, 1)?,
                scheduled_start: codec::read_time(row, 2)?,
                scheduled_arrival: codec::read_time(row, 3)?,
                driver_name: row.get(4)?,
                bus_id: row.get(5)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn all_trips(conn: &Connection) -> Result<Vec<Trip>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT trip_number, origin, destination FROM trip ORDER BY trip_number")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Trip {
                trip_number: row.get(0)?,
                origin: row.get(1)?,
                destination: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn all_drivers(conn: &Connection) -> Result<Vec<Driver>, StoreError> {
    let mut stmt = conn.prepare("SELECT driver_id, name, phone FROM driver ORDER BY name")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Driver {
                driver_id: row.get(0)?,
                name: row.get(1)?,
                phone: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn all_buses(conn: &Connection) -> Result<Vec<Bus>, StoreError> {
    let mut stmt = conn.prepare("SELECT bus_id, model, year FROM bus ORDER BY bus_id")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Bus {
                bus_id: row.get(0)?,
                model: row.get(1)?,
                year: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

pub fn all_stops(conn: &Connection) -> Result<Vec<Stop>, StoreError> {
    let mut stmt = conn.prepare("SELECT stop_number, address FROM stop ORDER BY stop_number")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(Stop {
                stop_number: row.get(0)?,
                address: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// the planned itinerary of a trip, ordered by ascending sequence number.
pub fn trip_stops(conn: &Connection, trip_number: i64) -> Result<Vec<TripStopRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT tsi.stop_number, s.address, tsi.sequence_number, tsi.driving_time_minutes
         FROM trip_stop_info tsi
         JOIN stop s ON s.stop_number = tsi.stop_number
         WHERE tsi.trip_number = ?1
         ORDER BY tsi.sequence_number",
    )?;
    let rows = stmt
        .query_map(params![trip_number], |row| {
            Ok(TripStopRow {
                stop_number: row.get(0)?,
                address: row.get(1)?,
                sequence_number: row.get(2)?,
                driving_time_minutes: row.get(3)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// a driver's offerings over the inclusive calendar week starting at
/// `start_date`, ordered by date then start time. the window end is computed
/// with chrono so month and year rollover behave; the stored ISO dates then
/// compare correctly as text.
pub fn driver_weekly_schedule(
    conn: &Connection,
    driver: &str,
    start_date: &str,
) -> Result<Vec<WeeklyScheduleRow>, StoreError> {
    let start = codec::parse_date(start_date)?;
    let end = start.checked_add_days(Days::new(6)).ok_or_else(|| {
        StoreError::InputError(format!("week starting '{start_date}' overflows the calendar"))
    })?;
    let mut stmt = conn.prepare(
        "SELECT t.trip_number, t.origin, t.destination, o.date, o.scheduled_start, o.scheduled_arrival
         FROM trip_offering o
         JOIN trip t ON t.trip_number = o.trip_number
         JOIN driver d ON d.driver_id = o.driver_id
         WHERE d.name = ?1 AND o.date BETWEEN ?2 AND ?3
         ORDER BY o.date, o.scheduled_start",
    )?;
    let rows = stmt
        .query_map(
            params![driver, codec::format_date(&start), codec::format_date(&end)],
            |row| {
                Ok(WeeklyScheduleRow {
                    trip_number: row.get(0)?,
                    origin: row.get(1)?,
                    destination: row.get(2)?,
                    date: codec::read_date(row, 3)?,
                    scheduled_start: codec::read_time(row, 4)?,
                    scheduled_arrival: codec::read_time(row, 5)?,
                })
            },
        )?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// the recorded outcome of one offering, ordered by stop number.
pub fn actual_trip_data(
    conn: &Connection,
    trip_number: i64,
    date: &str,
    scheduled_start: &str,
) -> Result<Vec<ActualStopRow>, StoreError> {
    let date_text = codec::format_date(&codec::parse_date(date)?);
    let start_text = codec::format_time(&codec::parse_time(scheduled_start)?);
    let mut stmt = conn.prepare(
        "SELECT a.stop_number, s.address, a.scheduled_arrival, a.actual_start, a.actual_arrival,
                a.passengers_in, a.passengers_out
         FROM actual_trip_stop_info a
         JOIN stop s ON s.stop_number = a.stop_number
         WHERE a.trip_number = ?1 AND a.date = ?2 AND a.scheduled_start = ?3
         ORDER BY a.stop_number",
    )?;
    let rows = stmt
        .query_map(params![trip_number, date_text, start_text], |row| {
            Ok(ActualStopRow {
                stop_number: row.get(0)?,
                address: row.get(1)?,
                scheduled_arrival: codec::read_time(row, 2)?,
                actual_start: codec::read_time(row, 3)?,
                actual_arrival: codec::read_time(row, 4)?,
                passengers_in: row.get(5)?,
                passengers_out: row.get(6)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// the distinct routes served, for prompting schedule lookups.
pub fn routes(conn: &Connection) -> Result<Vec<RouteRow>, StoreError> {
    let mut stmt =
        conn.prepare("SELECT DISTINCT origin, destination FROM trip ORDER BY origin, destination")?;
    let rows = stmt
        .query_map([], |row| {
            Ok(RouteRow {
                origin: row.get(0)?,
                destination: row.get(1)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// every offering in the store joined with its trip's route, for prompting
/// actual-data entry.
pub fn trip_offerings(conn: &Connection) -> Result<Vec<OfferingSummaryRow>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT o.trip_number, t.origin, t.destination, o.date, o.scheduled_start
         FROM trip_offering o
         JOIN trip t ON t.trip_number = o.trip_number
         ORDER BY o.trip_number, o.date, o.scheduled_start",
    )?;
    let rows = stmt
        .query_map([], |row| {
            Ok(OfferingSummaryRow {
                trip_number: row.get(0)?,
                origin: row.get(1)?,
                destination: row.get(2)?,
                date: codec::read_date(row, 3)?,
                scheduled_start: codec::read_time(row, 4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
