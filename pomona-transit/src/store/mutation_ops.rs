use super::{codec, store_error::StoreError};
use crate::model::StopRecordEntry;
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension};

/// tests whether an insert failed on a primary-key or unique constraint, as
/// opposed to some other constraint or an infrastructure fault.
fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(f, _)
            if f.code == rusqlite::ErrorCode::ConstraintViolation
                && (f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_PRIMARYKEY
                    || f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE)
    )
}

fn exists(conn: &Connection, sql: &str, key: i64) -> Result<bool, StoreError> {
    let found: bool = conn.query_row(sql, params![key], |row| row.get(0))?;
    Ok(found)
}

fn lookup_driver_id(conn: &Connection, name: &str) -> Result<Option<i64>, StoreError> {
    let id = conn
        .query_row(
            "SELECT driver_id FROM driver WHERE name = ?1",
            params![name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(id)
}

pub fn add_driver(conn: &Connection, name: &str, phone: &str) -> Result<(), StoreError> {
    let inserted = conn.execute(
        "INSERT INTO driver (name, phone) VALUES (?1, ?2)",
        params![name, phone],
    );
    match inserted {
        Ok(_) => {
            info!("added driver '{name}'");
            Ok(())
        }
        Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateKey {
            entity: "driver",
            key: name.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

pub fn add_bus(conn: &Connection, bus_id: i64, model: &str, year: i64) -> Result<(), StoreError> {
    let inserted = conn.execute(
        "INSERT INTO bus (bus_id, model, year) VALUES (?1, ?2, ?3)",
        params![bus_id, model, year],
    );
    match inserted {
        Ok(_) => {
            info!("added bus {bus_id} ({model}, {year})");
            Ok(())
        }
        Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateKey {
            entity: "bus",
            key: bus_id.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

/// deletes a bus, refusing while any offering still has it assigned.
pub fn delete_bus(conn: &Connection, bus_id: i64) -> Result<(), StoreError> {
    let dependents: i64 = conn.query_row(
        "SELECT COUNT(*) FROM trip_offering WHERE bus_id = ?1",
        params![bus_id],
        |row| row.get(0),
    )?;
    if dependents > 0 {
        return Err(StoreError::ReferentialConflict {
            entity: "bus",
            key: bus_id.to_string(),
            dependents,
        });
    }
    let deleted = conn.execute("DELETE FROM bus WHERE bus_id = ?1", params![bus_id])?;
    if deleted == 0 {
        return Err(StoreError::NotFound {
            entity: "bus",
            key: bus_id.to_string(),
        });
    }
    info!("deleted bus {bus_id}");
    Ok(())
}

/// deletes a driver by name, refusing while any offering still has them
/// assigned.
pub fn delete_driver(conn: &Connection, name: &str) -> Result<(), StoreError> {
    let driver_id = lookup_driver_id(conn, name)?.ok_or_else(|| StoreError::NotFound {
        entity: "driver",
        key: name.to_string(),
    })?;
    let dependents: i64 = conn.query_row(
        "SELECT COUNT(*) FROM trip_offering WHERE driver_id = ?1",
        params![driver_id],
        |row| row.get(0),
    )?;
    if dependents > 0 {
        return Err(StoreError::ReferentialConflict {
            entity: "driver",
            key: name.to_string(),
            dependents,
        });
    }
    conn.execute("DELETE FROM driver WHERE driver_id = ?1", params![driver_id])?;
    info!("deleted driver '{name}'");
    Ok(())
}

/// schedules a run of a trip. the trip, driver, and bus must all exist; the
/// (trip, date, start) composite key must be new.
#[allow(clippy::too_many_arguments)]
pub fn add_trip_offering(
    conn: &Connection,
    trip_number: i64,
    date: &str,
    scheduled_start: &str,
    scheduled_arrival: &str,
    driver: &str,
    bus_id: i64,
) -> Result<(), StoreError> {
    let date = codec::parse_date(date)?;
    let start = codec::parse_time(scheduled_start)?;
    let arrival = codec::parse_time(scheduled_arrival)?;

    if !exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM trip WHERE trip_number = ?1)",
        trip_number,
    )? {
        return Err(StoreError::InvalidReference(format!(
            "trip {trip_number} does not exist"
        )));
    }
    let driver_id = lookup_driver_id(conn, driver)?.ok_or_else(|| {
        StoreError::InvalidReference(format!("driver '{driver}' does not exist"))
    })?;
    if !exists(
        conn,
        "SELECT EXISTS (SELECT 1 FROM bus WHERE bus_id = ?1)",
        bus_id,
    )? {
        return Err(StoreError::InvalidReference(format!(
            "bus {bus_id} does not exist"
        )));
    }

    let date_text = codec::format_date(&date);
    let start_text = codec::format_time(&start);
    let inserted = conn.execute(
        "INSERT INTO trip_offering
           (trip_number, date, scheduled_start, scheduled_arrival, driver_id, bus_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            trip_number,
            date_text,
            start_text,
            codec::format_time(&arrival),
            driver_id,
            bus_id
        ],
    );
    match inserted {
        Ok(_) => {
            info!("added offering of trip {trip_number} on {date_text} at {start_text}");
            Ok(())
        }
        Err(e) if is_unique_violation(&e) => Err(StoreError::DuplicateKey {
            entity: "trip offering",
            key: format!("({trip_number}, {date_text}, {start_text})"),
        }),
        Err(e) => Err(e.into()),
    }
}

pub fn delete_trip_offering(
    conn: &Connection,
    trip_number: i64,
    date: &str,
    scheduled_start: &str,
) -> Result<(), StoreError> {
    let date_text = codec::format_date(&codec::parse_date(date)?);
    let start_text = codec::format_time(&codec::parse_time(scheduled_start)?);
    let deleted = conn.execute(
        "DELETE FROM trip_offering
         WHERE trip_number = ?1 AND date = ?2 AND scheduled_start = ?3",
        params![trip_number, date_text, start_text],
    )?;
    if deleted == 0 {
        return Err(StoreError::NotFound {
            entity: "trip offering",
            key: format!("({trip_number}, {date_text}, {start_text})"),
        });
    }
    info!("deleted offering of trip {trip_number} on {date_text} at {start_text}");
    Ok(())
}

/// removes a trip and everything hanging off of it: recorded stop data,
/// offerings, and itinerary entries, then the trip row itself. one
/// transaction; a failure at any step rolls back the whole sequence.
pub fn delete_trip(conn: &mut Connection, trip_number: i64) -> Result<(), StoreError> {
    let tx = conn.transaction()?;
    if !exists(
        &tx,
        "SELECT EXISTS (SELECT 1 FROM trip WHERE trip_number = ?1)",
        trip_number,
    )? {
        return Err(StoreError::NotFound {
            entity: "trip",
            key: trip_number.to_string(),
        });
    }
    let actuals = tx.execute(
        "DELETE FROM actual_trip_stop_info WHERE trip_number = ?1",
        params![trip_number],
    )?;
    let offerings = tx.execute(
        "DELETE FROM trip_offering WHERE trip_number = ?1",
        params![trip_number],
    )?;
    let itinerary = tx.execute(
        "DELETE FROM trip_stop_info WHERE trip_number = ?1",
        params![trip_number],
    )?;
    tx.execute("DELETE FROM trip WHERE trip_number = ?1", params![trip_number])?;
    tx.commit()?;
    info!(
        "deleted trip {trip_number}: {offerings} offering(s), {itinerary} itinerary entry(s), {actuals} recorded stop(s)"
    );
    Ok(())
}

/// records the realized outcome of one offering, one row per itinerary stop
/// in sequence order. entries are pre-collected by the caller and must match
/// the itinerary length; the batch is written in a single transaction so a
/// failure on any row leaves nothing behind.
pub fn record_actual_trip_data(
    conn: &mut Connection,
    trip_number: i64,
    date: &str,
    scheduled_start: &str,
    entries: &[StopRecordEntry],
) -> Result<(), StoreError> {
    let date_text = codec::format_date(&codec::parse_date(date)?);
    let start_text = codec::format_time(&codec::parse_time(scheduled_start)?);

    let tx = conn.transaction()?;
    let offering_exists: bool = tx.query_row(
        "SELECT EXISTS (
           SELECT 1 FROM trip_offering
           WHERE trip_number = ?1 AND date = ?2 AND scheduled_start = ?3
         )",
        params![trip_number, date_text, start_text],
        |row| row.get(0),
    )?;
    if !offering_exists {
        return Err(StoreError::NotFound {
            entity: "trip offering",
            key: format!("({trip_number}, {date_text}, {start_text})"),
        });
    }

    let stop_numbers: Vec<i64> = {
        let mut stmt = tx.prepare(
            "SELECT stop_number FROM trip_stop_info
             WHERE trip_number = ?1
             ORDER BY sequence_number",
        )?;
        let stops = stmt
            .query_map(params![trip_number], |row| row.get(0))?
            .collect::<Result<Vec<i64>, _>>()?;
        stops
    };
    if stop_numbers.is_empty() {
        return Err(StoreError::NotFound {
            entity: "trip itinerary",
            key: trip_number.to_string(),
        });
    }
    if entries.len() != stop_numbers.len() {
        return Err(StoreError::InputError(format!(
            "trip {trip_number} has {} itinerary stop(s) but {} entries were supplied",
            stop_numbers.len(),
            entries.len()
        )));
    }

    for (stop_number, entry) in stop_numbers.iter().zip(entries) {
        let inserted = tx.execute(
            "INSERT INTO actual_trip_stop_info
               (trip_number, date, scheduled_start, stop_number,
                scheduled_arrival, actual_start, actual_arrival,
                passengers_in, passengers_out)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                trip_number,
                date_text,
                start_text,
                stop_number,
                codec::format_time(&codec::parse_time(&entry.scheduled_arrival)?),
                codec::format_time(&codec::parse_time(&entry.actual_start)?),
                codec::format_time(&codec::parse_time(&entry.actual_arrival)?),
                entry.passengers_in,
                entry.passengers_out
            ],
        );
        match inserted {
            Ok(_) => debug!(
                "recorded stop {stop_number} for offering ({trip_number}, {date_text}, {start_text})"
            ),
            Err(e) if is_unique_violation(&e) => {
                return Err(StoreError::DuplicateKey {
                    entity: "actual trip stop record",
                    key: format!("({trip_number}, {date_text}, {start_text}, {stop_number})"),
                })
            }
            Err(e) => return Err(e.into()),
        }
    }
    tx.commit()?;
    info!(
        "recorded {} stop(s) for offering ({trip_number}, {date_text}, {start_text})",
        stop_numbers.len()
    );
    Ok(())
}
