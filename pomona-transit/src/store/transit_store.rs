use super::{mutation_ops, query_ops, schema, seed, store_error::StoreError};
use crate::model::{
    ActualStopRow, Bus, Driver, OfferingSummaryRow, RouteRow, ScheduleRow, Stop, StopRecordEntry,
    Trip, TripStopRow, WeeklyScheduleRow,
};
use log::info;
use rusqlite::Connection;
use std::path::Path;

/// handle over the transit record store. owns the underlying connection for
/// its whole lifetime and releases it on drop; all reads and writes go
/// through the operations below. single-user and synchronous: one operation
/// runs to completion before the next begins.
pub struct TransitStore {
    conn: Connection,
}

impl TransitStore {
    /// opens (creating if absent) the store file at `path`. foreign key
    /// enforcement is switched on for the connection's lifetime.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TransitStore, StoreError> {
        let conn = Connection::open(path)?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(TransitStore { conn })
    }

    /// an in-memory store, for tests.
    pub fn open_in_memory() -> Result<TransitStore, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.pragma_update(None, "foreign_keys", true)?;
        Ok(TransitStore { conn })
    }

    /// ensures all tables exist and the seed fixtures are present. safe to
    /// call any number of times; an already-initialized store is unchanged.
    pub fn initialize(&mut self) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        schema::create_tables(&tx)?;
        seed::insert_seed_rows(&tx)?;
        tx.commit()?;
        info!("transit record store initialized");
        Ok(())
    }

    // --- mutations ---

    pub fn add_driver(&self, name: &str, phone: &str) -> Result<(), StoreError> {
        mutation_ops::add_driver(&self.conn, name, phone)
    }

    pub fn add_bus(&self, bus_id: i64, model: &str, year: i64) -> Result<(), StoreError> {
        mutation_ops::add_bus(&self.conn, bus_id, model, year)
    }

    pub fn delete_bus(&self, bus_id: i64) -> Result<(), StoreError> {
        mutation_ops::delete_bus(&self.conn, bus_id)
    }

    pub fn delete_driver(&self, name: &str) -> Result<(), StoreError> {
        mutation_ops::delete_driver(&self.conn, name)
    }

    pub fn add_trip_offering(
        &self,
        trip_number: i64,
        date: &str,
        scheduled_start: &str,
        scheduled_arrival: &str,
        driver: &str,
        bus_id: i64,
    ) -> Result<(), StoreError> {
        mutation_ops::add_trip_offering(
            &self.conn,
            trip_number,
            date,
            scheduled_start,
            scheduled_arrival,
            driver,
            bus_id,
        )
    }

    pub fn delete_trip_offering(
        &self,
        trip_number: i64,
        date: &str,
        scheduled_start: &str,
    ) -> Result<(), StoreError> {
        mutation_ops::delete_trip_offering(&self.conn, trip_number, date, scheduled_start)
    }

    pub fn delete_trip(&mut self, trip_number: i64) -> Result<(), StoreError> {
        mutation_ops::delete_trip(&mut self.conn, trip_number)
    }

    pub fn record_actual_trip_data(
        &mut self,
        trip_number: i64,
        date: &str,
        scheduled_start: &str,
        entries: &[StopRecordEntry],
    ) -> Result<(), StoreError> {
        mutation_ops::record_actual_trip_data(
            &mut self.conn,
            trip_number,
            date,
            scheduled_start,
            entries,
        )
    }

    // --- queries ---

    pub fn schedule(
        &self,
        origin: &str,
        destination: &str,
        date: &str,
    ) -> Result<Vec<ScheduleRow>, StoreError> {
        query_ops::schedule(&self.conn, origin, destination, date)
    }

    pub fn all_trips(&self) -> Result<Vec<Trip>, StoreError> {
        query_ops::all_trips(&self.conn)
    }

    pub fn all_drivers(&self) -> Result<Vec<Driver>, StoreError> {
        query_ops::all_drivers(&self.conn)
    }

    pub fn all_buses(&self) -> Result<Vec<Bus>, StoreError> {
        query_ops::all_buses(&self.conn)
    }

    pub fn all_stops(&self) -> Result<Vec<Stop>, StoreError> {
        query_ops::all_stops(&self.conn)
    }

    pub fn trip_stops(&self, trip_number: i64) -> Result<Vec<TripStopRow>, StoreError> {
        query_ops::trip_stops(&self.conn, trip_number)
    }

    pub fn driver_weekly_schedule(
        &self,
        driver: &str,
        start_date: &str,
    ) -> Result<Vec<WeeklyScheduleRow>, StoreError> {
        query_ops::driver_weekly_schedule(&self.conn, driver, start_date)
    }

    pub fn actual_trip_data(
        &self,
        trip_number: i64,
        date: &str,
        scheduled_start: &str,
    ) -> Result<Vec<ActualStopRow>, StoreError> {
        query_ops::actual_trip_data(&self.conn, trip_number, date, scheduled_start)
    }

    pub fn routes(&self) -> Result<Vec<RouteRow>, StoreError> {
        query_ops::routes(&self.conn)
    }

    pub fn trip_offerings(&self) -> Result<Vec<OfferingSummaryRow>, StoreError> {
        query_ops::trip_offerings(&self.conn)
    }
}

#[cfg(test)]
mod test {
    use super::TransitStore;
    use crate::model::StopRecordEntry;
    use crate::store::StoreError;
    use rusqlite::params;

    fn seeded_store() -> TransitStore {
        let _ = env_logger::builder().is_test(true).try_init();
        let mut store = TransitStore::open_in_memory().expect("failed to open in-memory store");
        store.initialize().expect("failed to initialize store");
        store
    }

    fn entry(scheduled: &str, start: &str, arrival: &str, on: i64, off: i64) -> StopRecordEntry {
        StopRecordEntry {
            scheduled_arrival: scheduled.to_string(),
            actual_start: start.to_string(),
            actual_arrival: arrival.to_string(),
            passengers_in: on,
            passengers_out: off,
        }
    }

    #[test]
    fn test_initialize_twice_is_idempotent() {
        let mut store = seeded_store();
        store.initialize().expect("second initialize failed");
        assert_eq!(store.all_trips().unwrap().len(), 3);
        assert_eq!(store.all_drivers().unwrap().len(), 3);
        assert_eq!(store.all_buses().unwrap().len(), 3);
        assert_eq!(store.all_stops().unwrap().len(), 3);
        assert_eq!(store.trip_offerings().unwrap().len(), 3);
    }

    #[test]
    fn test_schedule_returns_seeded_offerings() {
        let store = seeded_store();
        let rows = store
            .schedule("Pomona", "Los Angeles", "2024-11-24")
            .unwrap();
        assert_eq!(rows.len(), 2);
        let first = &rows[0];
        assert_eq!(first.trip_number, 1);
        assert_eq!(first.scheduled_start.format("%H:%M").to_string(), "08:00");
        assert_eq!(first.scheduled_arrival.format("%H:%M").to_string(), "10:00");
        assert_eq!(first.driver_name, "John Doe");
        assert_eq!(first.bus_id, 101);
    }

    #[test]
    fn test_schedule_unknown_route_is_empty() {
        let store = seeded_store();
        let rows = store.schedule("Pomona", "Fresno", "2024-11-24").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_record_then_read_actual_data() {
        let mut store = seeded_store();
        let entries = vec![
            entry("08:30", "08:02", "08:34", 12, 0),
            entry("09:15", "08:40", "09:21", 3, 9),
        ];
        store
            .record_actual_trip_data(1, "2024-11-24", "08:00", &entries)
            .expect("recording actual data failed");

        let rows = store.actual_trip_data(1, "2024-11-24", "08:00").unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.windows(2).all(|w| w[0].stop_number < w[1].stop_number));
        assert_eq!(rows[0].address, "123 Main St, Pomona");
        assert_eq!(rows[0].passengers_in, 12);
        assert_eq!(rows[1].passengers_out, 9);
    }

    #[test]
    fn test_record_actual_data_rolls_back_on_mid_batch_failure() {
        let mut store = seeded_store();
        // a row for trip 2's second stop already exists, so the batch fails
        // partway through; the first stop's insert must not survive
        store
            .conn
            .execute(
                "INSERT INTO actual_trip_stop_info
                   (trip_number, date, scheduled_start, stop_number,
                    scheduled_arrival, actual_start, actual_arrival, passengers_in, passengers_out)
                 VALUES (2, '2024-11-24', '09:00', 3, '10:00', '09:01', '10:05', 4, 4)",
                params![],
            )
            .unwrap();

        let entries = vec![
            entry("09:30", "09:01", "09:33", 5, 0),
            entry("10:00", "09:40", "10:05", 0, 5),
        ];
        let result = store.record_actual_trip_data(2, "2024-11-24", "09:00", &entries);
        assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));

        let count: i64 = store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM actual_trip_stop_info
                 WHERE trip_number = 2 AND date = '2024-11-24' AND scheduled_start = '09:00'",
                params![],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 1, "only the pre-existing row should remain");
    }

    #[test]
    fn test_record_actual_data_requires_existing_offering() {
        let mut store = seeded_store();
        let entries = vec![entry("09:00", "08:01", "09:02", 1, 1)];
        let result = store.record_actual_trip_data(1, "2024-12-25", "08:00", &entries);
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_record_actual_data_requires_itinerary() {
        let mut store = seeded_store();
        // trip 3 has no itinerary entries; give it an offering so only the
        // itinerary is missing
        store
            .add_trip_offering(3, "2024-11-25", "07:00", "17:00", "John Doe", 101)
            .unwrap();
        let result = store.record_actual_trip_data(
            3,
            "2024-11-25",
            "07:00",
            &[entry("08:00", "07:01", "08:03", 2, 0)],
        );
        assert!(matches!(
            result,
            Err(StoreError::NotFound { entity: "trip itinerary", .. })
        ));
    }

    #[test]
    fn test_delete_trip_removes_offerings_itinerary_and_trip() {
        let mut store = seeded_store();
        store.delete_trip(1).expect("delete_trip failed");
        assert_eq!(store.all_trips().unwrap().len(), 2);
        assert!(store.trip_stops(1).unwrap().is_empty());
        assert!(store
            .schedule("Pomona", "Los Angeles", "2024-11-24")
            .unwrap()
            .is_empty());
        // other trips untouched
        assert_eq!(store.trip_stops(2).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_trip_rolls_back_when_a_step_fails() {
        let mut store = seeded_store();
        // force the final delete of the sequence to fail; the offerings and
        // itinerary deletes that already ran must be rolled back with it
        store
            .conn
            .execute_batch(
                "CREATE TRIGGER trip_delete_fault BEFORE DELETE ON trip
                 BEGIN SELECT RAISE(ABORT, 'simulated storage failure'); END;",
            )
            .unwrap();

        let result = store.delete_trip(1);
        assert!(matches!(result, Err(StoreError::StorageFault(_))));

        store
            .conn
            .execute_batch("DROP TRIGGER trip_delete_fault;")
            .unwrap();
        assert_eq!(store.all_trips().unwrap().len(), 3);
        assert_eq!(store.trip_stops(1).unwrap().len(), 2);
        assert_eq!(
            store
                .schedule("Pomona", "Los Angeles", "2024-11-24")
                .unwrap()
                .len(),
            2
        );
    }

    #[test]
    fn test_delete_trip_absent_reports_not_found() {
        let mut store = seeded_store();
        let result = store.delete_trip(99);
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert_eq!(store.all_trips().unwrap().len(), 3);
    }

    #[test]
    fn test_weekly_schedule_spans_month_boundary() {
        let store = seeded_store();
        for (date, start) in [
            ("2024-11-28", "09:00"),
            ("2024-12-01", "09:00"),
            ("2024-12-04", "15:00"),
            ("2024-12-05", "09:00"), // one day past the window
        ] {
            store
                .add_trip_offering(1, date, start, "11:00", "John Doe", 101)
                .unwrap();
        }

        let rows = store
            .driver_weekly_schedule("John Doe", "2024-11-28")
            .unwrap();
        let dates: Vec<String> = rows.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(dates, vec!["2024-11-28", "2024-12-01", "2024-12-04"]);
    }

    #[test]
    fn test_weekly_schedule_window_is_inclusive() {
        let store = seeded_store();
        // seeded offering for John Doe is on 2024-11-24 at 08:00
        let rows = store
            .driver_weekly_schedule("John Doe", "2024-11-24")
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].trip_number, 1);
        assert_eq!(rows[0].origin, "Pomona");

        // a window ending the day before excludes it
        let rows = store
            .driver_weekly_schedule("John Doe", "2024-11-17")
            .unwrap();
        assert!(rows.is_empty());
    }
}
