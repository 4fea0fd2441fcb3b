use super::store_error::StoreError;
use rusqlite::Connection;

/// full DDL for the store, applied as one batch. every statement is
/// `IF NOT EXISTS` so re-applying on an initialized store is a no-op.
///
/// drivers carry a surrogate `driver_id`; the name stays unique but is a
/// display attribute, and offerings reference the surrogate. dates and times
/// are TEXT in `YYYY-MM-DD` / `HH:MM` form (see the codec module).
/// `actual_trip_stop_info` references the trip rather than the offering row
/// so that recorded history can outlive a deleted offering.
const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS trip (
  trip_number INTEGER PRIMARY KEY,
  origin TEXT NOT NULL,
  destination TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS bus (
  bus_id INTEGER PRIMARY KEY,
  model TEXT NOT NULL,
  year INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS driver (
  driver_id INTEGER PRIMARY KEY,
  name TEXT NOT NULL UNIQUE,
  phone TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS stop (
  stop_number INTEGER PRIMARY KEY,
  address TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS trip_offering (
  trip_number INTEGER NOT NULL,
  date TEXT NOT NULL,
  scheduled_start TEXT NOT NULL,
  scheduled_arrival TEXT NOT NULL,
  driver_id INTEGER NOT NULL,
  bus_id INTEGER NOT NULL,
  PRIMARY KEY (trip_number, date, scheduled_start),
  FOREIGN KEY (trip_number) REFERENCES trip (trip_number),
  FOREIGN KEY (driver_id) REFERENCES driver (driver_id),
  FOREIGN KEY (bus_id) REFERENCES bus (bus_id)
);

CREATE TABLE IF NOT EXISTS trip_stop_info (
  trip_number INTEGER NOT NULL,
  stop_number INTEGER NOT NULL,
  sequence_number INTEGER NOT NULL,
  driving_time_minutes INTEGER NOT NULL,
  PRIMARY KEY (trip_number, stop_number),
  UNIQUE (trip_number, sequence_number),
  FOREIGN KEY (trip_number) REFERENCES trip (trip_number),
  FOREIGN KEY (stop_number) REFERENCES stop (stop_number)
);

CREATE TABLE IF NOT EXISTS actual_trip_stop_info (
  trip_number INTEGER NOT NULL,
  date TEXT NOT NULL,
  scheduled_start TEXT NOT NULL,
  stop_number INTEGER NOT NULL,
  scheduled_arrival TEXT NOT NULL,
  actual_start TEXT NOT NULL,
  actual_arrival TEXT NOT NULL,
  passengers_in INTEGER NOT NULL,
  passengers_out INTEGER NOT NULL,
  PRIMARY KEY (trip_number, date, scheduled_start, stop_number),
  FOREIGN KEY (trip_number) REFERENCES trip (trip_number),
  FOREIGN KEY (stop_number) REFERENCES stop (stop_number)
);
"#;

pub fn create_tables(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(CREATE_TABLES)?;
    Ok(())
}
