use super::store_error::StoreError;
use rusqlite::{params, Connection};

/// baseline fixture rows inserted at initialization. every insert is
/// `OR IGNORE`, keyed on the table's primary key (the unique name for
/// drivers), so re-seeding an initialized store changes nothing.
const SEED_TRIPS: &[(i64, &str, &str)] = &[
    (1, "Pomona", "Los Angeles"),
    (2, "Pomona", "San Diego"),
    (3, "Los Angeles", "San Francisco"),
];

const SEED_DRIVERS: &[(&str, &str)] = &[
    ("John Doe", "555-0101"),
    ("Jane Smith", "555-0102"),
    ("Bob Wilson", "555-0103"),
];

const SEED_BUSES: &[(i64, &str, i64)] = &[
    (101, "Mercedes Sprinter", 2020),
    (102, "Ford Transit", 2021),
    (103, "Toyota Coaster", 2019),
];

const SEED_STOPS: &[(i64, &str)] = &[
    (1, "123 Main St, Pomona"),
    (2, "456 Broadway, Los Angeles"),
    (3, "789 Ocean Ave, San Diego"),
];

/// (trip, date, start, arrival, driver name, bus)
const SEED_OFFERINGS: &[(i64, &str, &str, &str, &str, i64)] = &[
    (1, "2024-11-24", "08:00", "10:00", "John Doe", 101),
    (1, "2024-11-24", "12:00", "14:00", "Jane Smith", 102),
    (2, "2024-11-24", "09:00", "13:00", "Bob Wilson", 103),
];

/// (trip, stop, sequence, driving time in minutes)
const SEED_TRIP_STOPS: &[(i64, i64, i64, i64)] =
    &[(1, 1, 1, 30), (1, 2, 2, 45), (2, 1, 1, 30), (2, 3, 2, 60)];

pub fn insert_seed_rows(conn: &Connection) -> Result<(), StoreError> {
    for (trip_number, origin, destination) in SEED_TRIPS {
        conn.execute(
            "INSERT OR IGNORE INTO trip (trip_number, origin, destination) VALUES (?1, ?2, ?3)",
            params![trip_number, origin, destination],
        )?;
    }
    for (name, phone) in SEED_DRIVERS {
        conn.execute(
            "INSERT OR IGNORE INTO driver (name, phone) VALUES (?1, ?2)",
            params![name, phone],
        )?;
    }
    for (bus_id, model, year) in SEED_BUSES {
        conn.execute(
            "INSERT OR IGNORE INTO bus (bus_id, model, year) VALUES (?1, ?2, ?3)",
            params![bus_id, model, year],
        )?;
    }
    for (stop_number, address) in SEED_STOPS {
        conn.execute(
            "INSERT OR IGNORE INTO stop (stop_number, address) VALUES (?1, ?2)",
            params![stop_number, address],
        )?;
    }
    // offerings name their driver; resolve to the surrogate id on insert
    for (trip_number, date, start, arrival, driver, bus_id) in SEED_OFFERINGS {
        conn.execute(
            "INSERT OR IGNORE INTO trip_offering
               (trip_number, date, scheduled_start, scheduled_arrival, driver_id, bus_id)
             VALUES (?1, ?2, ?3, ?4, (SELECT driver_id FROM driver WHERE name = ?5), ?6)",
            params![trip_number, date, start, arrival, driver, bus_id],
        )?;
    }
    for (trip_number, stop_number, sequence_number, driving_time) in SEED_TRIP_STOPS {
        conn.execute(
            "INSERT OR IGNORE INTO trip_stop_info
               (trip_number, stop_number, sequence_number, driving_time_minutes)
             VALUES (?1, ?2, ?3, ?4)",
            params![trip_number, stop_number, sequence_number, driving_time],
        )?;
    }
    Ok(())
}
