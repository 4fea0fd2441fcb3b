use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// one scheduled offering on a given route and date, with its assigned
/// driver and bus. returned by the schedule query for an (origin,
/// destination, date) triple.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScheduleRow {
    pub trip_number: i64,
    pub date: NaiveDate,
    /// departure time at the route origin.
    pub scheduled_start: NaiveTime,
    /// arrival time at the route destination.
    pub scheduled_arrival: NaiveTime,
    pub driver_name: String,
    pub bus_id: i64,
}
