use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// one offering assigned to a driver within a queried calendar week,
/// ordered by date then scheduled start time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WeeklyScheduleRow {
    pub trip_number: i64,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub scheduled_start: NaiveTime,
    pub scheduled_arrival: NaiveTime,
}
