use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// the realized outcome at one stop of a trip offering, joined with the
/// stop address. rows for an offering are returned ordered by stop number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ActualStopRow {
    pub stop_number: i64,
    pub address: String,
    pub scheduled_arrival: NaiveTime,
    pub actual_start: NaiveTime,
    pub actual_arrival: NaiveTime,
    pub passengers_in: i64,
    pub passengers_out: i64,
}
