use serde::{Deserialize, Serialize};

/// caller-supplied observations for one stop of a trip offering, collected
/// ahead of time and submitted as an ordered batch (one entry per itinerary
/// stop, in sequence order). times are `HH:MM` strings as entered by the
/// operator; they are validated when the batch is recorded.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StopRecordEntry {
    pub scheduled_arrival: String,
    pub actual_start: String,
    pub actual_arrival: String,
    pub passengers_in: i64,
    pub passengers_out: i64,
}
