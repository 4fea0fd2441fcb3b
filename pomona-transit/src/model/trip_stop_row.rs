use serde::{Deserialize, Serialize};

/// one itinerary entry of a trip, joined with the stop address. itinerary
/// queries return these ordered by ascending sequence number.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TripStopRow {
    pub stop_number: i64,
    pub address: String,
    pub sequence_number: i64,
    /// planned driving time to reach this stop, in minutes.
    pub driving_time_minutes: i64,
}
