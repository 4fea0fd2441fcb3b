use serde::{Deserialize, Serialize};

/// a fixed route definition between two named locations, independent of any
/// date of service. scheduled runs of a trip are stored separately as trip
/// offerings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub trip_number: i64,
    pub origin: String,
    pub destination: String,
}
