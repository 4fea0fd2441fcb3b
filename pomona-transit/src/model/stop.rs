use serde::{Deserialize, Serialize};

/// a physical stop location, shared across trip itineraries.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub stop_number: i64,
    pub address: String,
}
