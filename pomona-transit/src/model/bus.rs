use serde::{Deserialize, Serialize};

/// a vehicle in the fleet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Bus {
    pub bus_id: i64,
    pub model: String,
    pub year: i64,
}
