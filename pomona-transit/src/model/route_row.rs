use serde::{Deserialize, Serialize};

/// a distinct (origin, destination) pair served by at least one trip.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteRow {
    pub origin: String,
    pub destination: String,
}
