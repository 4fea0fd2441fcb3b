use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// one scheduled offering joined with its trip's route, for listing every
/// offering in the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OfferingSummaryRow {
    pub trip_number: i64,
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub scheduled_start: NaiveTime,
}
