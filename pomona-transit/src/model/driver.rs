use serde::{Deserialize, Serialize};

/// a driver on staff. identified internally by a surrogate id so that the
/// (unique) display name can change without cascading updates; callers
/// address drivers by name.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Driver {
    pub driver_id: i64,
    pub name: String,
    pub phone: String,
}
