use serde::{Deserialize, Serialize};

/// A user-defined grouping label. Names are unique across all lists,
/// enforced by the store at write time.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomList {
    pub id: i32,
    pub name: String,
}
