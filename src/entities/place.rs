use serde::{Deserialize, Serialize};

/// A point of interest a user has saved, with a visited flag.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Place {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub category: Option<String>,
    pub visited: bool,
}
