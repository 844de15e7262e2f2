use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A supported travel location
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub country: String,
}

record!(Place, "places", [id, name, country]);

/// Origin and destination of a route. Each one
/// is looked up on its own and may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Places<T> {
    pub origin: Option<T>,
    pub destination: Option<T>,
}

impl<T> Places<T> {
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.destination.is_some()
    }
}
