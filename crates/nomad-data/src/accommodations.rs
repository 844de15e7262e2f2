use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Filter, Query};

pub const STATUS_AVAILABLE: &str = "available";
pub const STATUS_BOOKED: &str = "booked";

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Accommodation {
    pub id: i64,
    pub name: String,
    pub place_id: i64,
    pub owner_id: i64,
    pub status: String,
}

record!(
    Accommodation,
    "accommodations",
    [id, name, place_id, owner_id, status]
);

impl Accommodation {
    /// Get all rooms of the accommodation
    pub async fn get_rooms<DB>(&self, db: &DB) -> Result<Vec<Room>>
    where
        DB: Query<Room>,
    {
        let rooms = db.query(&Filter::eq("accommodation_id", self.id)).await?;
        Ok(rooms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub accommodation_id: i64,
    pub name: String,
    pub kind: String,
    pub price: f64,
    pub status: String,
}

record!(
    Room,
    "rooms",
    [id, accommodation_id, name, kind, price, status]
);

impl Room {
    pub fn is_available(&self) -> bool {
        self.status == STATUS_AVAILABLE
    }
}
