use anyhow::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::{Filter, Query, Request};

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub user_id: i64,
    pub origin_id: i64,
    pub destination_id: i64,
    pub travel_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub reason: String,
    pub status: String,
}

record!(
    Trip,
    "trips",
    [id, user_id, origin_id, destination_id, travel_date, return_date, reason, status]
);

impl Trip {
    /// Get the travel requests filed for this trip
    pub async fn get_requests<DB>(&self, db: &DB) -> Result<Vec<Request>>
    where
        DB: Query<Request>,
    {
        let requests = db.query(&Filter::eq("trip_id", self.id)).await?;
        Ok(requests)
    }

    pub fn is_return_trip(&self) -> bool {
        self.return_date.is_some()
    }
}

/// A room reservation made for a stay
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub user_id: i64,
    pub accommodation_id: i64,
    pub room_id: i64,
    pub travel_date: NaiveDate,
    pub checkout_date: Option<NaiveDate>,
}

record!(
    Booking,
    "bookings",
    [id, user_id, accommodation_id, room_id, travel_date, checkout_date]
);
