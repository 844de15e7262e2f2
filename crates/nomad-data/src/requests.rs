use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_APPROVED: &str = "approved";
pub const STATUS_REJECTED: &str = "rejected";

/// A trip request awaiting a manager's decision
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Request {
    pub id: i64,
    pub trip_id: i64,
    pub user_id: i64,
    pub manager_id: i64,
    pub status: String,
}

record!(Request, "requests", [id, trip_id, user_id, manager_id, status]);

impl Request {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}
