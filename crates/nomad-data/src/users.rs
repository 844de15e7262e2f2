use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_REQUESTER: &str = "requester";

#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: String,
}

record!(User, "users", [id, first_name, last_name, email, role]);

impl User {
    pub fn is_manager(&self) -> bool {
        self.role == ROLE_MANAGER
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Assignment of a user to their line manager
#[derive(Debug, Clone, Default, PartialEq, FromRow, Serialize, Deserialize)]
pub struct UserManagement {
    pub id: i64,
    pub user_id: i64,
    pub manager_id: i64,
}

record!(UserManagement, "user_managements", [id, user_id, manager_id]);
