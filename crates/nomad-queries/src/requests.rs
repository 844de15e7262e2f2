use anyhow::Result;

use nomad_data::{Filter, Patch, Query, Record, Retrieve, Update, ROLE_MANAGER, STATUS_PENDING};

use crate::fields::{ID, ROLE, STATUS, TRIP_ID};

/// Find the requests filed for a trip
pub async fn find_request_by_user<T, DB>(db: &DB, trip_id: i64) -> Result<Vec<T>>
where
    T: Record,
    DB: Query<T>,
{
    tracing::debug!(table = T::TABLE, trip_id, "find request by user");
    db.query(&Filter::eq(TRIP_ID, trip_id)).await
}

/// Get a request if it is still pending
pub async fn get_request_data<T, DB>(db: &DB, request_id: i64) -> Result<Option<T>>
where
    T: Record,
    DB: Retrieve<T>,
{
    tracing::debug!(table = T::TABLE, request_id, "get request data");
    let filter = Filter::eq(ID, request_id).and(Filter::eq(STATUS, STATUS_PENDING));
    db.retrieve(&filter).await
}

/// Get a user if they have the manager role
pub async fn find_user_manager<T, DB>(db: &DB, manager_id: i64) -> Result<Option<T>>
where
    T: Record,
    DB: Retrieve<T>,
{
    tracing::debug!(table = T::TABLE, manager_id, "find user manager");
    let filter = Filter::eq(ID, manager_id).and(Filter::eq(ROLE, ROLE_MANAGER));
    db.retrieve(&filter).await
}

/// Update a request and return the updated rows
pub async fn update_request_status<T, DB>(db: &DB, status: &Patch, request_id: i64) -> Result<Vec<T>>
where
    T: Record,
    DB: Update<T>,
{
    tracing::debug!(table = T::TABLE, request_id, "update request status");
    db.update(status, &Filter::eq(ID, request_id)).await
}
