use anyhow::Result;

use nomad_data::{Filter, Query, Record, STATUS_AVAILABLE};

use crate::fields::{ID, STATUS};

/// Find accommodations using a filter built by the caller
pub async fn find_accommodation<T, DB>(db: &DB, filter: &Filter) -> Result<Vec<T>>
where
    T: Record,
    DB: Query<T>,
{
    tracing::debug!(table = T::TABLE, ?filter, "find accommodation");
    db.query(filter).await
}

/// Find a room if it is available
pub async fn find_room<T, DB>(db: &DB, room_id: i64) -> Result<Vec<T>>
where
    T: Record,
    DB: Query<T>,
{
    tracing::debug!(table = T::TABLE, room_id, "find room");
    let filter = Filter::eq(ID, room_id).and(Filter::eq(STATUS, STATUS_AVAILABLE));
    db.query(&filter).await
}
