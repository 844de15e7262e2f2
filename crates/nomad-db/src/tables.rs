use anyhow::Result;
use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, FromRow};

use nomad_data::{Filter, Insert, Patch, Query, QueryError, Record, Retrieve, Update};

use crate::{results::Id, sql, Connection};

#[async_trait]
impl<T> Query<T> for Connection
where
    T: Record + for<'r> FromRow<'r, SqliteRow>,
{
    async fn query(&self, filter: &Filter) -> Result<Vec<T>> {
        filter.check::<T>()?;
        let mut qry = sql::select::<T>(filter);
        tracing::trace!(sql = qry.sql(), "query");

        let mut conn = self.lock().await;
        let rows: Vec<T> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(rows)
    }
}

#[async_trait]
impl<T> Retrieve<T> for Connection
where
    T: Record + for<'r> FromRow<'r, SqliteRow>,
{
    async fn retrieve(&self, filter: &Filter) -> Result<Option<T>> {
        filter.check::<T>()?;
        let mut qry = sql::select::<T>(filter);
        qry.push(" LIMIT 1");
        tracing::trace!(sql = qry.sql(), "retrieve");

        let mut conn = self.lock().await;
        let row: Option<T> = qry.build_query_as().fetch_optional(&mut *conn).await?;
        Ok(row)
    }
}

#[async_trait]
impl<T> Insert<T> for Connection
where
    T: Record + for<'r> FromRow<'r, SqliteRow>,
{
    async fn insert(&self, item: T) -> Result<T> {
        let insert: Id = {
            let mut qry = sql::insert(&item);
            tracing::trace!(sql = qry.sql(), "insert");
            let mut conn = self.lock().await;
            qry.build_query_as().fetch_one(&mut *conn).await?
        };
        let filter = Filter::eq("id", insert.id);
        let row = <Self as Retrieve<T>>::retrieve(self, &filter)
            .await?
            .ok_or(QueryError::NotFound)?;
        Ok(row)
    }
}

#[async_trait]
impl<T> Update<T> for Connection
where
    T: Record + for<'r> FromRow<'r, SqliteRow>,
{
    async fn update(&self, patch: &Patch, filter: &Filter) -> Result<Vec<T>> {
        patch.check::<T>()?;
        filter.check::<T>()?;
        let mut qry = sql::update::<T>(patch, filter);
        tracing::trace!(sql = qry.sql(), "update");

        let mut conn = self.lock().await;
        let rows: Vec<T> = qry.build_query_as().fetch_all(&mut *conn).await?;
        Ok(rows)
    }
}
