use anyhow::Result;
use async_trait::async_trait;

use crate::{Filter, Patch};

/// Fetch all records matching a filter
#[async_trait]
pub trait Query<T> {
    async fn query(&self, filter: &Filter) -> Result<Vec<T>>;
}

#[async_trait]
pub trait Insert<T> {
    async fn insert(&self, item: T) -> Result<T>;
}

/// Apply a patch to every record matching the filter
/// and return the updated records.
#[async_trait]
pub trait Update<T> {
    async fn update(&self, patch: &Patch, filter: &Filter) -> Result<Vec<T>>;
}

/// Fetch a single record. When more than one record
/// matches, the store decides which one is returned.
#[async_trait]
pub trait Retrieve<T> {
    async fn retrieve(&self, filter: &Filter) -> Result<Option<T>>;
}

/// A handle on a persistent collection of `T`
pub trait Table<T>: Query<T> + Insert<T> + Update<T> + Retrieve<T> + Send + Sync {}

impl<T, DB> Table<T> for DB where DB: Query<T> + Insert<T> + Update<T> + Retrieve<T> + Send + Sync {}
