use anyhow::Result;
use async_trait::async_trait;

use nomad_data::{Filter, Insert, Patch, Query, QueryError, Retrieve, Update};

/// A table where every operation fails
pub struct BrokenTable;

fn down() -> anyhow::Error {
    QueryError::Storage("store is down".to_string()).into()
}

#[async_trait]
impl<T: Send + 'static> Query<T> for BrokenTable {
    async fn query(&self, _filter: &Filter) -> Result<Vec<T>> {
        Err(down())
    }
}

#[async_trait]
impl<T: Send + 'static> Retrieve<T> for BrokenTable {
    async fn retrieve(&self, _filter: &Filter) -> Result<Option<T>> {
        Err(down())
    }
}

#[async_trait]
impl<T: Send + 'static> Insert<T> for BrokenTable {
    async fn insert(&self, _item: T) -> Result<T> {
        Err(down())
    }
}

#[async_trait]
impl<T: Send + 'static> Update<T> for BrokenTable {
    async fn update(&self, _patch: &Patch, _filter: &Filter) -> Result<Vec<T>> {
        Err(down())
    }
}
