//! MemoryTable - Vec-backed table for tests and development.

use std::sync::{Arc, RwLock};

use anyhow::Result;
use async_trait::async_trait;

use crate::{Filter, Insert, Patch, Query, QueryError, Record, Retrieve, Update};

/// In-memory collection of records. Clone-friendly via Arc.
#[derive(Debug, Clone)]
pub struct MemoryTable<T> {
    rows: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of stored rows. Still counts the rows after a
    /// writer panicked, while the operations report the poisoned lock.
    pub fn len(&self) -> usize {
        match self.rows.read() {
            Ok(rows) => rows.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(operation: &str) -> QueryError {
    QueryError::Storage(format!("lock poisoned during {}", operation))
}

#[async_trait]
impl<T: Record> Query<T> for MemoryTable<T> {
    async fn query(&self, filter: &Filter) -> Result<Vec<T>> {
        filter.check::<T>()?;
        let rows = self.rows.read().map_err(|_| poisoned("query"))?;
        let found = rows.iter().filter(|r| filter.matches(*r)).cloned().collect();
        Ok(found)
    }
}

#[async_trait]
impl<T: Record> Retrieve<T> for MemoryTable<T> {
    async fn retrieve(&self, filter: &Filter) -> Result<Option<T>> {
        filter.check::<T>()?;
        let rows = self.rows.read().map_err(|_| poisoned("retrieve"))?;
        Ok(rows.iter().find(|r| filter.matches(*r)).cloned())
    }
}

#[async_trait]
impl<T: Record> Insert<T> for MemoryTable<T> {
    async fn insert(&self, mut item: T) -> Result<T> {
        let mut rows = self.rows.write().map_err(|_| poisoned("insert"))?;
        let id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        item.set_id(id);
        rows.push(item.clone());
        tracing::trace!(table = T::TABLE, id, "inserted row");
        Ok(item)
    }
}

#[async_trait]
impl<T: Record> Update<T> for MemoryTable<T> {
    async fn update(&self, patch: &Patch, filter: &Filter) -> Result<Vec<T>> {
        patch.check::<T>()?;
        filter.check::<T>()?;
        let mut rows = self.rows.write().map_err(|_| poisoned("update"))?;

        // Patch all rows first, so a failing row leaves the table untouched
        let mut updated = vec![];
        for (idx, row) in rows.iter().enumerate() {
            if filter.matches(row) {
                updated.push((idx, row.patched(patch)?));
            }
        }
        for (idx, row) in updated.iter() {
            rows[*idx] = row.clone();
        }
        tracing::trace!(table = T::TABLE, count = updated.len(), "updated rows");
        Ok(updated.into_iter().map(|(_, row)| row).collect())
    }
}
