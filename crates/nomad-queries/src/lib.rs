//! Named queries of the trip booking application.
//!
//! Every query is generic over the table handle it runs on,
//! so the same query works on SQLite and in memory.

use anyhow::Result;

use nomad_data::{Insert, Record};

mod accommodations;
pub use accommodations::*;

mod requests;
pub use requests::*;

mod trips;
pub use trips::*;

#[cfg(test)]
mod testing;

/// Column names used by the queries
pub mod fields {
    pub const ID: &str = "id";
    pub const USER_ID: &str = "user_id";
    pub const TRIP_ID: &str = "trip_id";
    pub const TRAVEL_DATE: &str = "travel_date";
    pub const STATUS: &str = "status";
    pub const ROLE: &str = "role";
}

/// Store a new record
pub async fn create<T, DB>(db: &DB, data: T) -> Result<T>
where
    T: Record,
    DB: Insert<T>,
{
    tracing::debug!(table = T::TABLE, "create");
    let created = db.insert(data).await?;
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BrokenTable;

    use nomad_data::{MemoryTable, Place, Query, Filter};
    use nomad_db::Connection;

    fn place(name: &str) -> Place {
        Place {
            name: name.to_string(),
            country: "Rwanda".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_returns_record() {
        let (_handle, db) = Connection::open_test().await;
        let created = create(&db, place("Kigali")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.name, "Kigali");
        assert_eq!(created.country, "Rwanda");
    }

    #[tokio::test]
    async fn test_create_store_rejects() {
        let db = BrokenTable;
        let result: Result<Place> = create(&db, place("Kigali")).await;
        assert_eq!(result.unwrap_err().to_string(), "Storage error: store is down");
    }

    #[tokio::test]
    async fn test_create_concurrent_sqlite() {
        let (_handle, db) = Connection::open_test().await;
        let (a, b) = tokio::join!(create(&db, place("Lagos")), create(&db, place("Nairobi")));
        let (a, b) = (a.unwrap(), b.unwrap());
        assert_ne!(a.id, b.id);

        let places: Vec<Place> = db.query(&Filter::All).await.unwrap();
        let mut names: Vec<String> = places.into_iter().map(|p| p.name).collect();
        names.sort();
        assert_eq!(names, vec!["Lagos", "Nairobi"]);
    }

    #[tokio::test]
    async fn test_create_concurrent_tasks() {
        let db = MemoryTable::new();
        let tasks: Vec<_> = (0..8)
            .map(|i| {
                let db = db.clone();
                tokio::spawn(async move { create(&db, place(&format!("Place {}", i))).await })
            })
            .collect();

        let mut ids = vec![];
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id);
        }
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
        assert_eq!(db.len(), 8);
    }
}
