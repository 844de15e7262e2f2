use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::{Mutex, MutexGuard};

use crate::schema;

/// A thread safe connection to the database
#[derive(Clone)]
pub struct Connection(Arc<Mutex<SqliteConnection>>);

impl Connection {
    /// Open a connection to the database
    pub async fn open(filename: &str) -> Result<Self> {
        let opts = SqliteConnectOptions::from_str(filename)?
            .create_if_missing(true)
            .foreign_keys(true);
        let conn = SqliteConnection::connect_with(&opts).await?;
        tracing::debug!(filename, "opened database");
        Ok(Self(Arc::new(Mutex::new(conn))))
    }

    /// Open a new test database connection.
    /// The database will be created on each open and
    /// removed when the handle is dropped.
    pub async fn open_test() -> (TestHandle, Self) {
        let path = std::env::temp_dir()
            .join(format!("nomad_test_{}.sqlite3", rand::random::<u64>()));
        let handle = TestHandle { path: path.clone() };
        let conn = Self::open(&path.to_string_lossy()).await.unwrap();

        // Install the schema
        schema::install(&conn).await.unwrap();

        (handle, conn)
    }

    /// Acquire exclusive access to the underlying connection
    pub async fn lock(&self) -> MutexGuard<'_, SqliteConnection> {
        self.0.lock().await
    }
}

pub struct TestHandle {
    path: PathBuf,
}

impl TestHandle {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_test_removes_file() {
        let path = {
            let (handle, _conn) = Connection::open_test().await;
            assert!(handle.path().exists());
            handle.path().to_path_buf()
        };
        assert!(!path.exists());
    }
}
