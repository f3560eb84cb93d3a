//! SQLite Storage
//!
//! Durable key-value backend over a single rusqlite table, the desktop
//! counterpart of the browser's local storage.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use rusqlite::{params, Connection};
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

use super::storage::Storage;

/// SQLite implementation of the storage capability
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteStorage {
    /// Open (or create) a database file at `path`
    pub fn open(path: &Path) -> DomainResult<Self> {
        let conn = Connection::open(path).map_err(internal)?;
        Self::with_connection(conn)
    }

    /// Fully in-memory database, handy for tests
    pub fn open_in_memory() -> DomainResult<Self> {
        let conn = Connection::open_in_memory().map_err(internal)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> DomainResult<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS kv_store (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )
        .map_err(internal)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

fn internal(e: rusqlite::Error) -> DomainError {
    DomainError::Internal(e.to_string())
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn get(&self, key: &str) -> DomainResult<Option<String>> {
        let conn = self.conn.lock().await;

        let mut stmt = conn
            .prepare("SELECT value FROM kv_store WHERE key = ?")
            .map_err(internal)?;
        let mut rows = stmt.query(params![key]).map_err(internal)?;

        match rows.next().map_err(internal)? {
            Some(row) => Ok(Some(row.get(0).map_err(internal)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute(
            "INSERT OR REPLACE INTO kv_store (key, value) VALUES (?, ?)",
            params![key, value],
        )
        .map_err(internal)?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> DomainResult<()> {
        let conn = self.conn.lock().await;

        conn.execute("DELETE FROM kv_store WHERE key = ?", params![key])
            .map_err(internal)?;

        Ok(())
    }
}
