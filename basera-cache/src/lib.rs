//! Durable on-device cache, one value per entity collection.
//!
//! Writes here are what makes an operation count as committed: the remote
//! backend only ever receives best-effort copies. The store is a single
//! SQLite table mapping a collection key to its serialized rows, which
//! preserves the key-per-collection layout the rest of the core expects
//! while giving read-after-write durability on disk.

mod error;

pub use error::{CacheError, CacheResult};

use rusqlite::{Connection, params};
use serde_json::Value;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::UNIX_EPOCH;
use tracing::debug;

/// Key/value store for whole entity collections, backed by SQLite.
///
/// Cloning is cheap; all clones share one connection.
#[derive(Clone)]
pub struct CacheStore {
    conn: Arc<Mutex<Connection>>,
}

impl CacheStore {
    /// Opens (or creates) a cache at the given path.
    pub fn open(path: &Path) -> CacheResult<Self> {
        let conn = Connection::open(path)
            .map_err(|e| CacheError::Database(format!("failed to open cache: {e}")))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Opens an in-memory cache (for testing).
    pub fn open_in_memory() -> CacheResult<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| CacheError::Database(format!("failed to open in-memory cache: {e}")))?;
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> CacheResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS collections (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            ",
        )
        .map_err(|e| CacheError::Database(format!("failed to init cache schema: {e}")))?;
        Ok(())
    }

    /// Raw stored value under `key`, or `None` when the key has never been
    /// written.
    pub fn read(&self, key: &str) -> CacheResult<Option<String>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn
            .prepare("SELECT value FROM collections WHERE key = ?1")
            .map_err(|e| CacheError::Database(format!("failed to prepare read: {e}")))?;
        let mut rows = stmt
            .query(params![key])
            .map_err(|e| CacheError::Database(format!("failed to read {key}: {e}")))?;
        match rows
            .next()
            .map_err(|e| CacheError::Database(format!("failed to read {key}: {e}")))?
        {
            Some(row) => {
                let value: String = row
                    .get(0)
                    .map_err(|e| CacheError::Database(format!("failed to read {key}: {e}")))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn write(&self, key: &str, value: &str) -> CacheResult<()> {
        let now = UNIX_EPOCH
            .elapsed()
            .map(|d| d.as_millis() as i64)
            .unwrap_or_default();
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT OR REPLACE INTO collections (key, value, updated_at) VALUES (?1, ?2, ?3)",
            params![key, value, now],
        )
        .map_err(|e| CacheError::Database(format!("failed to write {key}: {e}")))?;
        Ok(())
    }

    /// Removes `key` entirely, as if it had never been written.
    pub fn erase(&self, key: &str) -> CacheResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM collections WHERE key = ?1", params![key])
            .map_err(|e| CacheError::Database(format!("failed to erase {key}: {e}")))?;
        debug!("erased cache key {key}");
        Ok(())
    }

    /// Stored rows under `key`, parsed. `None` when the key has never been
    /// written.
    pub fn read_rows(&self, key: &str) -> CacheResult<Option<Vec<Value>>> {
        match self.read(key)? {
            Some(raw) => {
                let rows: Vec<Value> = serde_json::from_str(&raw)?;
                Ok(Some(rows))
            }
            None => Ok(None),
        }
    }

    /// Serializes and writes `rows` under `key`.
    pub fn write_rows(&self, key: &str, rows: &[Value]) -> CacheResult<()> {
        let raw = serde_json::to_string(rows)?;
        self.write(key, &raw)
    }
}
