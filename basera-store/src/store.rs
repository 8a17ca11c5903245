//! Tiered row stores.
//!
//! `Store` is the seam between the typed repositories and wherever rows
//! actually live. `LocalStore` keeps everything in the on-device cache;
//! `ReplicatedStore` wraps it with write-through replication to the
//! hosted backend. Which implementation a process gets is decided once
//! at startup by the reachability probe.

use crate::error::{StoreError, StoreResult};
use async_trait::async_trait;
use basera_cache::CacheStore;
use basera_cloud::{CloudClient, CloudResult};
use basera_model::{seed, Collection, UserRole};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Row-level operations shared by both storage tiers.
#[async_trait]
pub trait Store: Send + Sync {
    /// Returns every row of a collection, newest-first where the
    /// collection declares an order column.
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Value>>;

    /// Appends rows to a collection.
    async fn insert(&self, collection: Collection, rows: Vec<Value>) -> StoreResult<()>;

    /// Shallow-merges a patch into the row with the given id.
    /// A missing id is a no-op.
    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()>;

    /// Removes the row with the given id. A missing id is a no-op.
    async fn remove(&self, collection: Collection, id: &str) -> StoreResult<()>;

    /// Replaces the whole collection with the given rows.
    async fn replace_all(&self, collection: Collection, rows: Vec<Value>) -> StoreResult<()>;

    /// Empties a collection. The users collection keeps its SUPER_ADMIN
    /// rows so a wipe can never lock everyone out.
    async fn clear(&self, collection: Collection) -> StoreResult<()>;
}

// ── Local tier ──────────────────────────────────────────────

/// Cache-only store. The first read of a collection that has never been
/// written seeds it with the demo dataset, so a fresh offline install
/// starts populated.
#[derive(Clone)]
pub struct LocalStore {
    cache: CacheStore,
}

impl LocalStore {
    #[must_use]
    pub fn new(cache: CacheStore) -> Self {
        Self { cache }
    }

    /// Runs a cache operation off the async runtime's worker threads.
    async fn blocking<T, F>(&self, task: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(CacheStore) -> StoreResult<T> + Send + 'static,
    {
        let cache = self.cache.clone();
        tokio::task::spawn_blocking(move || task(cache))
            .await
            .map_err(|e| StoreError::Task(format!("cache task panicked: {e}")))?
    }

    fn load(cache: &CacheStore, collection: Collection) -> StoreResult<Vec<Value>> {
        match cache.read_rows(collection.key())? {
            Some(rows) => Ok(rows),
            None => {
                let rows = seed::seed_rows(collection);
                cache.write_rows(collection.key(), &rows)?;
                debug!("seeded {collection} with {} demo row(s)", rows.len());
                Ok(rows)
            }
        }
    }

    fn persist(cache: &CacheStore, collection: Collection, rows: &[Value]) -> StoreResult<()> {
        cache.write_rows(collection.key(), rows)?;
        Ok(())
    }
}

#[async_trait]
impl Store for LocalStore {
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        self.blocking(move |cache| {
            let mut rows = Self::load(&cache, collection)?;
            if let Some(column) = collection.order_column() {
                sort_newest_first(&mut rows, column);
            }
            Ok(rows)
        })
        .await
    }

    async fn insert(&self, collection: Collection, rows: Vec<Value>) -> StoreResult<()> {
        self.blocking(move |cache| {
            let mut existing = Self::load(&cache, collection)?;
            existing.extend(rows);
            Self::persist(&cache, collection, &existing)
        })
        .await
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()> {
        let id = id.to_string();
        self.blocking(move |cache| {
            let mut rows = Self::load(&cache, collection)?;
            let Some(row) = rows.iter_mut().find(|row| row["id"] == id.as_str()) else {
                debug!("no {collection} row {id} to update");
                return Ok(());
            };
            merge_row(row, &patch);
            Self::persist(&cache, collection, &rows)
        })
        .await
    }

    async fn remove(&self, collection: Collection, id: &str) -> StoreResult<()> {
        let id = id.to_string();
        self.blocking(move |cache| {
            let mut rows = Self::load(&cache, collection)?;
            rows.retain(|row| row["id"] != id.as_str());
            Self::persist(&cache, collection, &rows)
        })
        .await
    }

    async fn replace_all(&self, collection: Collection, rows: Vec<Value>) -> StoreResult<()> {
        self.blocking(move |cache| Self::persist(&cache, collection, &rows))
            .await
    }

    async fn clear(&self, collection: Collection) -> StoreResult<()> {
        self.blocking(move |cache| {
            // An explicit empty write, not an erase: an erased key would
            // come back seeded on the next read.
            let kept: Vec<Value> = if collection == Collection::Users {
                Self::load(&cache, collection)?
                    .into_iter()
                    .filter(|row| row["role"] == UserRole::SuperAdmin.as_str())
                    .collect()
            } else {
                Vec::new()
            };
            Self::persist(&cache, collection, &kept)
        })
        .await
    }
}

// ── Replicated tier ─────────────────────────────────────────

/// Write-through store over the local tier and the hosted backend.
///
/// Reads prefer the backend and fall back to the cached copy when it is
/// unreachable. Single-row writes commit locally, then replicate in the
/// background so callers never wait on the network. Bulk rewrites stay
/// on the calling task because their remote delete-then-insert order
/// matters, but their remote failures are absorbed the same way: the
/// local commit already decided the outcome.
pub struct ReplicatedStore {
    local: LocalStore,
    client: Arc<CloudClient>,
}

impl ReplicatedStore {
    #[must_use]
    pub fn new(local: LocalStore, client: Arc<CloudClient>) -> Self {
        Self { local, client }
    }

    async fn replace_remote(&self, collection: Collection, rows: &[Value]) -> CloudResult<()> {
        self.client.delete_all(collection.key()).await?;
        self.client.insert_rows(collection.key(), rows).await
    }
}

#[async_trait]
impl Store for ReplicatedStore {
    async fn list(&self, collection: Collection) -> StoreResult<Vec<Value>> {
        match self
            .client
            .list(collection.key(), collection.order_column())
            .await
        {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!("backend list of {collection} failed ({e}), serving cached rows");
                self.local.list(collection).await
            }
        }
    }

    async fn insert(&self, collection: Collection, rows: Vec<Value>) -> StoreResult<()> {
        self.local.insert(collection, rows.clone()).await?;

        let client = self.client.clone();
        tokio::spawn(async move {
            if let Err(e) = client.insert_rows(collection.key(), &rows).await {
                warn!("failed to replicate insert into {collection}: {e}");
            }
        });
        Ok(())
    }

    async fn update(&self, collection: Collection, id: &str, patch: Value) -> StoreResult<()> {
        self.local.update(collection, id, patch.clone()).await?;

        let client = self.client.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(e) = client.update_row(collection.key(), &id, &patch).await {
                warn!("failed to replicate update of {collection}/{id}: {e}");
            }
        });
        Ok(())
    }

    async fn remove(&self, collection: Collection, id: &str) -> StoreResult<()> {
        self.local.remove(collection, id).await?;

        let client = self.client.clone();
        let id = id.to_string();
        tokio::spawn(async move {
            if let Err(e) = client.delete_row(collection.key(), &id).await {
                warn!("failed to replicate delete of {collection}/{id}: {e}");
            }
        });
        Ok(())
    }

    async fn replace_all(&self, collection: Collection, rows: Vec<Value>) -> StoreResult<()> {
        self.local.replace_all(collection, rows.clone()).await?;

        if let Err(e) = self.replace_remote(collection, &rows).await {
            warn!("failed to replicate rewrite of {collection}: {e}");
        }
        Ok(())
    }

    async fn clear(&self, collection: Collection) -> StoreResult<()> {
        self.local.clear(collection).await?;

        let result = if collection == Collection::Users {
            self.client
                .delete_rows_where(collection.key(), "role", "neq.SUPER_ADMIN")
                .await
        } else {
            self.client.delete_all(collection.key()).await
        };
        if let Err(e) = result {
            warn!("failed to replicate clear of {collection}: {e}");
        }
        Ok(())
    }
}

// ── Row helpers ─────────────────────────────────────────────

/// Sorts rows descending by a string column, matching the backend's
/// `order={column}.desc` listings.
fn sort_newest_first(rows: &mut [Value], column: &str) {
    rows.sort_by(|a, b| {
        let a = a[column].as_str().unwrap_or_default();
        let b = b[column].as_str().unwrap_or_default();
        b.cmp(a)
    });
}

/// Shallow field merge, mirroring how the backend applies a PATCH.
fn merge_row(row: &mut Value, patch: &Value) {
    let (Some(target), Some(fields)) = (row.as_object_mut(), patch.as_object()) else {
        return;
    };
    for (key, value) in fields {
        target.insert(key.clone(), value.clone());
    }
}
