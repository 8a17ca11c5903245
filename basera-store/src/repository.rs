//! Typed collection repositories.

use crate::error::StoreResult;
use crate::store::Store;
use basera_model::Record;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::warn;

/// Typed view over one collection of a [`Store`].
///
/// Reads are total: a backend outage or a malformed row yields fewer
/// records after a logged warning instead of an error, so screens keep
/// rendering with whatever the pipeline can produce.
pub struct Repository<T: Record> {
    store: Arc<dyn Store>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for Repository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Record> Repository<T> {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            store,
            _marker: PhantomData,
        }
    }

    /// Returns every readable record in the collection.
    pub async fn get_all(&self) -> Vec<T> {
        match self.store.list(T::COLLECTION).await {
            Ok(rows) => decode_rows(rows),
            Err(e) => {
                warn!("listing {} failed: {e}", T::COLLECTION);
                Vec::new()
            }
        }
    }

    /// Validates and persists a new record.
    pub async fn add(&self, record: &T) -> StoreResult<()> {
        record.validate()?;
        let row = record.encode()?;
        self.store.insert(T::COLLECTION, vec![row]).await
    }

    /// Applies a partial update to the record with the given id.
    pub async fn update(&self, id: &str, patch: Value) -> StoreResult<()> {
        self.store.update(T::COLLECTION, id, patch).await
    }

    /// Deletes the record with the given id.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        self.store.remove(T::COLLECTION, id).await
    }

    /// Replaces the whole collection, validating every record first.
    pub async fn set_collection(&self, records: &[T]) -> StoreResult<()> {
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            record.validate()?;
            rows.push(record.encode()?);
        }
        self.store.replace_all(T::COLLECTION, rows).await
    }
}

/// Decodes rows into records, dropping any the model rejects.
fn decode_rows<T: Record>(rows: Vec<Value>) -> Vec<T> {
    rows.into_iter()
        .filter_map(|row| match T::decode(row) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("dropping unreadable {} row: {e}", T::COLLECTION);
                None
            }
        })
        .collect()
}
