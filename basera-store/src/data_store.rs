//! Composition root for the storage pipeline.

use crate::accounts::Accounts;
use crate::repository::Repository;
use crate::residents::Residents;
use crate::store::{LocalStore, ReplicatedStore, Store};
use crate::transfer::TransferManager;
use basera_cache::CacheStore;
use basera_cloud::{resolve_mode, CloudClient, CloudConfig, MediaStore, StorageMode};
use basera_model::{BillingRecord, Complaint, GatePass, Room};
use std::sync::Arc;
use tracing::info;

/// Every storage surface the application sees, wired once at startup.
///
/// Built by [`DataStore::connect`] and passed down by the caller; there
/// is no global instance. All repositories share one [`Store`] chosen
/// by the reachability probe, so the whole process lives in one tier.
#[derive(Clone)]
pub struct DataStore {
    mode: StorageMode,
    pub residents: Residents,
    pub rooms: Repository<Room>,
    pub billing: Repository<BillingRecord>,
    pub complaints: Repository<Complaint>,
    pub gate_passes: Repository<GatePass>,
    pub accounts: Accounts,
    pub transfer: TransferManager,
}

impl DataStore {
    /// Probes the backend once and wires every repository against the
    /// winning tier.
    pub async fn connect(config: CloudConfig, cache: CacheStore) -> Self {
        let client = Arc::new(CloudClient::new(config.clone()));
        let mode = resolve_mode(&client).await;
        info!("storage mode resolved to {mode}");

        let media = Arc::new(MediaStore::new(config));
        let local = LocalStore::new(cache);
        let store: Arc<dyn Store> = match mode {
            StorageMode::Remote => Arc::new(ReplicatedStore::new(local, client)),
            StorageMode::Local => Arc::new(local),
        };

        Self {
            mode,
            residents: Residents::new(store.clone(), media),
            rooms: Repository::new(store.clone()),
            billing: Repository::new(store.clone()),
            complaints: Repository::new(store.clone()),
            gate_passes: Repository::new(store.clone()),
            accounts: Accounts::new(store.clone()),
            transfer: TransferManager::new(store),
        }
    }

    /// The probe verdict this process runs under.
    #[must_use]
    pub fn mode(&self) -> StorageMode {
        self.mode
    }
}
