//! Whole-dataset export, import, wipe and reset.

use crate::accounts::Accounts;
use crate::error::{StoreError, StoreResult};
use crate::repository::Repository;
use crate::store::Store;
use basera_model::{
    seed, BillingRecord, Collection, Complaint, GatePass, Record, Resident, Room, UserAccount,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// One full dataset as it travels through export and import.
///
/// Exactly six top-level keys. Unknown keys reject the document; absent
/// keys decode as empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub residents: Vec<Resident>,
    #[serde(default)]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub billing: Vec<BillingRecord>,
    #[serde(default)]
    pub complaints: Vec<Complaint>,
    #[serde(default)]
    pub gate_passes: Vec<GatePass>,
    #[serde(default)]
    pub users: Vec<UserAccount>,
}

/// Bulk operations spanning every collection.
#[derive(Clone)]
pub struct TransferManager {
    store: Arc<dyn Store>,
    residents: Repository<Resident>,
    rooms: Repository<Room>,
    billing: Repository<BillingRecord>,
    complaints: Repository<Complaint>,
    gate_passes: Repository<GatePass>,
    accounts: Accounts,
}

impl TransferManager {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            residents: Repository::new(store.clone()),
            rooms: Repository::new(store.clone()),
            billing: Repository::new(store.clone()),
            complaints: Repository::new(store.clone()),
            gate_passes: Repository::new(store.clone()),
            accounts: Accounts::new(store.clone()),
            store,
        }
    }

    /// Assembles the current dataset into one snapshot document.
    pub async fn export_all(&self) -> Snapshot {
        Snapshot {
            residents: self.residents.get_all().await,
            rooms: self.rooms.get_all().await,
            billing: self.billing.get_all().await,
            complaints: self.complaints.get_all().await,
            gate_passes: self.gate_passes.get_all().await,
            users: self.accounts.get_users().await,
        }
    }

    /// Replaces the whole dataset with the given snapshot document.
    ///
    /// The document is decoded and validated in full before anything is
    /// wiped, so a malformed payload leaves the store untouched.
    /// Imported accounts whose identifier collides with a surviving
    /// SUPER_ADMIN are skipped rather than duplicated.
    pub async fn import_all(&self, document: Value) -> StoreResult<()> {
        let snapshot: Snapshot =
            serde_json::from_value(document).map_err(|e| StoreError::Validation(e.to_string()))?;
        validate_snapshot(&snapshot)?;

        self.wipe_all().await?;

        self.residents.set_collection(&snapshot.residents).await?;
        self.rooms.set_collection(&snapshot.rooms).await?;
        self.billing.set_collection(&snapshot.billing).await?;
        self.complaints.set_collection(&snapshot.complaints).await?;
        self.gate_passes.set_collection(&snapshot.gate_passes).await?;

        let reserved = self.surviving_identifiers().await;
        for account in &snapshot.users {
            if reserved.contains(&account.identifier) {
                debug!("skipping imported account {}: identifier reserved", account.identifier);
                continue;
            }
            self.accounts.add_user(account).await?;
        }

        info!(
            "imported snapshot with {} resident(s), {} room(s), {} billing record(s)",
            snapshot.residents.len(),
            snapshot.rooms.len(),
            snapshot.billing.len(),
        );
        Ok(())
    }

    /// Empties every collection. SUPER_ADMIN accounts survive, so the
    /// wipe is safe to run repeatedly.
    pub async fn wipe_all(&self) -> StoreResult<()> {
        for collection in Collection::ALL {
            self.store.clear(collection).await?;
        }
        Ok(())
    }

    /// Wipes everything and restores the canonical demo dataset.
    pub async fn reset_to_defaults(&self) -> StoreResult<()> {
        self.wipe_all().await?;

        self.residents.set_collection(&seed::demo_residents()).await?;
        self.rooms.set_collection(&seed::demo_rooms()).await?;
        self.billing.set_collection(&seed::demo_billing()).await?;
        self.complaints.set_collection(&seed::demo_complaints()).await?;
        self.gate_passes
            .set_collection(&seed::demo_gate_passes())
            .await?;

        let existing = self.surviving_identifiers().await;
        for account in seed::default_accounts() {
            if existing.contains(&account.identifier) {
                continue;
            }
            self.accounts.add_user(&account).await?;
        }

        info!("dataset reset to the demo defaults");
        Ok(())
    }

    /// Identifiers of the accounts a wipe left behind.
    async fn surviving_identifiers(&self) -> HashSet<String> {
        self.accounts
            .get_users()
            .await
            .into_iter()
            .map(|account| account.identifier)
            .collect()
    }
}

fn validate_snapshot(snapshot: &Snapshot) -> StoreResult<()> {
    validate_records(&snapshot.residents)?;
    validate_records(&snapshot.rooms)?;
    validate_records(&snapshot.billing)?;
    validate_records(&snapshot.complaints)?;
    validate_records(&snapshot.gate_passes)?;
    validate_records(&snapshot.users)
}

fn validate_records<T: Record>(records: &[T]) -> StoreResult<()> {
    for record in records {
        record
            .validate()
            .map_err(|e| StoreError::Validation(e.to_string()))?;
    }
    Ok(())
}
