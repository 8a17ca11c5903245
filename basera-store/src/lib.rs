//! Storage pipeline for the Basera hostel administration core.
//!
//! Serves every domain collection from either the hosted backend or the
//! on-device cache, behind one uniform interface:
//!
//! - **Store**: the row-level seam with a local and a replicated tier
//! - **Repository**: typed CRUD over one collection
//! - **Residents / Accounts**: the cross-collection orchestration rules
//! - **TransferManager**: whole-dataset export, import, wipe and reset
//! - **DataStore**: the composition root, wired once at startup
//!
//! Writes commit to the cache first and replicate opportunistically;
//! reads prefer the backend and degrade to cached rows. A process that
//! never sees a backend still works, seeded with the demo dataset.

mod accounts;
mod data_store;
mod error;
mod repository;
mod residents;
mod store;
mod transfer;

pub use accounts::Accounts;
pub use data_store::DataStore;
pub use error::{StoreError, StoreResult};
pub use repository::Repository;
pub use residents::Residents;
pub use store::{LocalStore, ReplicatedStore, Store};
pub use transfer::{Snapshot, TransferManager};
