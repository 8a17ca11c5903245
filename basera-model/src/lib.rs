//! Domain model for the Basera hostel administration core.
//!
//! This crate defines the entity records served by the storage layer:
//! - Residents and their companion login accounts
//! - Rooms with occupancy bookkeeping
//! - Billing records, complaints and gate passes
//! - The collection catalog shared by both storage tiers
//!
//! Storage behavior (on-device caching, remote propagation, bulk transfer)
//! lives in the storage crates, not here.

mod account;
mod billing;
mod collection;
mod complaint;
mod gate_pass;
mod record;
mod resident;
mod room;

pub mod seed;

pub use account::{Credentials, UserAccount, UserRole};
pub use billing::{BillingRecord, BillingStatus, BillingType, PaymentMethod};
pub use collection::Collection;
pub use complaint::{Complaint, ComplaintCategory, ComplaintStatus};
pub use gate_pass::{GatePass, PassStatus, PassType};
pub use record::Record;
pub use resident::{Resident, ResidentStatus, ResidentType};
pub use room::{Room, RoomStatus, RoomType};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when decoding or validating records.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Returns a fresh UUIDv4 row identifier.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
