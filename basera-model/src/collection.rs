//! Catalog of the entity collections served by the storage tiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One storage collection per entity type.
///
/// The same name addresses a collection in both tiers: it is the cache key
/// on device and the table name on the hosted backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Residents,
    Rooms,
    Billing,
    Complaints,
    GatePasses,
    Users,
}

impl Collection {
    /// Every collection, in wipe and export order.
    pub const ALL: [Collection; 6] = [
        Collection::Residents,
        Collection::Rooms,
        Collection::Billing,
        Collection::Complaints,
        Collection::GatePasses,
        Collection::Users,
    ];

    /// Storage name: cache key on device, table name on the backend.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Collection::Residents => "residents",
            Collection::Rooms => "rooms",
            Collection::Billing => "billing",
            Collection::Complaints => "complaints",
            Collection::GatePasses => "gate_passes",
            Collection::Users => "users",
        }
    }

    /// Top-level key in bulk snapshot documents.
    #[must_use]
    pub fn snapshot_key(self) -> &'static str {
        match self {
            Collection::GatePasses => "gatePasses",
            other => other.key(),
        }
    }

    /// Column a collection is sorted by, newest first, where one is defined.
    #[must_use]
    pub fn order_column(self) -> Option<&'static str> {
        match self {
            Collection::Residents => Some("admissionDate"),
            Collection::Complaints => Some("createdAt"),
            Collection::GatePasses => Some("departureDate"),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
