//! Login accounts and the credential pairs used to provision them.

use crate::{Collection, Record};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Access role attached to a login account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    SuperAdmin,
    Warden,
    Resident,
    Accountant,
    Guest,
}

impl UserRole {
    /// Wire form of the role, as stored in rows and used in query filters.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "SUPER_ADMIN",
            UserRole::Warden => "WARDEN",
            UserRole::Resident => "RESIDENT",
            UserRole::Accountant => "ACCOUNTANT",
            UserRole::Guest => "GUEST",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A login account.
///
/// RESIDENT-role accounts share their id with the owning resident record
/// and are created and deleted together with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: String,
    pub identifier: String,
    pub password: String,
    pub role: UserRole,
    pub name: String,
}

impl Record for UserAccount {
    const COLLECTION: Collection = Collection::Users;

    fn id(&self) -> &str {
        &self.id
    }
}

/// An identifier/password pair supplied when provisioning or changing a
/// login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}
