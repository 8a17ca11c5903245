//! Login account management.
//!
//! The credential store behind sign-in. Verification itself happens
//! elsewhere; this only serves and mutates the account rows.

use crate::error::StoreResult;
use crate::repository::Repository;
use crate::store::Store;
use basera_model::{Credentials, UserAccount};
use serde_json::json;
use std::sync::Arc;

/// Repository for login accounts.
#[derive(Clone)]
pub struct Accounts {
    repo: Repository<UserAccount>,
}

impl Accounts {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self {
            repo: Repository::new(store),
        }
    }

    /// Returns every readable login account.
    pub async fn get_users(&self) -> Vec<UserAccount> {
        self.repo.get_all().await
    }

    /// Adds a login account.
    pub async fn add_user(&self, account: &UserAccount) -> StoreResult<()> {
        self.repo.add(account).await
    }

    /// Replaces the identifier and password on a resident's login.
    pub async fn update_credentials(
        &self,
        resident_id: &str,
        credentials: &Credentials,
    ) -> StoreResult<()> {
        self.repo
            .update(
                resident_id,
                json!({
                    "identifier": credentials.identifier,
                    "password": credentials.password,
                }),
            )
            .await
    }
}
