//! Startup reachability probe.
//!
//! Runs exactly once, before any repository is handed out, and decides
//! whether this process talks to the hosted backend or stays entirely
//! on-device. The verdict never changes for the lifetime of the process;
//! a backend that dies later is handled per-request by cache fallbacks.

use crate::client::CloudClient;
use crate::error::CloudResult;
use basera_model::{seed, UserRole};
use serde_json::Value;
use std::fmt;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Where collection data lives for the rest of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// Backend reachable: writes replicate, reads prefer the backend.
    Remote,
    /// No usable backend: everything stays in the on-device cache.
    Local,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageMode::Remote => f.write_str("REMOTE"),
            StorageMode::Local => f.write_str("LOCAL"),
        }
    }
}

/// Probes the backend and picks the storage mode.
///
/// Placeholder credentials skip the network entirely. A probe that
/// errors or exceeds the configured timeout falls back to local mode;
/// it never blocks startup for longer than that.
pub async fn resolve_mode(client: &CloudClient) -> StorageMode {
    if !client.config().is_configured() {
        info!("backend credentials not configured, using local storage");
        return StorageMode::Local;
    }

    let wait = Duration::from_secs(client.config().probe_timeout_secs);
    match timeout(wait, client.probe()).await {
        Ok(Ok(())) => {
            bootstrap_backend(client).await;
            info!("backend reachable, using remote storage");
            StorageMode::Remote
        }
        Ok(Err(e)) => {
            warn!("backend unreachable ({e}), falling back to local storage");
            StorageMode::Local
        }
        Err(_) => {
            warn!(
                "backend probe timed out after {}s, falling back to local storage",
                wait.as_secs()
            );
            StorageMode::Local
        }
    }
}

/// One-time remote setup after a successful probe.
///
/// Both steps are best-effort: a project without the schema procedure,
/// or one that rejects the seed insert, still runs in remote mode.
async fn bootstrap_backend(client: &CloudClient) {
    if let Err(e) = client.rpc("init_schema").await {
        debug!("schema init procedure unavailable: {e}");
    }

    match client.list("users", None).await {
        Ok(rows) if rows.is_empty() => {
            if let Err(e) = seed_admin(client).await {
                warn!("failed to seed admin account on backend: {e}");
            }
        }
        Ok(_) => {}
        Err(e) => warn!("could not check backend accounts: {e}"),
    }
}

/// Inserts the default SUPER_ADMIN rows into an empty users table so a
/// fresh project is immediately sign-in-able.
async fn seed_admin(client: &CloudClient) -> CloudResult<()> {
    let admins: Vec<Value> = seed::default_accounts()
        .iter()
        .filter(|account| account.role == UserRole::SuperAdmin)
        .map(serde_json::to_value)
        .collect::<Result<_, _>>()?;

    client.insert_rows("users", &admins).await
}
