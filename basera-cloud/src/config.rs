//! Hosted backend configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the hosted backend.
///
/// A deployment that has not been pointed at a real project keeps the
/// placeholder values, and the rest of the stack treats it as offline-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Base URL of the backend project (e.g. `https://abc.supabase.co`).
    pub api_base_url: String,
    /// Project API key sent with every table request.
    pub api_key: String,
    /// Bucket that receives uploaded media objects.
    pub storage_bucket: String,
    /// Token used for media uploads.
    pub storage_token: String,
    /// How long the reachability probe waits before falling back (in seconds).
    pub probe_timeout_secs: u64,
    /// Timeout for ordinary table requests (in seconds).
    pub request_timeout_secs: u64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            api_base_url: "YOUR_SUPABASE_URL".to_string(),
            api_key: "YOUR_SUPABASE_API_KEY".to_string(),
            storage_bucket: "basera-media".to_string(),
            storage_token: "YOUR_STORAGE_TOKEN".to_string(),
            probe_timeout_secs: 2,
            request_timeout_secs: 30,
        }
    }
}

impl CloudConfig {
    /// Builds a config from the process environment, keeping placeholder
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base_url: std::env::var("BASERA_API_URL").unwrap_or(defaults.api_base_url),
            api_key: std::env::var("BASERA_API_KEY").unwrap_or(defaults.api_key),
            storage_bucket: std::env::var("BASERA_STORAGE_BUCKET")
                .unwrap_or(defaults.storage_bucket),
            storage_token: std::env::var("BASERA_STORAGE_TOKEN")
                .unwrap_or(defaults.storage_token),
            probe_timeout_secs: defaults.probe_timeout_secs,
            request_timeout_secs: defaults.request_timeout_secs,
        }
    }

    /// Returns whether real backend credentials are present.
    ///
    /// Empty values and the `YOUR_*` placeholders both count as unconfigured.
    pub fn is_configured(&self) -> bool {
        !Self::is_placeholder(&self.api_base_url) && !Self::is_placeholder(&self.api_key)
    }

    /// Returns whether media uploads can be attempted.
    pub fn storage_configured(&self) -> bool {
        self.is_configured() && !Self::is_placeholder(&self.storage_token)
    }

    fn is_placeholder(value: &str) -> bool {
        value.is_empty() || value.starts_with("YOUR_")
    }
}
