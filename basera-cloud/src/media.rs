//! Media uploads for data-URI images.
//!
//! Profile photos arrive from the UI as `data:image/...;base64,...`
//! strings. Persisting those inline bloats every row that carries one,
//! so when the backend is reachable the payload is swapped for a public
//! object URL before the row is written. Anything that cannot be
//! uploaded is kept inline unchanged; storing an image never fails.

use crate::config::CloudConfig;
use crate::error::{CloudError, CloudResult};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::Client;
use std::time::{Duration, SystemTime};
use tracing::{debug, warn};

/// Uploads image payloads to the backend's object storage.
#[derive(Debug, Clone)]
pub struct MediaStore {
    config: CloudConfig,
    client: Client,
}

impl MediaStore {
    /// Creates a new media store.
    pub fn new(config: CloudConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    /// Stores an image payload, returning the value to persist.
    ///
    /// Data-URI payloads are uploaded and replaced with their public
    /// URL. Everything else (already-uploaded URLs, empty strings) and
    /// any payload that cannot be uploaded passes through untouched.
    pub async fn store(&self, payload: &str) -> String {
        let Some((mime, encoded)) = parse_data_uri(payload) else {
            return payload.to_string();
        };

        if !self.config.storage_configured() {
            debug!("media storage not configured, keeping image inline");
            return payload.to_string();
        }

        let bytes = match BASE64.decode(encoded) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("image payload is not valid base64 ({e}), keeping it inline");
                return payload.to_string();
            }
        };

        let name = object_name(mime);
        match self.upload(&name, mime, bytes).await {
            Ok(url) => {
                debug!("uploaded image as {name}");
                url
            }
            Err(e) => {
                warn!("media upload failed ({e}), keeping image inline");
                payload.to_string()
            }
        }
    }

    async fn upload(&self, name: &str, mime: &str, bytes: Vec<u8>) -> CloudResult<String> {
        let bucket = urlencoding::encode(&self.config.storage_bucket);
        let object = urlencoding::encode(name);

        let response = self
            .client
            .post(format!(
                "{}/storage/v1/object/{bucket}/{object}",
                self.config.api_base_url
            ))
            .bearer_auth(&self.config.storage_token)
            .header("Content-Type", mime)
            .body(bytes)
            .send()
            .await
            .map_err(|e| CloudError::Network(format!("media upload failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CloudError::Api { status, message });
        }

        Ok(format!(
            "{}/storage/v1/object/public/{bucket}/{object}",
            self.config.api_base_url
        ))
    }
}

/// Splits a `data:{mime};base64,{payload}` string into its parts.
fn parse_data_uri(payload: &str) -> Option<(&str, &str)> {
    let rest = payload.strip_prefix("data:")?;
    let (mime, encoded) = rest.split_once(";base64,")?;
    if mime.is_empty() {
        return None;
    }
    Some((mime, encoded))
}

/// Builds a collision-resistant object name from the upload time and a
/// short random suffix.
fn object_name(mime: &str) -> String {
    let millis = SystemTime::UNIX_EPOCH
        .elapsed()
        .map(|d| d.as_millis())
        .unwrap_or_default();

    format!("{millis}-{}.{}", random_suffix(), extension_for(mime))
}

fn random_suffix() -> String {
    use rand::Rng;
    const CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::thread_rng();
    (0..6)
        .map(|_| CHARS[rng.gen_range(0..CHARS.len())] as char)
        .collect()
}

fn extension_for(mime: &str) -> &str {
    match mime.split_once('/') {
        Some((_, "jpeg")) => "jpg",
        Some((_, "svg+xml")) => "svg",
        Some((_, subtype)) if !subtype.is_empty() => subtype,
        _ => "bin",
    }
}
