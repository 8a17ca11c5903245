//! Hosted backend client for Basera.
//!
//! Talks to a Supabase-style project over its REST interface:
//! - **Client**: row CRUD against collection tables
//! - **Probe**: startup reachability check that picks the storage mode
//! - **Media**: uploads data-URI images and hands back public URLs
//!
//! Every deployment also works with no backend at all. When the
//! configuration still carries placeholder credentials, or the probe
//! cannot reach the project, callers are expected to route everything
//! through the on-device cache instead.

mod client;
mod config;
mod error;
mod media;
mod probe;

pub use client::CloudClient;
pub use config::CloudConfig;
pub use error::{CloudError, CloudResult};
pub use media::MediaStore;
pub use probe::{resolve_mode, StorageMode};
