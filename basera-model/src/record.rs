//! Typed decoding shared by every entity record.

use crate::Collection;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A storable entity record.
///
/// Rows move between the storage tiers as plain JSON objects; `decode` is
/// the single typed entry point and rejects rows that do not match the
/// expected shape, so malformed data never reaches callers.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection this record type is stored in.
    const COLLECTION: Collection;

    /// Primary identifier used for row addressing.
    fn id(&self) -> &str;

    /// Structural checks beyond deserialization. Default accepts.
    fn validate(&self) -> crate::Result<()> {
        Ok(())
    }

    /// Decodes one stored row, rejecting schema mismatches.
    fn decode(row: Value) -> crate::Result<Self> {
        let record: Self = serde_json::from_value(row)?;
        record.validate()?;
        Ok(record)
    }

    /// Encodes the record as a stored row.
    fn encode(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}
