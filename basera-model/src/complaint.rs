//! Maintenance complaints filed by residents.

use crate::{Collection, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Service area a complaint falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintCategory {
    Plumbing,
    Electrical,
    Internet,
    Cleaning,
    Other,
}

/// Handling state of a complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Open,
    InProgress,
    Resolved,
}

/// A complaint raised by a resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: String,
    pub resident_id: String,
    pub title: String,
    pub category: ComplaintCategory,
    pub status: ComplaintStatus,
    pub created_at: NaiveDate,
}

impl Record for Complaint {
    const COLLECTION: Collection = Collection::Complaints;

    fn id(&self) -> &str {
        &self.id
    }
}
