//! Resident records and their lifecycle enums.

use crate::{Collection, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Whether a resident is enrolled through an institution or an employer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResidentType {
    Student,
    Employee,
}

/// Lifecycle status of a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResidentStatus {
    Active,
    Inactive,
    Pending,
    Rejected,
}

/// A hostel resident.
///
/// Rows serialize with camelCase keys, the wire shape shared by the
/// on-device cache, the hosted backend and bulk snapshots. `profileImage`
/// holds either an inline data URI or an external reference URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: String,
    pub name: String,
    pub cnic: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub parent_name: String,
    pub parent_phone: String,
    #[serde(rename = "type")]
    pub resident_type: ResidentType,
    pub institution_or_office: String,
    pub room_number: String,
    pub status: ResidentStatus,
    pub admission_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inventory: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    pub dues: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
}

impl Record for Resident {
    const COLLECTION: Collection = Collection::Residents;

    fn id(&self) -> &str {
        &self.id
    }
}
