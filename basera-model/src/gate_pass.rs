//! Gate passes covering overnight stays and leave.

use crate::{Collection, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of absence a gate pass requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassType {
    NightStay,
    DayOut,
    Leave,
}

/// Approval state of a gate pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PassStatus {
    Pending,
    Approved,
    Rejected,
}

/// A resident's request to be away from the hostel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatePass {
    pub id: String,
    pub resident_id: String,
    pub request_type: PassType,
    pub destination: String,
    pub departure_date: NaiveDate,
    pub return_date: NaiveDate,
    pub status: PassStatus,
}

impl Record for GatePass {
    const COLLECTION: Collection = Collection::GatePasses;

    fn id(&self) -> &str {
        &self.id
    }
}
