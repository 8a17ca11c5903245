//! Billing records raised against residents.

use crate::{Collection, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// What a billing record charges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingType {
    Rent,
    Security,
    Admission,
    Utility,
    Fine,
    Generator,
}

/// Settlement state of a billing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingStatus {
    Paid,
    Unpaid,
}

/// How a paid bill was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    Easypaisa,
    Jazzcash,
    BankTransfer,
}

/// A single charge against a resident, in whole rupees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingRecord {
    pub id: String,
    pub resident_id: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub billing_type: BillingType,
    pub status: BillingStatus,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl Record for BillingRecord {
    const COLLECTION: Collection = Collection::Billing;

    fn id(&self) -> &str {
        &self.id
    }
}
