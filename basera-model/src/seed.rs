//! Canonical demo dataset and default operator accounts.
//!
//! First-run local installs serve these rows until real data is written,
//! and `reset_to_defaults` restores them.

use crate::{
    BillingRecord, BillingStatus, BillingType, Collection, Complaint, ComplaintCategory,
    ComplaintStatus, GatePass, PassStatus, PassType, PaymentMethod, Resident, ResidentStatus,
    ResidentType, Room, RoomStatus, RoomType, UserAccount, UserRole,
};
use chrono::NaiveDate;
use serde_json::Value;

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Operator accounts present on every fresh install. The first entry is the
/// SUPER_ADMIN that bulk wipes must preserve.
#[must_use]
pub fn default_accounts() -> Vec<UserAccount> {
    vec![
        UserAccount {
            id: "u1".into(),
            identifier: "admin".into(),
            password: "admin123".into(),
            role: UserRole::SuperAdmin,
            name: "Super Admin".into(),
        },
        UserAccount {
            id: "u2".into(),
            identifier: "warden".into(),
            password: "warden123".into(),
            role: UserRole::Warden,
            name: "Warden Ali".into(),
        },
    ]
}

#[must_use]
pub fn demo_residents() -> Vec<Resident> {
    vec![
        Resident {
            id: "1".into(),
            name: "Ahmad Khan".into(),
            cnic: "17301-1234567-1".into(),
            phone: "0345-1234567".into(),
            email: None,
            parent_name: "Irfan Khan".into(),
            parent_phone: "0300-1122334".into(),
            resident_type: ResidentType::Student,
            institution_or_office: "University of Peshawar".into(),
            room_number: "102-A".into(),
            status: ResidentStatus::Active,
            admission_date: ymd(2023, 9, 1),
            inventory: Some(vec![
                "Bed #102A".into(),
                "Chair #45".into(),
                "Locker #88".into(),
            ]),
            profile_image: None,
            dues: 15500,
            permanent_address: None,
            current_address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
        },
        Resident {
            id: "2".into(),
            name: "Zia-ur-Rehman".into(),
            cnic: "17301-7654321-2".into(),
            phone: "0312-9876543".into(),
            email: None,
            parent_name: "Gul Khan".into(),
            parent_phone: "0311-9988776".into(),
            resident_type: ResidentType::Employee,
            institution_or_office: "Bank of Khyber".into(),
            room_number: "305-B".into(),
            status: ResidentStatus::Active,
            admission_date: ymd(2024, 1, 15),
            inventory: None,
            profile_image: None,
            dues: 18000,
            permanent_address: None,
            current_address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
        },
    ]
}

#[must_use]
pub fn demo_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "rm1".into(),
            number: "101-A".into(),
            room_type: RoomType::Ac2,
            features: vec!["AC".into(), "Locker".into(), "Attached Bath".into()],
            status: RoomStatus::Occupied,
            current_occupancy: 2,
            capacity: 2,
        },
        Room {
            id: "rm2".into(),
            number: "102-A".into(),
            room_type: RoomType::Ac2,
            features: vec!["AC".into(), "Locker".into()],
            status: RoomStatus::Available,
            current_occupancy: 1,
            capacity: 2,
        },
        Room {
            id: "rm3".into(),
            number: "201-B".into(),
            room_type: RoomType::NonAc3,
            features: vec!["Fan".into(), "Common Bath".into()],
            status: RoomStatus::Available,
            current_occupancy: 1,
            capacity: 3,
        },
        Room {
            id: "rm4".into(),
            number: "202-B".into(),
            room_type: RoomType::NonAc3,
            features: vec!["Fan".into()],
            status: RoomStatus::Available,
            current_occupancy: 0,
            capacity: 3,
        },
    ]
}

#[must_use]
pub fn demo_billing() -> Vec<BillingRecord> {
    vec![
        BillingRecord {
            id: "b1".into(),
            resident_id: "1".into(),
            amount: 15000,
            billing_type: BillingType::Rent,
            status: BillingStatus::Paid,
            due_date: ymd(2024, 5, 5),
            payment_method: Some(PaymentMethod::Jazzcash),
        },
        BillingRecord {
            id: "b2".into(),
            resident_id: "2".into(),
            amount: 18000,
            billing_type: BillingType::Rent,
            status: BillingStatus::Unpaid,
            due_date: ymd(2024, 6, 5),
            payment_method: None,
        },
        BillingRecord {
            id: "b3".into(),
            resident_id: "1".into(),
            amount: 500,
            billing_type: BillingType::Generator,
            status: BillingStatus::Unpaid,
            due_date: ymd(2024, 6, 5),
            payment_method: None,
        },
        BillingRecord {
            id: "b4".into(),
            resident_id: "1".into(),
            amount: 5000,
            billing_type: BillingType::Security,
            status: BillingStatus::Paid,
            due_date: ymd(2023, 9, 1),
            payment_method: Some(PaymentMethod::Cash),
        },
    ]
}

#[must_use]
pub fn demo_complaints() -> Vec<Complaint> {
    vec![
        Complaint {
            id: "c1".into(),
            resident_id: "1".into(),
            title: "Fan capacitor failure".into(),
            category: ComplaintCategory::Electrical,
            status: ComplaintStatus::Open,
            created_at: ymd(2024, 5, 20),
        },
        Complaint {
            id: "c2".into(),
            resident_id: "2".into(),
            title: "Slow WiFi in wing B".into(),
            category: ComplaintCategory::Internet,
            status: ComplaintStatus::InProgress,
            created_at: ymd(2024, 5, 22),
        },
    ]
}

#[must_use]
pub fn demo_gate_passes() -> Vec<GatePass> {
    vec![GatePass {
        id: "g1".into(),
        resident_id: "1".into(),
        request_type: PassType::NightStay,
        destination: "Mardan".into(),
        departure_date: ymd(2024, 5, 24),
        return_date: ymd(2024, 5, 26),
        status: PassStatus::Pending,
    }]
}

/// Seed rows for `collection`, encoded as stored rows.
#[must_use]
pub fn seed_rows(collection: Collection) -> Vec<Value> {
    let encoded = match collection {
        Collection::Residents => serde_json::to_value(demo_residents()),
        Collection::Rooms => serde_json::to_value(demo_rooms()),
        Collection::Billing => serde_json::to_value(demo_billing()),
        Collection::Complaints => serde_json::to_value(demo_complaints()),
        Collection::GatePasses => serde_json::to_value(demo_gate_passes()),
        Collection::Users => serde_json::to_value(default_accounts()),
    };
    match encoded {
        Ok(Value::Array(rows)) => rows,
        _ => Vec::new(),
    }
}
