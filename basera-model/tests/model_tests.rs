//! Wire-shape and decode tests for the entity records.

use basera_model::{
    BillingRecord, BillingStatus, BillingType, Collection, Complaint, ComplaintCategory,
    ComplaintStatus, GatePass, PassStatus, PassType, PaymentMethod, Record, Resident,
    ResidentStatus, ResidentType, Room, RoomStatus, RoomType, UserAccount, UserRole, new_id,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn make_resident() -> Resident {
    Resident {
        id: "r1".into(),
        name: "Ahmad Khan".into(),
        cnic: "17301-1234567-1".into(),
        phone: "0345-1234567".into(),
        email: Some("ahmad@example.com".into()),
        parent_name: "Irfan Khan".into(),
        parent_phone: "0300-1122334".into(),
        resident_type: ResidentType::Student,
        institution_or_office: "University of Peshawar".into(),
        room_number: "102-A".into(),
        status: ResidentStatus::Active,
        admission_date: date(2023, 9, 1),
        inventory: Some(vec!["Bed #102A".into()]),
        profile_image: None,
        dues: 15500,
        permanent_address: None,
        current_address: None,
        emergency_contact_name: None,
        emergency_contact_phone: None,
    }
}

// ── Wire shapes ──────────────────────────────────────────────

#[test]
fn resident_serializes_with_camel_case_keys() {
    let row = serde_json::to_value(make_resident()).unwrap();
    let obj = row.as_object().unwrap();

    assert!(obj.contains_key("parentName"));
    assert!(obj.contains_key("institutionOrOffice"));
    assert!(obj.contains_key("roomNumber"));
    assert!(obj.contains_key("admissionDate"));
    assert_eq!(row["type"], json!("STUDENT"));
    assert_eq!(row["status"], json!("ACTIVE"));
    assert_eq!(row["admissionDate"], json!("2023-09-01"));
}

#[test]
fn absent_optional_fields_are_omitted() {
    let mut resident = make_resident();
    resident.email = None;
    resident.inventory = None;

    let row = serde_json::to_value(resident).unwrap();
    let obj = row.as_object().unwrap();

    assert!(!obj.contains_key("email"));
    assert!(!obj.contains_key("inventory"));
    assert!(!obj.contains_key("profileImage"));
}

#[test]
fn room_type_wire_forms() {
    assert_eq!(serde_json::to_value(RoomType::Ac2).unwrap(), json!("AC_2"));
    assert_eq!(
        serde_json::to_value(RoomType::NonAc3).unwrap(),
        json!("NON_AC_3")
    );
    assert_eq!(serde_json::to_value(RoomType::Hall).unwrap(), json!("HALL"));
}

#[test]
fn billing_wire_forms() {
    assert_eq!(
        serde_json::to_value(BillingType::Generator).unwrap(),
        json!("GENERATOR")
    );
    assert_eq!(
        serde_json::to_value(BillingStatus::Unpaid).unwrap(),
        json!("UNPAID")
    );
    assert_eq!(
        serde_json::to_value(PaymentMethod::BankTransfer).unwrap(),
        json!("BANK_TRANSFER")
    );
    assert_eq!(
        serde_json::to_value(PaymentMethod::Easypaisa).unwrap(),
        json!("EASYPAISA")
    );
}

#[test]
fn complaint_and_pass_wire_forms() {
    assert_eq!(
        serde_json::to_value(ComplaintStatus::InProgress).unwrap(),
        json!("IN_PROGRESS")
    );
    assert_eq!(
        serde_json::to_value(ComplaintCategory::Plumbing).unwrap(),
        json!("PLUMBING")
    );
    assert_eq!(
        serde_json::to_value(PassType::NightStay).unwrap(),
        json!("NIGHT_STAY")
    );
    assert_eq!(
        serde_json::to_value(PassStatus::Pending).unwrap(),
        json!("PENDING")
    );
}

#[test]
fn user_role_wire_forms_match_as_str() {
    for role in [
        UserRole::SuperAdmin,
        UserRole::Warden,
        UserRole::Resident,
        UserRole::Accountant,
        UserRole::Guest,
    ] {
        assert_eq!(serde_json::to_value(role).unwrap(), json!(role.as_str()));
        assert_eq!(role.to_string(), role.as_str());
    }
    assert_eq!(UserRole::SuperAdmin.as_str(), "SUPER_ADMIN");
}

// ── Typed decode ─────────────────────────────────────────────

#[test]
fn decode_round_trips_a_full_resident() {
    let resident = make_resident();
    let row = resident.encode().unwrap();
    let decoded = Resident::decode(row).unwrap();
    assert_eq!(decoded, resident);
}

#[test]
fn decode_fills_absent_optionals_with_none() {
    let row = json!({
        "id": "r2",
        "name": "Bilal",
        "cnic": "17301-1111111-1",
        "phone": "0300-1111111",
        "parentName": "Karim",
        "parentPhone": "0300-2222222",
        "type": "STUDENT",
        "institutionOrOffice": "Edwardes College",
        "roomNumber": "102-A",
        "status": "ACTIVE",
        "admissionDate": "2024-03-01",
        "dues": 5000
    });

    let resident = Resident::decode(row).unwrap();
    assert_eq!(resident.email, None);
    assert_eq!(resident.inventory, None);
    assert_eq!(resident.profile_image, None);
}

#[test]
fn decode_rejects_missing_required_field() {
    let row = json!({
        "id": "r3",
        "name": "No CNIC",
        "phone": "0300-0000000",
        "parentName": "x",
        "parentPhone": "y",
        "type": "STUDENT",
        "institutionOrOffice": "z",
        "roomNumber": "",
        "status": "ACTIVE",
        "admissionDate": "2024-03-01",
        "dues": 0
    });

    assert!(Resident::decode(row).is_err());
}

#[test]
fn decode_rejects_mistyped_field() {
    let row = json!({
        "id": "b9",
        "residentId": "1",
        "amount": "not a number",
        "type": "RENT",
        "status": "UNPAID",
        "dueDate": "2024-06-05"
    });

    assert!(BillingRecord::decode(row).is_err());
}

#[test]
fn decode_rejects_unknown_enum_variant() {
    let row = json!({
        "id": "g9",
        "residentId": "1",
        "requestType": "TELEPORT",
        "destination": "Mardan",
        "departureDate": "2024-05-24",
        "returnDate": "2024-05-26",
        "status": "PENDING"
    });

    assert!(GatePass::decode(row).is_err());
}

#[test]
fn decode_rejects_malformed_date() {
    let row = json!({
        "id": "c9",
        "residentId": "1",
        "title": "Leak",
        "category": "PLUMBING",
        "status": "OPEN",
        "createdAt": "not-a-date"
    });

    assert!(Complaint::decode(row).is_err());
}

// ── Collection catalog ───────────────────────────────────────

#[test]
fn collection_keys_and_snapshot_keys() {
    assert_eq!(Collection::Residents.key(), "residents");
    assert_eq!(Collection::GatePasses.key(), "gate_passes");
    assert_eq!(Collection::GatePasses.snapshot_key(), "gatePasses");
    assert_eq!(Collection::Users.snapshot_key(), "users");
    assert_eq!(Collection::Billing.to_string(), "billing");
}

#[test]
fn collection_order_columns() {
    assert_eq!(Collection::Residents.order_column(), Some("admissionDate"));
    assert_eq!(Collection::Complaints.order_column(), Some("createdAt"));
    assert_eq!(Collection::GatePasses.order_column(), Some("departureDate"));
    assert_eq!(Collection::Rooms.order_column(), None);
    assert_eq!(Collection::Users.order_column(), None);
}

#[test]
fn record_collection_bindings() {
    assert_eq!(Resident::COLLECTION, Collection::Residents);
    assert_eq!(Room::COLLECTION, Collection::Rooms);
    assert_eq!(BillingRecord::COLLECTION, Collection::Billing);
    assert_eq!(Complaint::COLLECTION, Collection::Complaints);
    assert_eq!(GatePass::COLLECTION, Collection::GatePasses);
    assert_eq!(UserAccount::COLLECTION, Collection::Users);
    assert_eq!(Collection::ALL.len(), 6);
}

#[test]
fn new_ids_are_distinct() {
    let a = new_id();
    let b = new_id();
    assert_ne!(a, b);
    assert_eq!(a.len(), 36);
}

#[test]
fn room_status_maintenance_round_trips() {
    let room = Room {
        id: "rm9".into(),
        number: "401-C".into(),
        room_type: RoomType::Hall,
        features: vec![],
        status: RoomStatus::Maintenance,
        current_occupancy: 0,
        capacity: 12,
    };
    let decoded = Room::decode(room.encode().unwrap()).unwrap();
    assert_eq!(decoded.status, RoomStatus::Maintenance);
}
