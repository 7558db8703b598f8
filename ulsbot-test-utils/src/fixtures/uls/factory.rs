//! Factories for replica rows with default test values.
//!
//! Tests override individual fields with struct update syntax:
//!
//! ```ignore
//! let header = entity::l_hd::Model {
//!     license_status: Some("E".to_string()),
//!     ..factory::mock_license_header(1, "W0EEE", "01/01/2020")
//! };
//! ```

/// Create a mock license header row for an active license.
///
/// # Arguments
/// - `unique_system_identifier` - ULS record identifier
/// - `callsign` - Call sign stored in `call_sign`
/// - `effective_date` - `MM/DD/YYYY` effective date
pub fn mock_license_header(
    unique_system_identifier: i64,
    callsign: &str,
    effective_date: &str,
) -> entity::l_hd::Model {
    entity::l_hd::Model {
        unique_system_identifier,
        call_sign: Some(callsign.to_string()),
        license_status: Some("A".to_string()),
        grant_date: Some(effective_date.to_string()),
        expired_date: Some("01/01/2099".to_string()),
        cancellation_date: None,
        effective_date: Some(effective_date.to_string()),
        last_action_date: Some(effective_date.to_string()),
    }
}

/// Create a mock individual licensee row.
pub fn mock_license_entity(unique_system_identifier: i64) -> entity::l_en::Model {
    entity::l_en::Model {
        unique_system_identifier,
        entity_type: Some("L".to_string()),
        entity_name: Some("Doe, Jane".to_string()),
        first_name: Some("Jane".to_string()),
        mi: Some("Q".to_string()),
        last_name: Some("Doe".to_string()),
        suffix: None,
        street_address: Some("1 Summit Rd".to_string()),
        city: Some("Colorado Springs".to_string()),
        state: Some("CO".to_string()),
        zip_code: Some("809011234".to_string()),
        po_box: None,
        attention_line: None,
        frn: Some("0001234567".to_string()),
        applicant_type_code: Some("I".to_string()),
    }
}

/// Create a mock amateur row; the call sign is padded like the ULS bulk files.
pub fn mock_amateur(unique_system_identifier: i64, callsign: &str) -> entity::l_am::Model {
    entity::l_am::Model {
        unique_system_identifier,
        callsign: Some(format!("{:<10}", callsign)),
        operator_class: Some("E".to_string()),
        trustee_callsign: None,
        trustee_name: None,
    }
}
