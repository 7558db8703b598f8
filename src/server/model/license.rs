//! Amateur license records and their display view.
//!
//! [`LicenseRecord`] holds the raw, code-laden values joined from the ULS header, entity
//! and amateur tables. [`LicenseView`] wraps a record and derives presentation-ready
//! values from it on every call; nothing derived is stored, so a view can never go
//! stale relative to its record.

use chrono::NaiveDate;

use crate::server::{
    model::fcc::{ApplicantType, LicenseStatus, OperatorClass},
    util::time::parse_uls_date,
};

/// Slashed zero used in place of the digit `0` when displaying call signs.
pub const SLASHED_ZERO: char = '\u{00D8}';

/// Raw license values as stored in the replica.
///
/// Dates are kept in their `MM/DD/YYYY` text form and codes undecoded. Every optional
/// field is `None` when the replica column is NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseRecord {
    /// ULS unique system identifier shared by the joined tables
    pub id: i64,
    pub status_code: Option<String>,
    pub grant_date_raw: Option<String>,
    pub expire_date_raw: Option<String>,
    pub cancel_date_raw: Option<String>,
    pub effective_date_raw: Option<String>,
    pub last_action_date_raw: Option<String>,

    pub entity_type: Option<String>,
    pub entity_name: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,

    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_raw: Option<String>,
    pub po_box: Option<String>,
    pub attention_line_raw: Option<String>,
    /// FCC Registration Number
    pub frn: Option<String>,
    pub applicant_type_code: Option<String>,

    /// Call sign with the ULS column padding trimmed
    pub callsign_ascii: String,
    pub operator_class_code: Option<String>,
    pub trustee_callsign: Option<String>,
    pub trustee_name: Option<String>,
}

/// Read-only view deriving display values from a [`LicenseRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseView {
    record: LicenseRecord,
}

impl LicenseView {
    pub fn new(record: LicenseRecord) -> Self {
        Self { record }
    }

    /// The underlying raw record.
    pub fn record(&self) -> &LicenseRecord {
        &self.record
    }

    pub fn into_record(self) -> LicenseRecord {
        self.record
    }

    pub fn id(&self) -> i64 {
        self.record.id
    }

    pub fn status(&self) -> LicenseStatus {
        LicenseStatus::from_code(self.record.status_code.as_deref().unwrap_or_default())
    }

    pub fn grant_date(&self) -> Option<NaiveDate> {
        parse_uls_date(self.record.grant_date_raw.as_deref())
    }

    pub fn expire_date(&self) -> Option<NaiveDate> {
        parse_uls_date(self.record.expire_date_raw.as_deref())
    }

    pub fn cancel_date(&self) -> Option<NaiveDate> {
        parse_uls_date(self.record.cancel_date_raw.as_deref())
    }

    pub fn effective_date(&self) -> Option<NaiveDate> {
        parse_uls_date(self.record.effective_date_raw.as_deref())
    }

    pub fn last_action_date(&self) -> Option<NaiveDate> {
        parse_uls_date(self.record.last_action_date_raw.as_deref())
    }

    /// Licensee name.
    ///
    /// Individual name parts joined by single spaces, skipping blank parts. Falls back
    /// to the entity name (clubs, trusts and the like) when every part is blank.
    pub fn name(&self) -> String {
        let parts = [
            &self.record.first_name,
            &self.record.middle_initial,
            &self.record.last_name,
            &self.record.suffix,
        ];

        let name = parts
            .iter()
            .filter_map(|part| part.as_deref())
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            return name;
        }

        self.record
            .entity_name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string()
    }

    /// ZIP code, hyphenated as `DDDDD-DDDD` when the raw value carries a ZIP+4.
    pub fn zip(&self) -> String {
        let zip = self.record.zip_raw.as_deref().unwrap_or_default().trim();

        match zip.char_indices().nth(5) {
            Some((split, _)) if !zip[split..].starts_with('-') => {
                format!("{}-{}", &zip[..split], &zip[split..])
            }
            _ => zip.to_string(),
        }
    }

    /// `ATTN:` line, absent when the raw attention line is missing or blank.
    pub fn attention_line(&self) -> Option<String> {
        self.record
            .attention_line_raw
            .as_deref()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| format!("ATTN: {}", line))
    }

    pub fn applicant_type(&self) -> ApplicantType {
        ApplicantType::from_code(
            self.record
                .applicant_type_code
                .as_deref()
                .unwrap_or_default(),
        )
    }

    /// Call sign with every `0` replaced by a slashed zero so it can't be misread as `O`.
    pub fn callsign(&self) -> String {
        self.record.callsign_ascii.replace('0', &SLASHED_ZERO.to_string())
    }

    pub fn operator_class(&self) -> OperatorClass {
        OperatorClass::from_code(
            self.record
                .operator_class_code
                .as_deref()
                .unwrap_or_default(),
        )
    }
}

impl From<LicenseRecord> for LicenseView {
    fn from(record: LicenseRecord) -> Self {
        Self::new(record)
    }
}
