//! FCC ULS code tables.
//!
//! ULS records carry single-letter codes for license status, applicant type and
//! operator class. Each table is a closed enum with an `Unknown` variant holding the raw
//! code, since the FCC can introduce new codes before these tables are updated. The
//! `Display` implementation of each enum yields its human-readable label.

use std::fmt;

/// Defines a code table enum with `from_code`, `code`, `label` and `Display`.
macro_rules! code_table {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => ($code:literal, $label:literal),)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// Code not present in the table, carrying the raw code.
            Unknown(String),
        }

        impl $name {
            /// Label used in the unknown-code placeholder.
            pub const KIND: &'static str = $kind;

            /// Decodes a raw ULS code, surrounding whitespace ignored.
            pub fn from_code(code: &str) -> Self {
                match code.trim() {
                    $($code => Self::$variant,)+
                    other => Self::Unknown(other.to_string()),
                }
            }

            /// The raw ULS code this value was decoded from.
            pub fn code(&self) -> &str {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Unknown(code) => code,
                }
            }

            /// Human-readable label, or `"Unknown <kind>: <code>"` for unknown codes.
            pub fn label(&self) -> String {
                self.to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                    Self::Unknown(code) => write!(f, "Unknown {}: {}", Self::KIND, code),
                }
            }
        }
    };
}

code_table! {
    /// License status (`HD.license_status`)
    LicenseStatus, "License Status" {
        Active => ("A", "Active"),
        Canceled => ("C", "Canceled"),
        Expired => ("E", "Expired"),
        PendingLegalStatus => ("L", "Pending Legal Status"),
        ParentStationCanceled => ("P", "Parent Station Canceled"),
        Terminated => ("T", "Terminated"),
        TermPending => ("X", "Term Pending"),
    }
}

code_table! {
    /// Applicant type (`EN.applicant_type_code`)
    ApplicantType, "Applicant Type" {
        AmateurClub => ("B", "Amateur Club"),
        Corporation => ("C", "Corporation"),
        GeneralPartnership => ("D", "General Partnership"),
        LimitedPartnership => ("E", "Limited Partnership"),
        LimitedLiabilityPartnership => ("F", "Limited Liability Partnership"),
        GovernmentalEntity => ("G", "Governmental Entity"),
        Other => ("H", "Other"),
        Individual => ("I", "Individual"),
        JointVenture => ("J", "Joint Venture"),
        LimitedLiabilityCompany => ("L", "Limited Liability Company"),
        MilitaryRecreation => ("M", "Military Recreation"),
        Consortium => ("O", "Consortium"),
        Partnership => ("P", "Partnership"),
        Races => ("R", "RACES"),
        Trust => ("T", "Trust"),
        UnincorporatedAssociation => ("U", "Unincorporated Association"),
    }
}

code_table! {
    /// Amateur operator class (`AM.operator_class`)
    OperatorClass, "Operator Class" {
        Advanced => ("A", "Advanced"),
        AmateurExtra => ("E", "Amateur Extra"),
        General => ("G", "General"),
        Novice => ("N", "Novice"),
        TechnicianPlus => ("P", "Technician Plus"),
        Technician => ("T", "Technician"),
    }
}

/// Selects one of the code tables for [`lookup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    LicenseStatus,
    ApplicantType,
    OperatorClass,
}

/// Resolves a raw code to its label in the table selected by `kind`.
///
/// Never fails: unknown codes produce `"Unknown <kind>: <code>"`.
pub fn lookup(kind: CodeKind, code: &str) -> String {
    match kind {
        CodeKind::LicenseStatus => LicenseStatus::from_code(code).label(),
        CodeKind::ApplicantType => ApplicantType::from_code(code).label(),
        CodeKind::OperatorClass => OperatorClass::from_code(code).label(),
    }
}
