use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::server::model::license::LicenseRecord;

/// One row of the `l_hd ⋈ l_en ⋈ l_am` join, named after the replica columns.
#[derive(Debug, Clone, FromQueryResult)]
pub struct LicenseRow {
    pub unique_system_identifier: i64,
    pub license_status: Option<String>,
    pub grant_date: Option<String>,
    pub expired_date: Option<String>,
    pub cancellation_date: Option<String>,
    pub effective_date: Option<String>,
    pub last_action_date: Option<String>,
    pub entity_type: Option<String>,
    pub entity_name: Option<String>,
    pub first_name: Option<String>,
    pub mi: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub po_box: Option<String>,
    pub attention_line: Option<String>,
    pub frn: Option<String>,
    pub applicant_type_code: Option<String>,
    pub callsign: Option<String>,
    pub operator_class: Option<String>,
    pub trustee_callsign: Option<String>,
    pub trustee_name: Option<String>,
}

impl From<LicenseRow> for LicenseRecord {
    fn from(row: LicenseRow) -> Self {
        Self {
            id: row.unique_system_identifier,
            status_code: row.license_status,
            grant_date_raw: row.grant_date,
            expire_date_raw: row.expired_date,
            cancel_date_raw: row.cancellation_date,
            effective_date_raw: row.effective_date,
            last_action_date_raw: row.last_action_date,
            entity_type: row.entity_type,
            entity_name: row.entity_name,
            first_name: row.first_name,
            middle_initial: row.mi,
            last_name: row.last_name,
            suffix: row.suffix,
            street_address: row.street_address,
            city: row.city,
            state: row.state,
            zip_raw: row.zip_code,
            po_box: row.po_box,
            attention_line_raw: row.attention_line,
            frn: row.frn,
            applicant_type_code: row.applicant_type_code,
            callsign_ascii: row.callsign.as_deref().unwrap_or_default().trim().to_string(),
            operator_class_code: row.operator_class,
            trustee_callsign: row.trustee_callsign,
            trustee_name: row.trustee_name,
        }
    }
}

pub struct LicenseRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LicenseRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fetches every amateur license row filed under a call sign.
    ///
    /// A call sign accumulates one license per grant, renewal or modification, so more
    /// than one row may come back. Rows are returned in no particular order; `MM/DD/YYYY`
    /// effective dates don't sort as text, so picking the current one is left to the
    /// caller.
    ///
    /// # Arguments
    /// - `callsign` - Exact, already normalised call sign to match against `l_hd.call_sign`
    ///
    /// # Returns
    /// - `Ok(Vec<LicenseRow>)` - All matching rows, empty if the call sign is unknown
    /// - `Err(DbErr)` - Query or connection failure
    pub async fn find_by_callsign(&self, callsign: &str) -> Result<Vec<LicenseRow>, DbErr> {
        use entity::{l_am, l_en, l_hd};

        entity::prelude::LHd::find()
            .select_only()
            .columns([
                l_hd::Column::UniqueSystemIdentifier,
                l_hd::Column::LicenseStatus,
                l_hd::Column::GrantDate,
                l_hd::Column::ExpiredDate,
                l_hd::Column::CancellationDate,
                l_hd::Column::EffectiveDate,
                l_hd::Column::LastActionDate,
            ])
            .columns([
                l_en::Column::EntityType,
                l_en::Column::EntityName,
                l_en::Column::FirstName,
                l_en::Column::Mi,
                l_en::Column::LastName,
                l_en::Column::Suffix,
                l_en::Column::StreetAddress,
                l_en::Column::City,
                l_en::Column::State,
                l_en::Column::ZipCode,
                l_en::Column::PoBox,
                l_en::Column::AttentionLine,
                l_en::Column::Frn,
                l_en::Column::ApplicantTypeCode,
            ])
            .columns([
                l_am::Column::Callsign,
                l_am::Column::OperatorClass,
                l_am::Column::TrusteeCallsign,
                l_am::Column::TrusteeName,
            ])
            .join(JoinType::InnerJoin, l_hd::Relation::LEn.def())
            .join(JoinType::InnerJoin, l_hd::Relation::LAm.def())
            .filter(l_hd::Column::CallSign.eq(callsign))
            .into_model::<LicenseRow>()
            .all(self.db)
            .await
    }
}
