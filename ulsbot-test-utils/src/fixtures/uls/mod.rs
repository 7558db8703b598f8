use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{
    constant::{COMPLETE, INCREMENTAL},
    error::TestError,
    fixtures::uls::factory::{mock_amateur, mock_license_entity, mock_license_header},
    TestContext,
};

pub mod factory;

impl TestContext {
    pub fn uls<'a>(&'a mut self) -> UlsFixtures<'a> {
        UlsFixtures { setup: self }
    }
}

pub struct UlsFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> UlsFixtures<'a> {
    /// Insert a mock license built from the default factories.
    ///
    /// # Returns
    /// - `Ok((header, entity, amateur))` - The inserted rows
    /// - `Err(TestError::DbErr)` - Insertion failed
    pub async fn insert_mock_license(
        &mut self,
        unique_system_identifier: i64,
        callsign: &str,
        effective_date: &str,
    ) -> Result<
        (
            entity::l_hd::Model,
            entity::l_en::Model,
            entity::l_am::Model,
        ),
        TestError,
    > {
        self.insert_license(
            mock_license_header(unique_system_identifier, callsign, effective_date),
            mock_license_entity(unique_system_identifier),
            mock_amateur(unique_system_identifier, callsign),
        )
        .await
    }

    /// Insert the header, entity and amateur rows of one license.
    pub async fn insert_license(
        &mut self,
        header: entity::l_hd::Model,
        licensee: entity::l_en::Model,
        amateur: entity::l_am::Model,
    ) -> Result<
        (
            entity::l_hd::Model,
            entity::l_en::Model,
            entity::l_am::Model,
        ),
        TestError,
    > {
        let header = entity::l_hd::ActiveModel {
            unique_system_identifier: ActiveValue::Set(header.unique_system_identifier),
            call_sign: ActiveValue::Set(header.call_sign),
            license_status: ActiveValue::Set(header.license_status),
            grant_date: ActiveValue::Set(header.grant_date),
            expired_date: ActiveValue::Set(header.expired_date),
            cancellation_date: ActiveValue::Set(header.cancellation_date),
            effective_date: ActiveValue::Set(header.effective_date),
            last_action_date: ActiveValue::Set(header.last_action_date),
        }
        .insert(&self.setup.db)
        .await?;

        let licensee = entity::l_en::ActiveModel {
            unique_system_identifier: ActiveValue::Set(licensee.unique_system_identifier),
            entity_type: ActiveValue::Set(licensee.entity_type),
            entity_name: ActiveValue::Set(licensee.entity_name),
            first_name: ActiveValue::Set(licensee.first_name),
            mi: ActiveValue::Set(licensee.mi),
            last_name: ActiveValue::Set(licensee.last_name),
            suffix: ActiveValue::Set(licensee.suffix),
            street_address: ActiveValue::Set(licensee.street_address),
            city: ActiveValue::Set(licensee.city),
            state: ActiveValue::Set(licensee.state),
            zip_code: ActiveValue::Set(licensee.zip_code),
            po_box: ActiveValue::Set(licensee.po_box),
            attention_line: ActiveValue::Set(licensee.attention_line),
            frn: ActiveValue::Set(licensee.frn),
            applicant_type_code: ActiveValue::Set(licensee.applicant_type_code),
        }
        .insert(&self.setup.db)
        .await?;

        let amateur = entity::l_am::ActiveModel {
            unique_system_identifier: ActiveValue::Set(amateur.unique_system_identifier),
            callsign: ActiveValue::Set(amateur.callsign),
            operator_class: ActiveValue::Set(amateur.operator_class),
            trustee_callsign: ActiveValue::Set(amateur.trustee_callsign),
            trustee_name: ActiveValue::Set(amateur.trustee_name),
        }
        .insert(&self.setup.db)
        .await?;

        Ok((header, licensee, amateur))
    }

    /// Record a full load of `db_name` in the replication log.
    pub async fn insert_complete_update(
        &mut self,
        db_name: &str,
        ts: DateTime<Utc>,
    ) -> Result<entity::db_updates::Model, TestError> {
        self.insert_update(db_name, COMPLETE, None, ts).await
    }

    /// Record a daily differential of `db_name` in the replication log.
    pub async fn insert_incremental_update(
        &mut self,
        db_name: &str,
        day: &str,
        ts: DateTime<Utc>,
    ) -> Result<entity::db_updates::Model, TestError> {
        self.insert_update(db_name, INCREMENTAL, Some(day.to_string()), ts)
            .await
    }

    async fn insert_update(
        &mut self,
        db_name: &str,
        update_type: &str,
        incremental_day: Option<String>,
        ts: DateTime<Utc>,
    ) -> Result<entity::db_updates::Model, TestError> {
        let update = entity::db_updates::ActiveModel {
            db_name: ActiveValue::Set(db_name.to_string()),
            update_type: ActiveValue::Set(update_type.to_string()),
            incremental_day: ActiveValue::Set(incremental_day),
            ts: ActiveValue::Set(ts),
            ..Default::default()
        };

        Ok(update.insert(&self.setup.db).await?)
    }
}
