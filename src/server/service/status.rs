use std::time::Instant;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::uls::update::UpdateRepository,
    error::{uls::UlsError, Error},
    model::{
        db::DbUpdateModel,
        status::{DatabaseStatus, IncrementalUpdate, SystemStatus, UlsDatabase},
    },
    service::license::LicenseService,
};

/// Call sign looked up to measure replica latency; always present in the ULS data.
pub static PROBE_CALLSIGN: &str = "W0EEE";

/// Service reporting how fresh the ULS replica is.
pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    /// Creates a new instance of [`StatusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the replica status report.
    ///
    /// Times one lookup of [`PROBE_CALLSIGN`] through the same path user lookups take,
    /// then reads the replication log: the latest full load of each logical database and
    /// every differential applied after it. The two differential queries run
    /// concurrently.
    ///
    /// # Returns
    /// - `Ok(SystemStatus)` - Latency and one [`DatabaseStatus`] per logical database
    /// - `Err(Error::UlsError)` - A logical database has no full load recorded
    /// - `Err(Error::DbErr)` - Any replica query failed; no partial status is returned
    pub async fn get_status(&self) -> Result<SystemStatus, Error> {
        let latency_ms = self.measure_latency().await?;

        let update_repo = UpdateRepository::new(self.db);

        let application_complete = self.latest_complete(UlsDatabase::Application).await?;
        let license_complete = self.latest_complete(UlsDatabase::License).await?;

        let (application_incremental, license_incremental) = tokio::try_join!(
            update_repo.get_incremental_since(UlsDatabase::Application, application_complete.ts),
            update_repo.get_incremental_since(UlsDatabase::License, license_complete.ts),
        )?;

        let databases = vec![
            database_status(
                UlsDatabase::Application,
                application_complete,
                application_incremental,
            ),
            database_status(UlsDatabase::License, license_complete, license_incremental),
        ];

        tracing::info!(
            "Replica status: {} ms lookup latency, {} application and {} license differentials since last full load",
            latency_ms,
            databases[0].incremental_updates_applied.len(),
            databases[1].incremental_updates_applied.len()
        );

        Ok(SystemStatus {
            latency_ms,
            databases,
        })
    }

    /// Wall-clock duration of one reference lookup, in milliseconds.
    async fn measure_latency(&self) -> Result<u64, Error> {
        let start = Instant::now();
        let license = LicenseService::new(self.db)
            .find_by_callsign(PROBE_CALLSIGN)
            .await?;
        let elapsed = start.elapsed();

        if license.is_none() {
            tracing::warn!(
                "Reference call sign {} not found in replica while measuring latency",
                PROBE_CALLSIGN
            );
        }

        Ok(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }

    async fn latest_complete(
        &self,
        database: UlsDatabase,
    ) -> Result<DbUpdateModel, Error> {
        UpdateRepository::new(self.db)
            .get_latest_complete(database)
            .await?
            .ok_or_else(|| UlsError::MissingFullUpdate(database).into())
    }
}

fn database_status(
    database: UlsDatabase,
    complete: DbUpdateModel,
    incremental: Vec<DbUpdateModel>,
) -> DatabaseStatus {
    DatabaseStatus {
        database,
        last_full_update: complete.ts,
        incremental_updates_applied: incremental
            .into_iter()
            .map(|update| IncrementalUpdate {
                day: update.incremental_day.unwrap_or_default(),
                timestamp: update.ts,
            })
            .collect(),
    }
}
