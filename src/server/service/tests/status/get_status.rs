//! Tests for StatusService::get_status method.

use chrono::{TimeZone, Utc};

use crate::server::{
    error::{uls::UlsError, Error},
    model::status::UlsDatabase,
};

use super::*;

/// Expect one status per database with only differentials after the full load
#[tokio::test]
async fn excludes_superseded_differentials() -> Result<(), TestError> {
    let full = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let stale = Utc.with_ymd_and_hms(2023, 12, 30, 0, 0, 0).unwrap();
    let fresh = Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap();

    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, PROBE_CALLSIGN, "01/01/2020")
        .with_complete_update(APPLICATION_DB, full)
        .with_complete_update(LICENSE_DB, full)
        .with_incremental_update(LICENSE_DB, "sat", stale)
        .with_incremental_update(LICENSE_DB, "fri", fresh)
        .build()
        .await?;

    let status_service = StatusService::new(&test.db);
    let result = status_service.get_status().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let status = result.unwrap();

    assert_eq!(status.databases.len(), 2);
    assert_eq!(status.databases[0].database, UlsDatabase::Application);
    assert_eq!(status.databases[1].database, UlsDatabase::License);

    let license = status.database(UlsDatabase::License).unwrap();
    assert_eq!(license.last_full_update, full);
    assert_eq!(license.incremental_updates_applied.len(), 1);
    assert_eq!(license.incremental_updates_applied[0].day, "fri");
    assert_eq!(license.incremental_updates_applied[0].timestamp, fresh);

    let application = status.database(UlsDatabase::Application).unwrap();
    assert!(application.incremental_updates_applied.is_empty());

    Ok(())
}

/// Expect each database measured against its own latest full load
#[tokio::test]
async fn uses_each_databases_own_full_load() -> Result<(), TestError> {
    let application_full = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let license_full = Utc.with_ymd_and_hms(2024, 1, 7, 0, 0, 0).unwrap();
    let differential = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();

    let test = TestBuilder::new()
        .with_uls_tables()
        .with_complete_update(APPLICATION_DB, application_full)
        .with_complete_update(LICENSE_DB, license_full)
        .with_incremental_update(APPLICATION_DB, "wed", differential)
        .with_incremental_update(LICENSE_DB, "wed", differential)
        .build()
        .await?;

    let status = StatusService::new(&test.db).get_status().await.unwrap();

    let application = status.database(UlsDatabase::Application).unwrap();
    let license = status.database(UlsDatabase::License).unwrap();
    assert_eq!(application.incremental_updates_applied.len(), 1);
    assert!(license.incremental_updates_applied.is_empty());
    assert_eq!(license.last_full_update, license_full);

    Ok(())
}

/// Expect a status even when the reference call sign is missing from the replica
#[tokio::test]
async fn reports_status_without_probe_license() -> Result<(), TestError> {
    let full = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let test = TestBuilder::new()
        .with_uls_tables()
        .with_complete_update(APPLICATION_DB, full)
        .with_complete_update(LICENSE_DB, full)
        .build()
        .await?;

    let result = StatusService::new(&test.db).get_status().await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}

/// Expect MissingFullUpdate rather than an empty status without a baseline load
#[tokio::test]
async fn fails_without_complete_update() -> Result<(), TestError> {
    let full = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let differential = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();

    let test = TestBuilder::new()
        .with_uls_tables()
        .with_complete_update(APPLICATION_DB, full)
        .with_incremental_update(LICENSE_DB, "tue", differential)
        .build()
        .await?;

    let result = StatusService::new(&test.db).get_status().await;

    assert!(matches!(
        result,
        Err(Error::UlsError(UlsError::MissingFullUpdate(
            UlsDatabase::License
        )))
    ));

    Ok(())
}

/// Expect a database error when the replica tables are missing
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let result = StatusService::new(&test.db).get_status().await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
