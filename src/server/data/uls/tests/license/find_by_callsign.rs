//! Tests for LicenseRepository::find_by_callsign method.
//!
//! This module verifies that the three-table join returns every license filed under a
//! call sign, with columns from each table mapped onto the row.

use sea_orm::{ActiveModelTrait, ActiveValue};

use super::*;

/// Tests joining a single license.
///
/// Verifies that header, entity and amateur columns all come back on one row.
///
/// Expected: Ok with Vec containing 1 row
#[tokio::test]
async fn returns_joined_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;

    let repo = LicenseRepository::new(&test.db);
    let rows = repo.find_by_callsign("W0EEE").await?;

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.unique_system_identifier, 1);
    assert_eq!(row.license_status.as_deref(), Some("A"));
    assert_eq!(row.effective_date.as_deref(), Some("01/01/2020"));
    assert_eq!(row.first_name.as_deref(), Some("Jane"));
    assert_eq!(row.zip_code.as_deref(), Some("809011234"));
    assert_eq!(row.operator_class.as_deref(), Some("E"));
    assert_eq!(row.callsign.as_deref().map(str::trim), Some("W0EEE"));

    Ok(())
}

/// Tests that every license under a call sign is returned.
///
/// Expected: Ok with Vec containing both licenses and not the unrelated one
#[tokio::test]
async fn returns_every_license_for_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .with_mock_license(2, "W0EEE", "06/15/2023")
        .with_mock_license(3, "K0ABC", "06/15/2023")
        .build()
        .await?;

    let repo = LicenseRepository::new(&test.db);
    let mut ids: Vec<i64> = repo
        .find_by_callsign("W0EEE")
        .await?
        .into_iter()
        .map(|row| row.unique_system_identifier)
        .collect();
    ids.sort();

    assert_eq!(ids, vec![1, 2]);

    Ok(())
}

/// Tests that rows missing from one side of the join are excluded.
///
/// Expected: Ok with empty Vec when only the header row exists
#[tokio::test]
async fn excludes_header_without_amateur_row() -> Result<(), TestError> {
    let test = TestBuilder::new().with_uls_tables().build().await?;

    entity::l_hd::ActiveModel {
        unique_system_identifier: ActiveValue::Set(1),
        call_sign: ActiveValue::Set(Some("W0EEE".to_string())),
        effective_date: ActiveValue::Set(Some("01/01/2020".to_string())),
        ..Default::default()
    }
    .insert(&test.db)
    .await?;

    let repo = LicenseRepository::new(&test.db);
    let rows = repo.find_by_callsign("W0EEE").await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests that matching is exact at the repository level.
///
/// Normalisation happens in the service; the repository receives the stored form.
///
/// Expected: Ok with empty Vec for lowercase input
#[tokio::test]
async fn matches_exact_callsign_only() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;

    let repo = LicenseRepository::new(&test.db);
    let rows = repo.find_by_callsign("w0eee").await?;

    assert!(rows.is_empty());

    Ok(())
}

/// Tests error handling when database tables are missing.
///
/// Expected: Err
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let repo = LicenseRepository::new(&test.db);
    let result = repo.find_by_callsign("W0EEE").await;

    assert!(result.is_err());

    Ok(())
}
