//! Tests for the status command handler.
//!
//! This module verifies the replica status embed, including which incremental updates
//! are listed, and the reply when the replica was never fully loaded.

use chrono::{TimeZone, Utc};
use ulsbot::server::controller::fcc::status;

use super::*;

/// Tests rendering of replica status.
///
/// Verifies that the embed has one field per logical database and lists only the
/// incremental updates applied after that database's last full load.
///
/// Expected: Embed reply with Application and License fields
#[tokio::test]
async fn renders_status_embed() -> Result<(), TestError> {
    let full = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .with_complete_update(APPLICATION_DB, full)
        .with_complete_update(LICENSE_DB, full)
        .with_incremental_update(
            LICENSE_DB,
            "sat",
            Utc.with_ymd_and_hms(2023, 12, 30, 0, 0, 0).unwrap(),
        )
        .with_incremental_update(
            LICENSE_DB,
            "fri",
            Utc.with_ymd_and_hms(2024, 1, 5, 9, 30, 0).unwrap(),
        )
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let embed = expect_embed(status(&state).await);

    assert_eq!(embed.title, "ULS Replica Status");
    assert!(embed.description.starts_with("Lookup latency: "));
    assert!(embed.description.ends_with(" ms"));
    assert_eq!(embed.fields.len(), 2);

    assert_eq!(embed.fields[0].name, "Application");
    assert_eq!(
        embed.fields[0].value,
        "Last full update: 2024-01-01 00:00 UTC\nNo incremental updates applied"
    );

    assert_eq!(embed.fields[1].name, "License");
    assert_eq!(
        embed.fields[1].value,
        "Last full update: 2024-01-01 00:00 UTC\nfri: 2024-01-05 09:30 UTC"
    );

    Ok(())
}

/// Tests the reply when a logical database has no full load.
///
/// Verifies that a replica that was never bootstrapped is reported as a failure rather
/// than as a status with no updates.
///
/// Expected: Generic lookup failure message
#[tokio::test]
async fn replies_generic_error_without_full_load() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_complete_update(
            APPLICATION_DB,
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        )
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let reply = status(&state).await;

    assert_eq!(reply, ReplyDto::text(LOOKUP_FAILED_MESSAGE));

    Ok(())
}
