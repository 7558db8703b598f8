//! Tests for the call command handler.
//!
//! This module verifies that a license lookup renders the current license as an embed,
//! answers unknown call signs with a "no results" message, and hides database failures
//! behind the generic error message.

use ulsbot::server::controller::fcc::call;

use super::*;

/// Tests rendering of a license on file.
///
/// Verifies that the handler answers with an embed titled with the slashed-zero call sign,
/// status and applicant type, and footed with the FCC record number.
///
/// Expected: Embed reply for record #1
#[tokio::test]
async fn renders_license_embed() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let embed = expect_embed(call(&state, "w0eee").await);

    assert_eq!(embed.title, "W\u{00D8}EEE (Active Individual)");
    assert_eq!(embed.footer.as_deref(), Some("FCC Record #1"));
    assert_eq!(embed.color, 0x007f00);
    assert!(embed.description.starts_with("Jane Q Doe\n"));
    assert!(embed
        .description
        .contains("Colorado Springs, CO 80901-1234"));
    assert!(embed
        .fields
        .iter()
        .any(|field| field.name == "Effective:" && field.value == "01/01/2020"));

    Ok(())
}

/// Tests selection of the current license among several.
///
/// Verifies that the handler renders the license with the latest effective date when a
/// call sign has more than one license on file.
///
/// Expected: Embed reply for record #7
#[tokio::test]
async fn renders_most_recently_effective_license() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(9, "W0EEE", "01/01/2020")
        .with_mock_license(7, "W0EEE", "06/15/2023")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let embed = expect_embed(call(&state, "W0EEE").await);

    assert_eq!(embed.footer.as_deref(), Some("FCC Record #7"));

    Ok(())
}

/// Tests the reply for a call sign with no license.
///
/// Verifies that the handler names the normalised call sign in a plain text reply.
///
/// Expected: "No results found for K1ABC."
#[tokio::test]
async fn replies_no_results_for_unknown_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;
    let state: AppState = test.to_app_state();

    let reply = call(&state, " k1abc ").await;

    assert_eq!(reply, ReplyDto::text("No results found for K1ABC."));

    Ok(())
}

/// Tests the reply when the replica query fails.
///
/// Verifies that a database error is not reported as "no results" and that its details
/// are not shown to the user.
///
/// Expected: Generic lookup failure message
#[tokio::test]
async fn replies_generic_error_when_query_fails() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let state: AppState = test.to_app_state();

    let reply = call(&state, "W0EEE").await;

    assert_eq!(reply, ReplyDto::text(LOOKUP_FAILED_MESSAGE));

    Ok(())
}
