//! Tests for LicenseService::find_by_callsign method.

use crate::server::{
    error::Error,
    model::fcc::{ApplicantType, LicenseStatus, OperatorClass},
};

use super::*;

/// Expect Ok with Some for a call sign with one license
#[tokio::test]
async fn returns_license_view() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;

    let license_service = LicenseService::new(&test.db);
    let result = license_service.find_by_callsign("W0EEE").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let license = result.unwrap().expect("license should be found");

    assert_eq!(license.id(), 1);
    assert_eq!(license.record().callsign_ascii, "W0EEE");
    assert_eq!(license.callsign(), "W\u{00D8}EEE");
    assert_eq!(license.name(), "Jane Q Doe");
    assert_eq!(license.zip(), "80901-1234");
    assert_eq!(license.status(), LicenseStatus::Active);
    assert_eq!(license.applicant_type(), ApplicantType::Individual);
    assert_eq!(license.operator_class(), OperatorClass::AmateurExtra);

    Ok(())
}

/// Expect the same record regardless of case and surrounding whitespace
#[tokio::test]
async fn normalises_callsign_input() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;

    let license_service = LicenseService::new(&test.db);

    for input in [" w0eee ", "W0EEE", "w0eee"] {
        let license = license_service.find_by_callsign(input).await.unwrap();
        assert_eq!(license.map(|l| l.id()), Some(1), "input {:?}", input);
    }

    Ok(())
}

/// Expect the license with the latest effective date when several are on file
#[tokio::test]
async fn returns_most_recently_effective_license() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(7, "W0EEE", "06/15/2023")
        .with_mock_license(9, "W0EEE", "01/01/2020")
        .build()
        .await?;

    let license_service = LicenseService::new(&test.db);
    let license = license_service.find_by_callsign("W0EEE").await.unwrap();

    let license = license.expect("license should be found");
    assert_eq!(license.id(), 7);
    assert_eq!(
        license.effective_date(),
        chrono::NaiveDate::from_ymd_opt(2023, 6, 15)
    );

    Ok(())
}

/// Expect Ok with None for a call sign with no license on file
#[tokio::test]
async fn returns_none_for_unknown_callsign() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_uls_tables()
        .with_mock_license(1, "W0EEE", "01/01/2020")
        .build()
        .await?;

    let license_service = LicenseService::new(&test.db);
    let result = license_service.find_by_callsign("K1ABC").await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect Ok with None for blank input without querying
#[tokio::test]
async fn returns_none_for_blank_input() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let license_service = LicenseService::new(&test.db);
    let result = license_service.find_by_callsign("   ").await;

    assert!(matches!(result, Ok(None)));

    Ok(())
}

/// Expect a database error rather than None when the query fails
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let license_service = LicenseService::new(&test.db);
    let result = license_service.find_by_callsign("W0EEE").await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
