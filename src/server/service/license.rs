use sea_orm::DatabaseConnection;

use crate::server::{
    data::uls::license::{LicenseRepository, LicenseRow},
    error::Error,
    model::license::LicenseView,
    util::time::parse_uls_date,
};

/// Service for looking up amateur licenses by call sign.
pub struct LicenseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LicenseService<'a> {
    /// Creates a new instance of [`LicenseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up the current license for a call sign.
    ///
    /// The call sign is trimmed and uppercased before querying, so user input such as
    /// `" w0eee "` matches `W0EEE`. When a call sign has several licenses on file the one
    /// with the latest effective date is returned.
    ///
    /// # Arguments
    /// - `callsign` - Call sign as typed by the user
    ///
    /// # Returns
    /// - `Ok(Some(LicenseView))` - The current license
    /// - `Ok(None)` - No license is on file for the call sign
    /// - `Err(Error::DbErr)` - The replica query failed
    pub async fn find_by_callsign(&self, callsign: &str) -> Result<Option<LicenseView>, Error> {
        let callsign = normalize_callsign(callsign);

        if callsign.is_empty() {
            return Ok(None);
        }

        let rows = LicenseRepository::new(self.db)
            .find_by_callsign(&callsign)
            .await?;

        tracing::debug!("Found {} license record(s) for {}", rows.len(), callsign);

        Ok(select_current_license(rows).map(|row| LicenseView::new(row.into())))
    }
}

/// Normalises user input to the form call signs are stored in.
pub fn normalize_callsign(callsign: &str) -> String {
    callsign.trim().to_uppercase()
}

/// Picks the authoritative license among every record filed under one call sign.
///
/// The latest effective date wins. Ties, including records without a parseable effective
/// date, go to the highest unique system identifier, which ULS assigns in filing order.
/// A record with an effective date always outranks one without.
pub(crate) fn select_current_license(rows: Vec<LicenseRow>) -> Option<LicenseRow> {
    rows.into_iter().max_by_key(|row| {
        (
            parse_uls_date(row.effective_date.as_deref()),
            row.unique_system_identifier,
        )
    })
}
