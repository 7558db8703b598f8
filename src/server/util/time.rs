//! Date and time helpers for ULS values.
//!
//! The ULS bulk files store dates as `MM/DD/YYYY` text. These helpers convert between that
//! representation and `chrono` values, and format replica timestamps for display.

use chrono::{DateTime, NaiveDate, Utc};

/// `chrono` format string of ULS date columns.
pub const ULS_DATE_FORMAT: &str = "%m/%d/%Y";

/// Format used when displaying replica update timestamps.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Parses a ULS `MM/DD/YYYY` date column.
///
/// # Arguments
/// - `raw` - Column text, `None` when the column is NULL
///
/// # Returns
/// - `Some(NaiveDate)` - The parsed date
/// - `None` - The column is NULL, blank, or not a valid `MM/DD/YYYY` date
pub fn parse_uls_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();

    if raw.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(raw, ULS_DATE_FORMAT).ok()
}

/// Formats a date the way ULS displays it (`MM/DD/YYYY`).
pub fn format_uls_date(date: NaiveDate) -> String {
    date.format(ULS_DATE_FORMAT).to_string()
}

pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_DISPLAY_FORMAT).to_string()
}
