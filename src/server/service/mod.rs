//! Service layer for license lookups and replica status.
//!
//! Services coordinate repositories and turn raw replica rows into domain values. They
//! never retry: a failed query is reported to the caller straight away, and any retry
//! policy belongs to the command layer.

pub mod license;
pub mod status;
