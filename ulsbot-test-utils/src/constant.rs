//! Constant values shared across tests.
//!
//! The `db_name` values mirror those written by the replication pipeline. They are
//! duplicated here rather than imported so the test utilities don't depend on the main
//! crate.

/// `db_name` of the ULS application database in the replication log.
pub static APPLICATION_DB: &str = "APPLICATION";

/// `db_name` of the ULS license database in the replication log.
pub static LICENSE_DB: &str = "LICENSE";

/// `update_type` of a full load.
pub static COMPLETE: &str = "COMPLETE";

/// `update_type` of a daily differential.
pub static INCREMENTAL: &str = "INCREMENTAL";

/// Reference call sign the status probe looks up.
pub static PROBE_CALLSIGN: &str = "W0EEE";
