//! Replica freshness types.
//!
//! The replication pipeline appends one `db_updates` row per applied load. These types
//! describe the logical databases and load kinds found in that log, and the per-database
//! summary assembled from it.

use std::fmt;

use chrono::{DateTime, Utc};

/// One of the two independently updated ULS data sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UlsDatabase {
    Application,
    License,
}

impl UlsDatabase {
    /// Every logical database, in report order.
    pub const ALL: [UlsDatabase; 2] = [UlsDatabase::Application, UlsDatabase::License];

    /// Value of the `db_name` column for this database.
    pub fn db_name(&self) -> &'static str {
        match self {
            Self::Application => "APPLICATION",
            Self::License => "LICENSE",
        }
    }
}

impl fmt::Display for UlsDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => f.write_str("Application"),
            Self::License => f.write_str("License"),
        }
    }
}

/// Kind of load recorded in the `update_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateType {
    /// Full reload of a logical database
    Complete,
    /// Daily differential applied on top of the last full reload
    Incremental,
}

impl UpdateType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Complete => "COMPLETE",
            Self::Incremental => "INCREMENTAL",
        }
    }
}

/// A daily differential applied after the last full reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementalUpdate {
    /// Day label of the differential file, e.g. `mon`
    pub day: String,
    pub timestamp: DateTime<Utc>,
}

/// Freshness of one logical database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseStatus {
    pub database: UlsDatabase,
    pub last_full_update: DateTime<Utc>,
    /// Differentials newer than `last_full_update`, newest first
    pub incremental_updates_applied: Vec<IncrementalUpdate>,
}

impl DatabaseStatus {
    /// Timestamp of the newest load of either kind.
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.incremental_updates_applied
            .first()
            .map(|update| update.timestamp)
            .unwrap_or(self.last_full_update)
    }
}

/// Replica status report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStatus {
    /// Wall-clock duration of the reference lookup in milliseconds
    pub latency_ms: u64,
    /// One entry per [`UlsDatabase`], in [`UlsDatabase::ALL`] order
    pub databases: Vec<DatabaseStatus>,
}

impl SystemStatus {
    pub fn database(&self, database: UlsDatabase) -> Option<&DatabaseStatus> {
        self.databases.iter().find(|status| status.database == database)
    }
}
