//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before
//! execution. Methods can be chained together, with all operations queued and executed
//! during the final `build()` call.

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixture rows. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_uls_tables: bool,

    // Database fixtures to insert
    licenses: Vec<(i64, String, String)>, // (unique_system_identifier, callsign, effective_date)
    complete_updates: Vec<(String, DateTime<Utc>)>, // (db_name, ts)
    incremental_updates: Vec<(String, String, DateTime<Utc>)>, // (db_name, day, ts)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_uls_tables: false,
            licenses: Vec::new(),
            complete_updates: Vec::new(),
            incremental_updates: Vec::new(),
        }
    }

    /// Add every replica table to the test database.
    ///
    /// Creates `l_hd`, `l_en`, `l_am` and `db_updates`.
    pub fn with_uls_tables(mut self) -> Self {
        self.include_uls_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during
    /// `build()`. Chain multiple calls to add multiple tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ulsbot_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), ulsbot_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(DbUpdates)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock amateur license into the database.
    ///
    /// Queues header, entity and amateur rows sharing `unique_system_identifier`, to be
    /// inserted during `build()`.
    ///
    /// # Arguments
    /// - `unique_system_identifier` - ULS record identifier
    /// - `callsign` - Call sign stored on the header and amateur rows
    /// - `effective_date` - `MM/DD/YYYY` effective date of the license
    pub fn with_mock_license(
        mut self,
        unique_system_identifier: i64,
        callsign: impl Into<String>,
        effective_date: impl Into<String>,
    ) -> Self {
        self.licenses.push((
            unique_system_identifier,
            callsign.into(),
            effective_date.into(),
        ));
        self
    }

    /// Record a full load of `db_name` at `ts` in the replication log.
    pub fn with_complete_update(mut self, db_name: impl Into<String>, ts: DateTime<Utc>) -> Self {
        self.complete_updates.push((db_name.into(), ts));
        self
    }

    /// Record a daily differential of `db_name` at `ts` in the replication log.
    pub fn with_incremental_update(
        mut self,
        db_name: impl Into<String>,
        day: impl Into<String>,
        ts: DateTime<Utc>,
    ) -> Self {
        self.incremental_updates
            .push((db_name.into(), day.into(), ts));
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (replica tables if specified, then custom tables)
    /// 2. Inserts license fixtures
    /// 3. Inserts replication log fixtures
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_uls_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::LHd),
                schema.create_table_from_entity(entity::prelude::LEn),
                schema.create_table_from_entity(entity::prelude::LAm),
                schema.create_table_from_entity(entity::prelude::DbUpdates),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert license fixtures
        for (id, callsign, effective_date) in self.licenses {
            setup
                .uls()
                .insert_mock_license(id, &callsign, &effective_date)
                .await?;
        }

        // 3. Insert replication log fixtures
        for (db_name, ts) in self.complete_updates {
            setup.uls().insert_complete_update(&db_name, ts).await?;
        }

        for (db_name, day, ts) in self.incremental_updates {
            setup
                .uls()
                .insert_incremental_update(&db_name, &day, ts)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
