use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::{
    db::DbUpdateModel,
    status::{UlsDatabase, UpdateType},
};

pub struct UpdateRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UpdateRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the most recent full load recorded for a logical database.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The newest `COMPLETE` entry
    /// - `Ok(None)` - No full load has ever been recorded for the database
    /// - `Err(DbErr)` - Query or connection failure
    pub async fn get_latest_complete(
        &self,
        database: UlsDatabase,
    ) -> Result<Option<DbUpdateModel>, DbErr> {
        entity::prelude::DbUpdates::find()
            .filter(entity::db_updates::Column::DbName.eq(database.db_name()))
            .filter(entity::db_updates::Column::UpdateType.eq(UpdateType::Complete.as_str()))
            .order_by_desc(entity::db_updates::Column::Ts)
            .order_by_desc(entity::db_updates::Column::Id)
            .one(self.db)
            .await
    }

    /// Gets the incremental loads applied strictly after `since`, newest first.
    ///
    /// Differentials at or before `since` were superseded by the full load at that time
    /// and are excluded.
    pub async fn get_incremental_since(
        &self,
        database: UlsDatabase,
        since: DateTime<Utc>,
    ) -> Result<Vec<DbUpdateModel>, DbErr> {
        entity::prelude::DbUpdates::find()
            .filter(entity::db_updates::Column::DbName.eq(database.db_name()))
            .filter(entity::db_updates::Column::UpdateType.eq(UpdateType::Incremental.as_str()))
            .filter(entity::db_updates::Column::Ts.gt(since))
            .order_by_desc(entity::db_updates::Column::Ts)
            .order_by_desc(entity::db_updates::Column::Id)
            .all(self.db)
            .await
    }
}
