//! Replication log, one row per applied full or incremental load

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "db_updates")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// `APPLICATION` or `LICENSE`
    pub db_name: String,
    /// `COMPLETE` or `INCREMENTAL`
    pub update_type: String,
    /// Weekday label of a daily differential, empty for full loads
    pub incremental_day: Option<String>,
    pub ts: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
