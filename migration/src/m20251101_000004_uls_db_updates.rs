use sea_orm_migration::{prelude::*, schema::*};

static IDX_DB_UPDATES_NAME_TYPE_TS: &str = "idx-db_updates-db_name-update_type-ts";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DbUpdates::Table)
                    .if_not_exists()
                    .col(pk_auto(DbUpdates::Id))
                    .col(string(DbUpdates::DbName))
                    .col(string(DbUpdates::UpdateType))
                    .col(string_null(DbUpdates::IncrementalDay))
                    .col(timestamp_with_time_zone(DbUpdates::Ts))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DB_UPDATES_NAME_TYPE_TS)
                    .table(DbUpdates::Table)
                    .if_not_exists()
                    .col(DbUpdates::DbName)
                    .col(DbUpdates::UpdateType)
                    .col(DbUpdates::Ts)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DB_UPDATES_NAME_TYPE_TS)
                    .table(DbUpdates::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DbUpdates::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DbUpdates {
    Table,
    Id,
    DbName,
    UpdateType,
    IncrementalDay,
    Ts,
}
