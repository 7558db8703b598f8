use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LAm::Table)
                    .if_not_exists()
                    .col(big_integer(LAm::UniqueSystemIdentifier).primary_key())
                    .col(text_null(LAm::Callsign))
                    .col(text_null(LAm::OperatorClass))
                    .col(text_null(LAm::TrusteeCallsign))
                    .col(text_null(LAm::TrusteeName))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LAm::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LAm {
    #[sea_orm(iden = "l_am")]
    Table,
    UniqueSystemIdentifier,
    Callsign,
    OperatorClass,
    TrusteeCallsign,
    TrusteeName,
}
