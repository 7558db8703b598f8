use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LEn::Table)
                    .if_not_exists()
                    .col(big_integer(LEn::UniqueSystemIdentifier).primary_key())
                    .col(text_null(LEn::EntityType))
                    .col(text_null(LEn::EntityName))
                    .col(text_null(LEn::FirstName))
                    .col(text_null(LEn::Mi))
                    .col(text_null(LEn::LastName))
                    .col(text_null(LEn::Suffix))
                    .col(text_null(LEn::StreetAddress))
                    .col(text_null(LEn::City))
                    .col(text_null(LEn::State))
                    .col(text_null(LEn::ZipCode))
                    .col(text_null(LEn::PoBox))
                    .col(text_null(LEn::AttentionLine))
                    .col(text_null(LEn::Frn))
                    .col(text_null(LEn::ApplicantTypeCode))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LEn::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LEn {
    #[sea_orm(iden = "l_en")]
    Table,
    UniqueSystemIdentifier,
    EntityType,
    EntityName,
    FirstName,
    Mi,
    LastName,
    Suffix,
    StreetAddress,
    City,
    State,
    ZipCode,
    PoBox,
    AttentionLine,
    Frn,
    ApplicantTypeCode,
}
