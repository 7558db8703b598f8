use sea_orm_migration::{prelude::*, schema::*};

static IDX_L_HD_CALL_SIGN: &str = "idx-l_hd-call_sign";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LHd::Table)
                    .if_not_exists()
                    .col(big_integer(LHd::UniqueSystemIdentifier).primary_key())
                    .col(text_null(LHd::CallSign))
                    .col(text_null(LHd::LicenseStatus))
                    .col(text_null(LHd::GrantDate))
                    .col(text_null(LHd::ExpiredDate))
                    .col(text_null(LHd::CancellationDate))
                    .col(text_null(LHd::EffectiveDate))
                    .col(text_null(LHd::LastActionDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_L_HD_CALL_SIGN)
                    .table(LHd::Table)
                    .if_not_exists()
                    .col(LHd::CallSign)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_L_HD_CALL_SIGN)
                    .table(LHd::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LHd::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LHd {
    #[sea_orm(iden = "l_hd")]
    Table,
    UniqueSystemIdentifier,
    CallSign,
    LicenseStatus,
    GrantDate,
    ExpiredDate,
    CancellationDate,
    EffectiveDate,
    LastActionDate,
}
