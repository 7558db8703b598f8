//! Amateur license records (`AM.dat`)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "l_am")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_system_identifier: i64,
    /// Stored space-padded to the fixed ULS column width
    pub callsign: Option<String>,
    pub operator_class: Option<String>,
    pub trustee_callsign: Option<String>,
    pub trustee_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::l_hd::Entity",
        from = "Column::UniqueSystemIdentifier",
        to = "super::l_hd::Column::UniqueSystemIdentifier"
    )]
    LHd,
}

impl Related<super::l_hd::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LHd.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
