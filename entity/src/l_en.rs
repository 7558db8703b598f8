//! Licensee entity records (`EN.dat`)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "l_en")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_system_identifier: i64,
    pub entity_type: Option<String>,
    pub entity_name: Option<String>,
    pub first_name: Option<String>,
    pub mi: Option<String>,
    pub last_name: Option<String>,
    pub suffix: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub po_box: Option<String>,
    pub attention_line: Option<String>,
    pub frn: Option<String>,
    pub applicant_type_code: Option<String>,
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
