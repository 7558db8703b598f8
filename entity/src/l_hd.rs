//! License header records (`HD.dat`)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "l_hd")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub unique_system_identifier: i64,
    pub call_sign: Option<String>,
    pub license_status: Option<String>,
    pub grant_date: Option<String>,
    pub expired_date: Option<String>,
    pub cancellation_date: Option<String>,
    pub effective_date: Option<String>,
    pub last_action_date: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::l_en::Entity")]
    LEn,
    #[sea_orm(has_one = "super::l_am::Entity")]
    LAm,
}

impl Related<super::l_en::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LEn.def()
    }
}

impl Related<super::l_am::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LAm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
