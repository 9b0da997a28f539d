//! `SeaORM` Entity for the region dimension

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "region")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    /// Owning distribution network operator
    pub operator: i32,
    /// GSP group code ("_A" .. "_P")
    #[sea_orm(unique)]
    pub gsp_group: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::operator::Entity",
        from = "Column::Operator",
        to = "super::operator::Column::Id"
    )]
    Operator,
    #[sea_orm(has_many = "super::bm_unit::Entity")]
    BmUnit,
}

impl Related<super::operator::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operator.def()
    }
}

impl Related<super::bm_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BmUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
