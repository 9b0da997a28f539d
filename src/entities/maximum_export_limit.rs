//! `SeaORM` Entity for per-unit maximum export limits

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maximum_export_limit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time: DateTimeUtc,
    #[sea_orm(primary_key, auto_increment = false)]
    pub unit: i32,
    /// MW
    pub export_limit: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bm_unit::Entity",
        from = "Column::Unit",
        to = "super::bm_unit::Column::Id"
    )]
    BmUnit,
}

impl Related<super::bm_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BmUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
