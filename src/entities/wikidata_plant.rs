//! `SeaORM` Entity for the wikidata_plant cross-reference

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "wikidata_plant")]
pub struct Model {
    /// Knowledge-base item id (e.g. "Q1234")
    #[sea_orm(primary_key, auto_increment = false)]
    pub wd_id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::plant_bm_unit::Entity")]
    PlantBmUnit,
}

impl Related<super::plant_bm_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantBmUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
