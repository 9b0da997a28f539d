//! `SeaORM` Entity mapping plants to balancing-mechanism units
//!
//! A plant may own several units; each unit belongs to at most one plant,
//! which is why the unit id is the primary key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "plant_bm_unit")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub bm_unit: i32,
    pub wd_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::bm_unit::Entity",
        from = "Column::BmUnit",
        to = "super::bm_unit::Column::Id"
    )]
    BmUnit,
    #[sea_orm(
        belongs_to = "super::wikidata_plant::Entity",
        from = "Column::WdId",
        to = "super::wikidata_plant::Column::WdId"
    )]
    WikidataPlant,
}

impl Related<super::bm_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BmUnit.def()
    }
}

impl Related<super::wikidata_plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WikidataPlant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
