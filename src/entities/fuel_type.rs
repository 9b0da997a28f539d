//! `SeaORM` Entity for the fuel_type dimension

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "fuel_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Upstream reference code (e.g. "CCGT", "WIND", "INTFR")
    #[sea_orm(unique)]
    pub r#ref: String,
    /// Display name; populated lazily for interconnectors
    pub name: Option<String>,
    pub interconnector: bool,
    /// Counterparty country, set for interconnectors
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bm_unit::Entity")]
    BmUnit,
}

impl Related<super::bm_unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BmUnit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
