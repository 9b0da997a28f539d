//! `SeaORM` Entity for half-hourly generation by fuel type

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "generation_by_fuel_type_hh")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time: DateTimeUtc,
    #[sea_orm(primary_key, auto_increment = false)]
    pub fuel_type: i32,
    pub settlement_period: i32,
    /// MW, negative for interconnector exports
    pub generation: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fuel_type::Entity",
        from = "Column::FuelType",
        to = "super::fuel_type::Column::Id"
    )]
    FuelType,
}

impl Related<super::fuel_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
