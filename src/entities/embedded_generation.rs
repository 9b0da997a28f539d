//! `SeaORM` Entity for embedded generation outturn
//!
//! Estimated generation from solar and wind capacity connected below the
//! transmission system, which the grid operator cannot meter directly.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "embedded_generation")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time: DateTimeUtc,
    pub solar_generation: i32,
    pub solar_capacity: i32,
    pub wind_generation: i32,
    pub wind_capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
