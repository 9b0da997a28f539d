//! `SeaORM` Entity for the initial demand outturn series

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "initial_demand_outturn")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub time: DateTimeUtc,
    pub settlement_date: Date,
    pub settlement_period: i32,
    /// MW, national
    pub demand_outturn: i32,
    /// MW, transmission system only
    pub transmission_demand_outturn: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
