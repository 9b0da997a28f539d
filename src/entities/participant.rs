//! `SeaORM` Entity for the participant dimension

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "participant")]
pub struct Model {
    /// Trading party reference, the natural key
    #[sea_orm(primary_key, auto_increment = false)]
    pub r#ref: String,
    pub name: Option<String>,
    /// Set once when the participant is first observed
    pub first_seen: DateTimeUtc,
    /// Advances on every later observation
    pub last_seen: DateTimeUtc,
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
