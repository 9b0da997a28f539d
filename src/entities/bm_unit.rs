//! `SeaORM` Entity for the bm_unit dimension
//!
//! One row per balancing-mechanism unit. Units are discovered from two
//! upstream channels (the reference listing and the registration file), so
//! most attributes are nullable and filled in as sightings arrive.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "bm_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Primary natural key
    #[sea_orm(unique)]
    pub elexon_ref: String,
    /// Secondary reference used by the push feed; not always assigned
    pub ng_ref: Option<String>,
    pub fuel: Option<i32>,
    pub party_name: Option<String>,
    pub unit_type: Option<String>,
    /// Whether the unit submits physical notifications
    pub fpn: bool,
    pub name: Option<String>,
    pub region: Option<i32>,
    pub participant: Option<String>,
    pub prod_cons: Option<ProdCons>,
    /// Set once at creation, never rewritten
    pub first_seen: DateTimeUtc,
    /// Advances on every sighting
    pub last_seen: DateTimeUtc,
}

/// Producer/consumer classification from the registration feed.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ProdCons {
    #[sea_orm(string_value = "producer")]
    Producer,
    #[sea_orm(string_value = "consumer")]
    Consumer,
}

impl ProdCons {
    /// Parse the upstream flag ("P"/"C") or the stored word form.
    pub fn from_flag(flag: &str) -> Result<Self, StoreError> {
        match flag {
            "P" | "producer" => Ok(ProdCons::Producer),
            "C" | "consumer" => Ok(ProdCons::Consumer),
            other => Err(StoreError::DomainConstraint(format!(
                "invalid producer/consumer flag: {other:?}"
            ))),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::fuel_type::Entity",
        from = "Column::Fuel",
        to = "super::fuel_type::Column::Id"
    )]
    FuelType,
    #[sea_orm(
        belongs_to = "super::bm_unit_type::Entity",
        from = "Column::UnitType",
        to = "super::bm_unit_type::Column::Code"
    )]
    BmUnitType,
    #[sea_orm(
        belongs_to = "super::region::Entity",
        from = "Column::Region",
        to = "super::region::Column::Id"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::participant::Entity",
        from = "Column::Participant",
        to = "super::participant::Column::Ref"
    )]
    Participant,
}

impl Related<super::fuel_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelType.def()
    }
}

impl Related<super::bm_unit_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BmUnitType.def()
    }
}

impl Related<super::region::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Region.def()
    }
}

impl Related<super::participant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Participant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prod_cons_accepts_upstream_flags() {
        assert_eq!(ProdCons::from_flag("P").unwrap(), ProdCons::Producer);
        assert_eq!(ProdCons::from_flag("C").unwrap(), ProdCons::Consumer);
        assert_eq!(ProdCons::from_flag("producer").unwrap(), ProdCons::Producer);
    }

    #[test]
    fn prod_cons_rejects_unknown_flags() {
        let err = ProdCons::from_flag("X").unwrap_err();
        assert!(matches!(err, StoreError::DomainConstraint(_)));
    }
}
