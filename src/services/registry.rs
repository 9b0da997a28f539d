//! Reference data registry: dimension resolution and idempotent upserts
//!
//! Every upsert here is a single `INSERT ... ON CONFLICT DO UPDATE`
//! statement, so concurrent Writers discovering the same natural key
//! converge on one row without a read-then-write race. `first_seen` is only
//! ever written on insert; `last_seen` is rewritten by every sighting.
//!
//! Nothing in this module creates foreign-key targets on behalf of a caller:
//! a unit naming an unknown fuel type is rejected, not repaired.

use std::collections::HashMap;
use std::time::Duration;

use chrono::Utc;
use moka::future::Cache;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use crate::entities::{
    bm_unit::{self, ProdCons},
    fuel_type, participant, plant_bm_unit,
    prelude::*,
    region, wikidata_plant,
};
use crate::error::{classify, StoreError};

/// Attributes for a full fuel-type upsert.
#[derive(Debug, Clone)]
pub struct NewFuelType {
    pub r#ref: String,
    pub name: Option<String>,
    pub interconnector: bool,
    pub country: Option<String>,
}

/// Core attributes of a unit, as delivered by the reference listing.
#[derive(Debug, Clone)]
pub struct NewBmUnit {
    pub elexon_ref: String,
    pub ng_ref: Option<String>,
    pub fuel: Option<i32>,
    pub party_name: Option<String>,
    pub unit_type: Option<String>,
    pub fpn: bool,
}

/// Attributes of a unit from the registration file, the second sighting
/// channel. Arrives on its own schedule, so it is a separate upsert.
#[derive(Debug, Clone)]
pub struct BmUnitRegistration {
    pub elexon_ref: String,
    pub ng_ref: Option<String>,
    pub name: Option<String>,
    pub region: Option<i32>,
    pub participant: Option<String>,
    pub prod_cons: Option<ProdCons>,
}

/// Upsert a fuel type by its reference code, applying the latest attributes.
pub async fn upsert_fuel_type(
    db: &DatabaseConnection,
    new: NewFuelType,
) -> Result<i32, StoreError> {
    let model = fuel_type::ActiveModel {
        r#ref: Set(new.r#ref),
        name: Set(new.name),
        interconnector: Set(new.interconnector),
        country: Set(new.country),
        ..Default::default()
    };

    let row = FuelType::insert(model)
        .on_conflict(
            OnConflict::column(fuel_type::Column::Ref)
                .update_columns([
                    fuel_type::Column::Name,
                    fuel_type::Column::Interconnector,
                    fuel_type::Column::Country,
                ])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(classify)?;

    Ok(row.id)
}

/// Register a fuel-type sighting by bare reference code, without clobbering
/// attributes set by richer feeds. Creates the row when missing.
pub async fn ensure_fuel_type(db: &DatabaseConnection, r: &str) -> Result<i32, StoreError> {
    let model = fuel_type::ActiveModel {
        r#ref: Set(r.to_owned()),
        interconnector: Set(false),
        ..Default::default()
    };

    FuelType::insert(model)
        .on_conflict(
            OnConflict::column(fuel_type::Column::Ref)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(classify)?;

    fuel_type_id(db, r).await
}

/// Flag a fuel type as an interconnector, naming it. Only touches rows not
/// already flagged; returns whether anything changed.
pub async fn mark_interconnector(
    db: &DatabaseConnection,
    r: &str,
    name: &str,
    country: Option<&str>,
) -> Result<bool, StoreError> {
    let res = FuelType::update_many()
        .col_expr(fuel_type::Column::Name, Expr::value(name))
        .col_expr(fuel_type::Column::Interconnector, Expr::value(true))
        .col_expr(fuel_type::Column::Country, Expr::value(country))
        .filter(fuel_type::Column::Ref.eq(r))
        .filter(fuel_type::Column::Interconnector.eq(false))
        .exec(db)
        .await
        .map_err(classify)?;

    if res.rows_affected > 0 {
        tracing::debug!("Flagged {} as interconnector ({})", r, name);
    }
    Ok(res.rows_affected > 0)
}

/// Resolve a fuel-type reference to its internal id.
pub async fn fuel_type_id(db: &DatabaseConnection, r: &str) -> Result<i32, StoreError> {
    FuelType::find()
        .filter(fuel_type::Column::Ref.eq(r))
        .one(db)
        .await
        .map_err(classify)?
        .map(|row| row.id)
        .ok_or_else(|| StoreError::ReferentialIntegrity(format!("unknown fuel type: {r}")))
}

/// Upsert a unit's core attributes, keyed on its primary reference.
///
/// The unit-type code is checked against the `bm_unit_type` enumeration
/// before writing; fuel references are left to the engine's foreign key.
pub async fn upsert_bm_unit(db: &DatabaseConnection, new: NewBmUnit) -> Result<i32, StoreError> {
    if let Some(code) = &new.unit_type {
        validate_unit_type(db, code).await?;
    }

    let now = Utc::now();
    let model = bm_unit::ActiveModel {
        elexon_ref: Set(new.elexon_ref),
        ng_ref: Set(new.ng_ref),
        fuel: Set(new.fuel),
        party_name: Set(new.party_name),
        unit_type: Set(new.unit_type),
        fpn: Set(new.fpn),
        first_seen: Set(now),
        last_seen: Set(now),
        ..Default::default()
    };

    let row = BmUnit::insert(model)
        .on_conflict(
            OnConflict::column(bm_unit::Column::ElexonRef)
                .update_columns([
                    bm_unit::Column::NgRef,
                    bm_unit::Column::Fuel,
                    bm_unit::Column::PartyName,
                    bm_unit::Column::UnitType,
                    bm_unit::Column::Fpn,
                    bm_unit::Column::LastSeen,
                ])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(classify)?;

    Ok(row.id)
}

/// Upsert a unit's registration attributes (name, region, participant,
/// producer/consumer classification), keyed on its primary reference.
pub async fn upsert_bm_unit_registration(
    db: &DatabaseConnection,
    reg: BmUnitRegistration,
) -> Result<i32, StoreError> {
    let now = Utc::now();
    let model = bm_unit::ActiveModel {
        elexon_ref: Set(reg.elexon_ref),
        ng_ref: Set(reg.ng_ref),
        name: Set(reg.name),
        region: Set(reg.region),
        participant: Set(reg.participant),
        prod_cons: Set(reg.prod_cons),
        fpn: Set(false),
        first_seen: Set(now),
        last_seen: Set(now),
        ..Default::default()
    };

    // ng_ref is deliberately not in the update set: the registration file
    // omits it for some units and must not erase one learned elsewhere
    let row = BmUnit::insert(model)
        .on_conflict(
            OnConflict::column(bm_unit::Column::ElexonRef)
                .update_columns([
                    bm_unit::Column::Name,
                    bm_unit::Column::Region,
                    bm_unit::Column::Participant,
                    bm_unit::Column::ProdCons,
                    bm_unit::Column::LastSeen,
                ])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(classify)?;

    Ok(row.id)
}

/// Find a unit by either of its external references.
pub async fn find_bm_unit(
    db: &DatabaseConnection,
    external_ref: &str,
) -> Result<Option<bm_unit::Model>, StoreError> {
    BmUnit::find()
        .filter(
            Condition::any()
                .add(bm_unit::Column::ElexonRef.eq(external_ref))
                .add(bm_unit::Column::NgRef.eq(external_ref)),
        )
        .one(db)
        .await
        .map_err(classify)
}

/// Resolve a unit's secondary reference to its internal id, as needed when
/// keying per-unit series from the push feed.
pub async fn bm_unit_id_by_ng_ref(
    db: &DatabaseConnection,
    ng_ref: &str,
) -> Result<i32, StoreError> {
    BmUnit::find()
        .filter(bm_unit::Column::NgRef.eq(ng_ref))
        .one(db)
        .await
        .map_err(classify)?
        .map(|row| row.id)
        .ok_or_else(|| StoreError::ReferentialIntegrity(format!("unknown BM unit: {ng_ref}")))
}

/// Upsert a trading participant by reference.
pub async fn upsert_participant(
    db: &DatabaseConnection,
    r: &str,
    name: Option<&str>,
) -> Result<participant::Model, StoreError> {
    let now = Utc::now();
    let model = participant::ActiveModel {
        r#ref: Set(r.to_owned()),
        name: Set(name.map(str::to_owned)),
        first_seen: Set(now),
        last_seen: Set(now),
    };

    Participant::insert(model)
        .on_conflict(
            OnConflict::column(participant::Column::Ref)
                .update_columns([participant::Column::Name, participant::Column::LastSeen])
                .to_owned(),
        )
        .exec_with_returning(db)
        .await
        .map_err(classify)
}

/// Upsert a knowledge-base plant record.
pub async fn upsert_wikidata_plant(
    db: &DatabaseConnection,
    wd_id: &str,
    name: &str,
) -> Result<(), StoreError> {
    let model = wikidata_plant::ActiveModel {
        wd_id: Set(wd_id.to_owned()),
        name: Set(name.to_owned()),
    };

    WikidataPlant::insert(model)
        .on_conflict(
            OnConflict::column(wikidata_plant::Column::WdId)
                .update_columns([wikidata_plant::Column::Name])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(classify)?;

    Ok(())
}

/// Point a unit at a plant. A unit maps to at most one plant; re-linking
/// overwrites the previous mapping.
pub async fn link_plant_to_unit(
    db: &DatabaseConnection,
    wd_id: &str,
    bm_unit_id: i32,
) -> Result<(), StoreError> {
    let model = plant_bm_unit::ActiveModel {
        bm_unit: Set(bm_unit_id),
        wd_id: Set(wd_id.to_owned()),
    };

    PlantBmUnit::insert(model)
        .on_conflict(
            OnConflict::column(plant_bm_unit::Column::BmUnit)
                .update_columns([plant_bm_unit::Column::WdId])
                .to_owned(),
        )
        .exec_without_returning(db)
        .await
        .map_err(classify)?;

    Ok(())
}

/// Resolve a GSP group code to its region id.
pub async fn region_id_by_gsp_group(
    db: &DatabaseConnection,
    gsp_group: &str,
) -> Result<Option<i32>, StoreError> {
    Ok(Region::find()
        .filter(region::Column::GspGroup.eq(gsp_group))
        .one(db)
        .await
        .map_err(classify)?
        .map(|row| row.id))
}

/// The full GSP group -> region id mapping, for batch attribution.
pub async fn gsp_region_map(db: &DatabaseConnection) -> Result<HashMap<String, i32>, StoreError> {
    Ok(Region::find()
        .all(db)
        .await
        .map_err(classify)?
        .into_iter()
        .map(|row| (row.gsp_group, row.id))
        .collect())
}

async fn validate_unit_type(db: &DatabaseConnection, code: &str) -> Result<(), StoreError> {
    if BmUnitType::find_by_id(code).one(db).await.map_err(classify)?.is_none() {
        return Err(StoreError::DomainConstraint(format!(
            "unknown BM unit type code: {code:?}"
        )));
    }
    Ok(())
}

/// Memoized resolution of external references for hot append paths.
///
/// Entries expire so renames are picked up eventually; misses are never
/// cached, since a unit may simply not have been discovered yet.
#[derive(Clone)]
pub struct ResolverCache {
    fuel_types: Cache<String, i32>,
    units: Cache<String, i32>,
}

impl ResolverCache {
    pub fn new() -> Self {
        Self {
            fuel_types: Cache::builder()
                .max_capacity(256)
                .time_to_live(Duration::from_secs(3600))
                .build(),
            units: Cache::builder()
                .max_capacity(8192)
                .time_to_live(Duration::from_secs(3600))
                .build(),
        }
    }

    pub async fn fuel_type_id(
        &self,
        db: &DatabaseConnection,
        r: &str,
    ) -> Result<i32, StoreError> {
        if let Some(id) = self.fuel_types.get(r).await {
            return Ok(id);
        }
        let id = fuel_type_id(db, r).await?;
        self.fuel_types.insert(r.to_owned(), id).await;
        Ok(id)
    }

    pub async fn bm_unit_id(
        &self,
        db: &DatabaseConnection,
        ng_ref: &str,
    ) -> Result<i32, StoreError> {
        if let Some(id) = self.units.get(ng_ref).await {
            return Ok(id);
        }
        let id = bm_unit_id_by_ng_ref(db, ng_ref).await?;
        self.units.insert(ng_ref.to_owned(), id).await;
        Ok(id)
    }
}

impl Default for ResolverCache {
    fn default() -> Self {
        Self::new()
    }
}
