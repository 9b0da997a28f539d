//! Time-series store: append operations for every telemetry signal
//!
//! One fact table per signal, each keyed by time (plus a fuel-type or unit
//! discriminator for the multi-entity series). An append is a single
//! `INSERT ... ON CONFLICT` statement: the whole batch lands or none of it
//! does, and a batch naming an unknown discriminator is rejected by the
//! engine's foreign key with nothing written.

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IdenStatic, IntoActiveModel, Iterable,
};

use crate::entities::{
    carbon_intensity_national, carbon_intensity_national_forecast, demand_forecast,
    embedded_generation, embedded_generation_forecast, frequency, generation_by_fuel_type_hh,
    generation_by_fuel_type_inst, initial_demand_outturn, lolp_dm, maximum_export_limit,
    maximum_import_limit, physical_notification, prelude::*, pv_live, stable_export_limit,
    system_demand, system_warning,
};
use crate::error::{classify, StoreError};

/// What happens when an append repeats an existing natural key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictPolicy {
    /// Keep the stored row, drop the new one.
    IgnoreNew,
    /// Replace the stored value fields with the new ones.
    OverwriteLatest,
}

/// Every fact signal in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    SystemDemand,
    InitialDemandOutturn,
    DemandForecast,
    PvLive,
    Frequency,
    EmbeddedGeneration,
    EmbeddedGenerationForecast,
    CarbonIntensity,
    CarbonIntensityForecast,
    SystemWarning,
    LolpDm,
    GenerationHh,
    GenerationInst,
    StableExportLimit,
    MaximumExportLimit,
    MaximumImportLimit,
    PhysicalNotification,
}

/// The declared re-observation policy for a signal, applied uniformly to
/// its table.
///
/// Upstream feeds routinely re-deliver keys with amended values (late
/// settlement figures, revised intensity and embedded-generation
/// estimates), so every current signal takes the latest value. New signals
/// may choose differently here without touching call sites.
pub fn conflict_policy(_signal: Signal) -> ConflictPolicy {
    ConflictPolicy::OverwriteLatest
}

/// Append a batch of rows for one signal, honoring its conflict policy.
///
/// Returns the number of rows written (overwrites count; ignored
/// duplicates do not).
async fn append<E, A>(
    db: &DatabaseConnection,
    signal: Signal,
    rows: Vec<E::Model>,
    key: Vec<E::Column>,
) -> Result<u64, StoreError>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E>,
{
    if rows.is_empty() {
        return Ok(0);
    }

    let key_names: Vec<&str> = key.iter().map(|c| c.as_str()).collect();
    let value_columns: Vec<E::Column> = E::Column::iter()
        .filter(|c| !key_names.contains(&c.as_str()))
        .collect();

    let mut conflict = OnConflict::columns(key);
    match conflict_policy(signal) {
        ConflictPolicy::OverwriteLatest => {
            conflict.update_columns(value_columns);
        }
        ConflictPolicy::IgnoreNew => {
            conflict.do_nothing();
        }
    }

    let written = E::insert_many(rows.into_iter().map(IntoActiveModel::into_active_model))
        .on_conflict(conflict)
        .exec_without_returning(db)
        .await
        .map_err(classify)?;

    tracing::debug!("Appended {} rows to {:?}", written, signal);
    Ok(written)
}

pub async fn record_system_demand(
    db: &DatabaseConnection,
    rows: Vec<system_demand::Model>,
) -> Result<u64, StoreError> {
    append::<SystemDemand, _>(
        db,
        Signal::SystemDemand,
        rows,
        vec![system_demand::Column::Time],
    )
    .await
}

pub async fn record_initial_demand_outturn(
    db: &DatabaseConnection,
    rows: Vec<initial_demand_outturn::Model>,
) -> Result<u64, StoreError> {
    append::<InitialDemandOutturn, _>(
        db,
        Signal::InitialDemandOutturn,
        rows,
        vec![initial_demand_outturn::Column::Time],
    )
    .await
}

pub async fn record_demand_forecast(
    db: &DatabaseConnection,
    rows: Vec<demand_forecast::Model>,
) -> Result<u64, StoreError> {
    append::<DemandForecast, _>(
        db,
        Signal::DemandForecast,
        rows,
        vec![demand_forecast::Column::Time],
    )
    .await
}

pub async fn record_pv_live(
    db: &DatabaseConnection,
    rows: Vec<pv_live::Model>,
) -> Result<u64, StoreError> {
    append::<PvLive, _>(db, Signal::PvLive, rows, vec![pv_live::Column::Time]).await
}

pub async fn record_frequency(
    db: &DatabaseConnection,
    rows: Vec<frequency::Model>,
) -> Result<u64, StoreError> {
    append::<Frequency, _>(db, Signal::Frequency, rows, vec![frequency::Column::Time]).await
}

pub async fn record_embedded_generation(
    db: &DatabaseConnection,
    rows: Vec<embedded_generation::Model>,
) -> Result<u64, StoreError> {
    append::<EmbeddedGeneration, _>(
        db,
        Signal::EmbeddedGeneration,
        rows,
        vec![embedded_generation::Column::Time],
    )
    .await
}

pub async fn record_embedded_generation_forecast(
    db: &DatabaseConnection,
    rows: Vec<embedded_generation_forecast::Model>,
) -> Result<u64, StoreError> {
    append::<EmbeddedGenerationForecast, _>(
        db,
        Signal::EmbeddedGenerationForecast,
        rows,
        vec![embedded_generation_forecast::Column::Time],
    )
    .await
}

pub async fn record_carbon_intensity(
    db: &DatabaseConnection,
    rows: Vec<carbon_intensity_national::Model>,
) -> Result<u64, StoreError> {
    append::<CarbonIntensityNational, _>(
        db,
        Signal::CarbonIntensity,
        rows,
        vec![carbon_intensity_national::Column::Time],
    )
    .await
}

pub async fn record_carbon_intensity_forecast(
    db: &DatabaseConnection,
    rows: Vec<carbon_intensity_national_forecast::Model>,
) -> Result<u64, StoreError> {
    append::<CarbonIntensityNationalForecast, _>(
        db,
        Signal::CarbonIntensityForecast,
        rows,
        vec![carbon_intensity_national_forecast::Column::Time],
    )
    .await
}

pub async fn record_system_warnings(
    db: &DatabaseConnection,
    rows: Vec<system_warning::Model>,
) -> Result<u64, StoreError> {
    append::<SystemWarning, _>(
        db,
        Signal::SystemWarning,
        rows,
        vec![system_warning::Column::Time],
    )
    .await
}

pub async fn record_lolp_dm(
    db: &DatabaseConnection,
    rows: Vec<lolp_dm::Model>,
) -> Result<u64, StoreError> {
    append::<LolpDm, _>(db, Signal::LolpDm, rows, vec![lolp_dm::Column::Time]).await
}

pub async fn record_generation_hh(
    db: &DatabaseConnection,
    rows: Vec<generation_by_fuel_type_hh::Model>,
) -> Result<u64, StoreError> {
    append::<GenerationByFuelTypeHh, _>(
        db,
        Signal::GenerationHh,
        rows,
        vec![
            generation_by_fuel_type_hh::Column::Time,
            generation_by_fuel_type_hh::Column::FuelType,
        ],
    )
    .await
}

pub async fn record_generation_inst(
    db: &DatabaseConnection,
    rows: Vec<generation_by_fuel_type_inst::Model>,
) -> Result<u64, StoreError> {
    append::<GenerationByFuelTypeInst, _>(
        db,
        Signal::GenerationInst,
        rows,
        vec![
            generation_by_fuel_type_inst::Column::Time,
            generation_by_fuel_type_inst::Column::FuelType,
        ],
    )
    .await
}

pub async fn record_stable_export_limits(
    db: &DatabaseConnection,
    rows: Vec<stable_export_limit::Model>,
) -> Result<u64, StoreError> {
    append::<StableExportLimit, _>(
        db,
        Signal::StableExportLimit,
        rows,
        vec![
            stable_export_limit::Column::Time,
            stable_export_limit::Column::Unit,
        ],
    )
    .await
}

pub async fn record_maximum_export_limits(
    db: &DatabaseConnection,
    rows: Vec<maximum_export_limit::Model>,
) -> Result<u64, StoreError> {
    append::<MaximumExportLimit, _>(
        db,
        Signal::MaximumExportLimit,
        rows,
        vec![
            maximum_export_limit::Column::Time,
            maximum_export_limit::Column::Unit,
        ],
    )
    .await
}

pub async fn record_maximum_import_limits(
    db: &DatabaseConnection,
    rows: Vec<maximum_import_limit::Model>,
) -> Result<u64, StoreError> {
    append::<MaximumImportLimit, _>(
        db,
        Signal::MaximumImportLimit,
        rows,
        vec![
            maximum_import_limit::Column::Time,
            maximum_import_limit::Column::Unit,
        ],
    )
    .await
}

pub async fn record_physical_notifications(
    db: &DatabaseConnection,
    rows: Vec<physical_notification::Model>,
) -> Result<u64, StoreError> {
    append::<PhysicalNotification, _>(
        db,
        Signal::PhysicalNotification,
        rows,
        vec![
            physical_notification::Column::Time,
            physical_notification::Column::Unit,
        ],
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_signal_declares_a_policy() {
        // The policy is part of observable behavior under Writer retries, so
        // pin it: all current signals overwrite.
        for signal in [
            Signal::SystemDemand,
            Signal::InitialDemandOutturn,
            Signal::DemandForecast,
            Signal::PvLive,
            Signal::Frequency,
            Signal::EmbeddedGeneration,
            Signal::EmbeddedGenerationForecast,
            Signal::CarbonIntensity,
            Signal::CarbonIntensityForecast,
            Signal::SystemWarning,
            Signal::LolpDm,
            Signal::GenerationHh,
            Signal::GenerationInst,
            Signal::StableExportLimit,
            Signal::MaximumExportLimit,
            Signal::MaximumImportLimit,
            Signal::PhysicalNotification,
        ] {
            assert_eq!(conflict_policy(signal), ConflictPolicy::OverwriteLatest);
        }
    }
}
