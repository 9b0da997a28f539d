//! Forecast/actual blending: gap-free reads across a signal pair
//!
//! An "actual" table and a "forecast" table with the same shape are
//! stitched at the newest actual observation. The cutover is recomputed
//! from the actual table on every read, so it advances as actuals land and
//! needs no synchronization with the forecast Writer. Forecast rows at or
//! before the cutover are shadowed by the actuals that superseded them.

use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;

use crate::entities::{
    carbon_intensity_national, carbon_intensity_national_forecast, embedded_generation,
    embedded_generation_forecast, prelude::*,
};
use crate::error::{classify, StoreError};

/// One point of the blended embedded generation series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedGenerationPoint {
    pub time: DateTime<Utc>,
    pub solar_generation: i32,
    pub solar_capacity: i32,
    pub wind_generation: i32,
    pub wind_capacity: i32,
    pub forecast: bool,
}

/// One point of the blended carbon intensity series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarbonIntensityPoint {
    pub time: DateTime<Utc>,
    pub intensity: i32,
    pub forecast: bool,
}

trait Timed {
    fn time(&self) -> DateTime<Utc>;
}

impl Timed for EmbeddedGenerationPoint {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

impl Timed for CarbonIntensityPoint {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Keep all actual points; keep forecast points strictly past the newest
/// actual. Both inputs are expected sorted by time, so the output is too.
fn stitch<T: Timed>(actual: Vec<T>, forecast: Vec<T>, newest_actual: Option<DateTime<Utc>>) -> Vec<T> {
    let mut out = actual;
    out.extend(
        forecast
            .into_iter()
            .filter(|point| newest_actual.map_or(true, |cutover| point.time() > cutover)),
    );
    out
}

/// Blended embedded generation over `[from, to]`.
pub async fn embedded_generation_blended(
    db: &DatabaseConnection,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<EmbeddedGenerationPoint>, StoreError> {
    // The cutover is the newest actual in the whole table, not just the
    // requested range; a range ending in the past must not pick up stale
    // forecast rows that actuals have since replaced.
    let newest_actual = EmbeddedGeneration::find()
        .order_by_desc(embedded_generation::Column::Time)
        .one(db)
        .await
        .map_err(classify)?
        .map(|row| row.time);

    let actual = EmbeddedGeneration::find()
        .filter(embedded_generation::Column::Time.gte(from))
        .filter(embedded_generation::Column::Time.lte(to))
        .order_by_asc(embedded_generation::Column::Time)
        .all(db)
        .await
        .map_err(classify)?
        .into_iter()
        .map(|row| EmbeddedGenerationPoint {
            time: row.time,
            solar_generation: row.solar_generation,
            solar_capacity: row.solar_capacity,
            wind_generation: row.wind_generation,
            wind_capacity: row.wind_capacity,
            forecast: false,
        })
        .collect();

    let forecast = EmbeddedGenerationForecast::find()
        .filter(embedded_generation_forecast::Column::Time.gte(from))
        .filter(embedded_generation_forecast::Column::Time.lte(to))
        .order_by_asc(embedded_generation_forecast::Column::Time)
        .all(db)
        .await
        .map_err(classify)?
        .into_iter()
        .map(|row| EmbeddedGenerationPoint {
            time: row.time,
            solar_generation: row.solar_generation,
            solar_capacity: row.solar_capacity,
            wind_generation: row.wind_generation,
            wind_capacity: row.wind_capacity,
            forecast: true,
        })
        .collect();

    Ok(stitch(actual, forecast, newest_actual))
}

/// Blended national carbon intensity over `[from, to]`.
pub async fn carbon_intensity_blended(
    db: &DatabaseConnection,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> Result<Vec<CarbonIntensityPoint>, StoreError> {
    let newest_actual = CarbonIntensityNational::find()
        .order_by_desc(carbon_intensity_national::Column::Time)
        .one(db)
        .await
        .map_err(classify)?
        .map(|row| row.time);

    let actual = CarbonIntensityNational::find()
        .filter(carbon_intensity_national::Column::Time.gte(from))
        .filter(carbon_intensity_national::Column::Time.lte(to))
        .order_by_asc(carbon_intensity_national::Column::Time)
        .all(db)
        .await
        .map_err(classify)?
        .into_iter()
        .map(|row| CarbonIntensityPoint {
            time: row.time,
            intensity: row.intensity,
            forecast: false,
        })
        .collect();

    let forecast = CarbonIntensityNationalForecast::find()
        .filter(carbon_intensity_national_forecast::Column::Time.gte(from))
        .filter(carbon_intensity_national_forecast::Column::Time.lte(to))
        .order_by_asc(carbon_intensity_national_forecast::Column::Time)
        .all(db)
        .await
        .map_err(classify)?
        .into_iter()
        .map(|row| CarbonIntensityPoint {
            time: row.time,
            intensity: row.intensity,
            forecast: true,
        })
        .collect();

    Ok(stitch(actual, forecast, newest_actual))
}
