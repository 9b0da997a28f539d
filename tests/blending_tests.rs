mod common;

use chrono::{DateTime, TimeZone, Utc};
use gridstore::entities::{
    carbon_intensity_national, carbon_intensity_national_forecast, embedded_generation,
    embedded_generation_forecast, prelude::*,
};
use gridstore::services::blending;
use gridstore::services::timeseries;
use sea_orm::{ConnectionTrait, DatabaseBackend, EntityTrait, Statement};

fn hour(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2023, 6, 1, h, 0, 0).unwrap()
}

fn embedded(h: u32, solar: i32) -> embedded_generation::Model {
    embedded_generation::Model {
        time: hour(h),
        solar_generation: solar,
        solar_capacity: 14000,
        wind_generation: 2000,
        wind_capacity: 6000,
    }
}

fn embedded_forecast(h: u32, solar: i32) -> embedded_generation_forecast::Model {
    embedded_generation_forecast::Model {
        time: hour(h),
        solar_generation: solar,
        solar_capacity: 14000,
        wind_generation: 2000,
        wind_capacity: 6000,
    }
}

#[tokio::test]
async fn blended_read_switches_from_actual_to_forecast_at_the_boundary() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    EmbeddedGeneration::delete_many().exec(&db).await.unwrap();
    EmbeddedGenerationForecast::delete_many().exec(&db).await.unwrap();

    timeseries::record_embedded_generation(
        &db,
        vec![embedded(10, 5000), embedded(11, 5200), embedded(12, 5400)],
    )
    .await
    .unwrap();
    timeseries::record_embedded_generation_forecast(
        &db,
        vec![
            embedded_forecast(11, 5100),
            embedded_forecast(12, 5300),
            embedded_forecast(13, 5500),
            embedded_forecast(14, 5600),
        ],
    )
    .await
    .unwrap();

    let blended = blending::embedded_generation_blended(&db, hour(0), hour(23))
        .await
        .unwrap();

    let times: Vec<DateTime<Utc>> = blended.iter().map(|p| p.time).collect();
    assert_eq!(
        times,
        vec![hour(10), hour(11), hour(12), hour(13), hour(14)]
    );

    // Everything through the newest actual comes from the actual table
    assert!(blended[..3].iter().all(|p| !p.forecast));
    assert!(blended[3..].iter().all(|p| p.forecast));
    // The shadowed forecast for 12:00 is gone; the actual won
    assert_eq!(blended[2].solar_generation, 5400);

    // No timestamp appears twice
    let mut deduped = times.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), times.len());

    // The reader-side view applies the same cutover
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            "SELECT COUNT(*) AS n FROM embedded_generation_blended",
        ))
        .await
        .unwrap()
        .unwrap();
    let view_count: i64 = row.try_get("", "n").unwrap();
    assert_eq!(view_count as usize, blended.len());
}

#[tokio::test]
async fn boundary_advances_as_new_actuals_land() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    CarbonIntensityNational::delete_many().exec(&db).await.unwrap();
    CarbonIntensityNationalForecast::delete_many().exec(&db).await.unwrap();

    timeseries::record_carbon_intensity(
        &db,
        vec![carbon_intensity_national::Model {
            time: hour(8),
            intensity: 150,
        }],
    )
    .await
    .unwrap();
    timeseries::record_carbon_intensity_forecast(
        &db,
        vec![
            carbon_intensity_national_forecast::Model {
                time: hour(9),
                intensity: 160,
            },
            carbon_intensity_national_forecast::Model {
                time: hour(10),
                intensity: 170,
            },
        ],
    )
    .await
    .unwrap();

    let before = blending::carbon_intensity_blended(&db, hour(0), hour(23))
        .await
        .unwrap();
    assert_eq!(before.len(), 3);
    assert!(before[1].forecast);

    // An actual for 09:00 lands; the next read must shadow that forecast
    // without any coordination
    timeseries::record_carbon_intensity(
        &db,
        vec![carbon_intensity_national::Model {
            time: hour(9),
            intensity: 158,
        }],
    )
    .await
    .unwrap();

    let after = blending::carbon_intensity_blended(&db, hour(0), hour(23))
        .await
        .unwrap();
    assert_eq!(after.len(), 3);
    assert!(!after[1].forecast);
    assert_eq!(after[1].intensity, 158);
    assert!(after[2].forecast);
}
