mod common;

use gridstore::entities::bm_unit::ProdCons;
use gridstore::entities::{bm_unit, fuel_type, participant, plant_bm_unit, prelude::*};
use gridstore::error::StoreError;
use gridstore::services::registry::{self, BmUnitRegistration, NewBmUnit, NewFuelType};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter};

async fn wind_fuel(db: &DatabaseConnection) -> i32 {
    registry::upsert_fuel_type(
        db,
        NewFuelType {
            r#ref: "WIND".to_string(),
            name: Some("Wind".to_string()),
            interconnector: false,
            country: Some("GB".to_string()),
        },
    )
    .await
    .expect("fuel upsert failed")
}

async fn clear_unit(db: &DatabaseConnection, elexon_ref: &str) {
    if let Some(unit) = registry::find_bm_unit(db, elexon_ref).await.unwrap() {
        PlantBmUnit::delete_many()
            .filter(plant_bm_unit::Column::BmUnit.eq(unit.id))
            .exec(db)
            .await
            .unwrap();
    }
    BmUnit::delete_many()
        .filter(bm_unit::Column::ElexonRef.eq(elexon_ref))
        .exec(db)
        .await
        .unwrap();
}

#[tokio::test]
async fn repeated_unit_upserts_leave_one_row_with_latest_attributes() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    clear_unit(&db, "T_IDEM1").await;
    let fuel = wind_fuel(&db).await;

    let first_id = registry::upsert_bm_unit(
        &db,
        NewBmUnit {
            elexon_ref: "T_IDEM1".to_string(),
            ng_ref: Some("IDEM1".to_string()),
            fuel: Some(fuel),
            party_name: Some("First Energy Ltd".to_string()),
            unit_type: Some("T".to_string()),
            fpn: false,
        },
    )
    .await
    .unwrap();

    let after_first = registry::find_bm_unit(&db, "T_IDEM1").await.unwrap().unwrap();

    let second_id = registry::upsert_bm_unit(
        &db,
        NewBmUnit {
            elexon_ref: "T_IDEM1".to_string(),
            ng_ref: Some("IDEM1".to_string()),
            fuel: Some(fuel),
            party_name: Some("Second Energy Ltd".to_string()),
            unit_type: Some("T".to_string()),
            fpn: true,
        },
    )
    .await
    .unwrap();

    assert_eq!(first_id, second_id);

    let count = BmUnit::find()
        .filter(bm_unit::Column::ElexonRef.eq("T_IDEM1"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let after_second = registry::find_bm_unit(&db, "T_IDEM1").await.unwrap().unwrap();
    assert_eq!(after_second.party_name.as_deref(), Some("Second Energy Ltd"));
    assert!(after_second.fpn);
    assert_eq!(after_second.first_seen, after_first.first_seen);
    assert!(after_second.last_seen > after_first.last_seen);
}

#[tokio::test]
async fn registration_feed_merges_into_the_same_row() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    clear_unit(&db, "T_REG1").await;
    let fuel = wind_fuel(&db).await;

    registry::upsert_participant(&db, "REGPARTY", Some("Registration Party"))
        .await
        .unwrap();
    let region = registry::region_id_by_gsp_group(&db, "_A")
        .await
        .unwrap()
        .expect("seeded region missing");

    let core_id = registry::upsert_bm_unit(
        &db,
        NewBmUnit {
            elexon_ref: "T_REG1".to_string(),
            ng_ref: Some("REG1".to_string()),
            fuel: Some(fuel),
            party_name: Some("Some Party".to_string()),
            unit_type: Some("T".to_string()),
            fpn: true,
        },
    )
    .await
    .unwrap();

    let reg_id = registry::upsert_bm_unit_registration(
        &db,
        BmUnitRegistration {
            elexon_ref: "T_REG1".to_string(),
            // The registration file omits the secondary ref here; the one
            // learned from the reference listing must survive
            ng_ref: None,
            name: Some("Regtown Wind Farm".to_string()),
            region: Some(region),
            participant: Some("REGPARTY".to_string()),
            prod_cons: Some(ProdCons::Producer),
        },
    )
    .await
    .unwrap();

    assert_eq!(core_id, reg_id);

    let unit = registry::find_bm_unit(&db, "T_REG1").await.unwrap().unwrap();
    // Attributes from both channels coexist on the single row
    assert_eq!(unit.fuel, Some(fuel));
    assert!(unit.fpn);
    assert_eq!(unit.name.as_deref(), Some("Regtown Wind Farm"));
    assert_eq!(unit.region, Some(region));
    assert_eq!(unit.prod_cons, Some(ProdCons::Producer));

    // The secondary reference resolves to the same unit
    assert_eq!(registry::bm_unit_id_by_ng_ref(&db, "REG1").await.unwrap(), reg_id);
}

#[tokio::test]
async fn unknown_fuel_reference_is_rejected_whole() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    clear_unit(&db, "T_BADFUEL").await;

    let err = registry::upsert_bm_unit(
        &db,
        NewBmUnit {
            elexon_ref: "T_BADFUEL".to_string(),
            ng_ref: None,
            fuel: Some(-1),
            party_name: None,
            unit_type: Some("T".to_string()),
            fpn: false,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::ReferentialIntegrity(_)));
    assert!(registry::find_bm_unit(&db, "T_BADFUEL").await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_unit_type_code_is_a_domain_error() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    clear_unit(&db, "T_BADTYPE").await;

    let err = registry::upsert_bm_unit(
        &db,
        NewBmUnit {
            elexon_ref: "T_BADTYPE".to_string(),
            ng_ref: None,
            fuel: None,
            party_name: None,
            unit_type: Some("Z".to_string()),
            fpn: false,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, StoreError::DomainConstraint(_)));
    assert!(registry::find_bm_unit(&db, "T_BADTYPE").await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_upserts_of_one_natural_key_converge() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    clear_unit(&db, "T_RACE1").await;
    Participant::delete_many()
        .filter(participant::Column::Ref.eq("RACEPARTY"))
        .exec(&db)
        .await
        .unwrap();

    let (a, b, c) = tokio::join!(
        registry::upsert_participant(&db, "RACEPARTY", Some("A")),
        registry::upsert_participant(&db, "RACEPARTY", Some("B")),
        registry::upsert_participant(&db, "RACEPARTY", Some("C")),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();

    let count = Participant::find()
        .filter(participant::Column::Ref.eq("RACEPARTY"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 1);

    let unit = NewBmUnit {
        elexon_ref: "T_RACE1".to_string(),
        ng_ref: None,
        fuel: None,
        party_name: None,
        unit_type: None,
        fpn: false,
    };
    let (x, y) = tokio::join!(
        registry::upsert_bm_unit(&db, unit.clone()),
        registry::upsert_bm_unit(&db, unit.clone()),
    );
    assert_eq!(x.unwrap(), y.unwrap());

    let count = BmUnit::find()
        .filter(bm_unit::Column::ElexonRef.eq("T_RACE1"))
        .count(&db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn units_map_to_at_most_one_plant() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    clear_unit(&db, "T_PLANT1").await;
    registry::upsert_wikidata_plant(&db, "Q900001", "First Plant")
        .await
        .unwrap();
    registry::upsert_wikidata_plant(&db, "Q900002", "Second Plant")
        .await
        .unwrap();

    let unit_id = registry::upsert_bm_unit(
        &db,
        NewBmUnit {
            elexon_ref: "T_PLANT1".to_string(),
            ng_ref: Some("PLANT1".to_string()),
            fuel: None,
            party_name: None,
            unit_type: None,
            fpn: false,
        },
    )
    .await
    .unwrap();

    registry::link_plant_to_unit(&db, "Q900001", unit_id).await.unwrap();
    registry::link_plant_to_unit(&db, "Q900002", unit_id).await.unwrap();

    let links = PlantBmUnit::find()
        .filter(plant_bm_unit::Column::BmUnit.eq(unit_id))
        .all(&db)
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].wd_id, "Q900002");
}

#[tokio::test]
async fn bare_fuel_sightings_do_not_clobber_interconnector_names() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    FuelType::delete_many()
        .filter(fuel_type::Column::Ref.eq("INTTEST"))
        .exec(&db)
        .await
        .unwrap();

    let id = registry::ensure_fuel_type(&db, "INTTEST").await.unwrap();
    assert!(registry::mark_interconnector(&db, "INTTEST", "Test Link", Some("FR"))
        .await
        .unwrap());
    // Already flagged, nothing to do
    assert!(!registry::mark_interconnector(&db, "INTTEST", "Other Name", Some("FR"))
        .await
        .unwrap());

    // A later bare sighting leaves the attributes alone
    assert_eq!(registry::ensure_fuel_type(&db, "INTTEST").await.unwrap(), id);

    let fuel = FuelType::find_by_id(id).one(&db).await.unwrap().unwrap();
    assert_eq!(fuel.name.as_deref(), Some("Test Link"));
    assert!(fuel.interconnector);
    assert_eq!(fuel.country.as_deref(), Some("FR"));
}

#[tokio::test]
async fn seeded_regions_resolve_by_gsp_group() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let map = registry::gsp_region_map(&db).await.unwrap();
    assert_eq!(map.len(), 14);
    assert!(map.contains_key("_A"));
    assert!(map.contains_key("_P"));

    assert!(registry::region_id_by_gsp_group(&db, "_C").await.unwrap().is_some());
    assert!(registry::region_id_by_gsp_group(&db, "_Z").await.unwrap().is_none());
}
