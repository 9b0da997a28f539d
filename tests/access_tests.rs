mod common;

use gridstore::error::StoreError;
use gridstore::services::access;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};

const ALL_TABLES: &[&str] = &[
    "fuel_type",
    "operator",
    "region",
    "bm_unit_type",
    "bm_unit",
    "participant",
    "wikidata_plant",
    "plant_bm_unit",
    "system_demand",
    "initial_demand_outturn",
    "demand_forecast",
    "pv_live",
    "frequency",
    "embedded_generation",
    "embedded_generation_forecast",
    "carbon_intensity_national",
    "carbon_intensity_national_forecast",
    "system_warning",
    "lolp_dm",
    "generation_by_fuel_type_hh",
    "generation_by_fuel_type_inst",
    "stable_export_limit",
    "maximum_export_limit",
    "maximum_import_limit",
    "physical_notification",
];

async fn table_privilege(
    db: &DatabaseConnection,
    role: &str,
    table: &str,
    privilege: &str,
) -> bool {
    let row = db
        .query_one(Statement::from_string(
            DatabaseBackend::Postgres,
            format!("SELECT has_table_privilege('{role}', '{table}', '{privilege}') AS held"),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get("", "held").unwrap()
}

#[tokio::test]
async fn reader_can_select_everything_and_mutate_nothing() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let role = "grid_reader_probe";
    access::ensure_read_role(&db, role).await.unwrap();
    access::apply_read_grants(&db, role).await.unwrap();

    for table in ALL_TABLES {
        assert!(
            table_privilege(&db, role, table, "SELECT").await,
            "reader cannot SELECT {table}"
        );
        for privilege in ["INSERT", "UPDATE", "DELETE"] {
            assert!(
                !table_privilege(&db, role, table, privilege).await,
                "reader holds {privilege} on {table}"
            );
        }
    }
}

#[tokio::test]
async fn grants_are_idempotent() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    let role = "grid_reader_probe2";
    access::ensure_read_role(&db, role).await.unwrap();
    access::apply_read_grants(&db, role).await.unwrap();
    access::ensure_read_role(&db, role).await.unwrap();
    access::apply_read_grants(&db, role).await.unwrap();

    assert!(table_privilege(&db, role, "system_demand", "SELECT").await);
}

#[tokio::test]
async fn role_names_are_validated_before_reaching_ddl() {
    let Some(db) = common::try_test_db().await else {
        eprintln!("TEST_DATABASE_URL not set; skipping");
        return;
    };

    for role in ["grid-reader", "Grid_Reader", "reader; DROP TABLE bm_unit"] {
        let err = access::apply_read_grants(&db, role).await.unwrap_err();
        assert!(matches!(err, StoreError::DomainConstraint(_)));
    }
}
