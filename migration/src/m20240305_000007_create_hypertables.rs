use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{ConnectionTrait, Statement};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Every fact table gets its own hypertable so chunking, retention and
// compression can be tuned per signal. On a plain PostgreSQL instance the
// tables stay ordinary; query semantics are identical either way.
const FACT_TABLES: &[&str] = &[
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

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        let timescale = conn
            .query_one(Statement::from_string(
                manager.get_database_backend(),
                "SELECT extname FROM pg_extension WHERE extname = 'timescaledb'",
            ))
            .await?;

        if timescale.is_none() {
            // Uniqueness and append semantics do not depend on chunking, so
            // this is safe to skip.
            return Ok(());
        }

        for table in FACT_TABLES {
            conn.execute_unprepared(&format!(
                "SELECT create_hypertable('{table}', 'time', if_not_exists => TRUE, migrate_data => TRUE)"
            ))
            .await?;
        }

        Ok(())
    }

    async fn down(&self, _manager: &SchemaManager) -> Result<(), DbErr> {
        // Hypertables are dropped with their tables; nothing to undo here.
        Ok(())
    }
}
