pub use sea_orm_migration::prelude::*;

mod m20240305_000001_create_reference_tables;
mod m20240305_000002_seed_reference_data;
mod m20240305_000003_create_demand_series;
mod m20240305_000004_create_generation_series;
mod m20240305_000005_create_grid_series;
mod m20240305_000006_create_unit_series;
mod m20240305_000007_create_hypertables;
mod m20240305_000008_create_blended_views;
mod m20240305_000009_create_reader_role;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240305_000001_create_reference_tables::Migration),
            Box::new(m20240305_000002_seed_reference_data::Migration),
            Box::new(m20240305_000003_create_demand_series::Migration),
            Box::new(m20240305_000004_create_generation_series::Migration),
            Box::new(m20240305_000005_create_grid_series::Migration),
            Box::new(m20240305_000006_create_unit_series::Migration),
            Box::new(m20240305_000007_create_hypertables::Migration),
            Box::new(m20240305_000008_create_blended_views::Migration),
            Box::new(m20240305_000009_create_reader_role::Migration),
        ]
    }
}
