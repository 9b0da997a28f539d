use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GenerationByFuelTypeHh::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GenerationByFuelTypeHh::Time)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenerationByFuelTypeHh::FuelType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenerationByFuelTypeHh::SettlementPeriod)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenerationByFuelTypeHh::Generation)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GenerationByFuelTypeHh::Time)
                            .col(GenerationByFuelTypeHh::FuelType),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_generation_hh_fuel_type")
                    .from(GenerationByFuelTypeHh::Table, GenerationByFuelTypeHh::FuelType)
                    .to(FuelType::Table, FuelType::Id)
                    .to_owned(),
            )
            .await?;

        // Per-fuel history scans run keyed on fuel first
        manager
            .create_index(
                Index::create()
                    .name("idx_generation_hh_fuel_time")
                    .table(GenerationByFuelTypeHh::Table)
                    .col(GenerationByFuelTypeHh::FuelType)
                    .col(GenerationByFuelTypeHh::Time)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(GenerationByFuelTypeInst::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GenerationByFuelTypeInst::Time)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenerationByFuelTypeInst::FuelType)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenerationByFuelTypeInst::Generation)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GenerationByFuelTypeInst::Time)
                            .col(GenerationByFuelTypeInst::FuelType),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_generation_inst_fuel_type")
                    .from(
                        GenerationByFuelTypeInst::Table,
                        GenerationByFuelTypeInst::FuelType,
                    )
                    .to(FuelType::Table, FuelType::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_generation_inst_fuel_time")
                    .table(GenerationByFuelTypeInst::Table)
                    .col(GenerationByFuelTypeInst::FuelType)
                    .col(GenerationByFuelTypeInst::Time)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PvLive::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PvLive::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PvLive::PvGeneration).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(embedded_generation_table(EmbeddedGeneration::Table))
            .await?;
        manager
            .create_table(embedded_generation_table(EmbeddedGenerationForecast::Table))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(EmbeddedGenerationForecast::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(EmbeddedGeneration::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PvLive::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(GenerationByFuelTypeInst::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(GenerationByFuelTypeHh::Table).to_owned())
            .await
    }
}

// The actual and forecast tables share one shape so the blending view can
// stitch them.
fn embedded_generation_table<T: Iden + Copy + 'static>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(EmbeddedGeneration::Time)
                .timestamp_with_time_zone()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(EmbeddedGeneration::SolarGeneration)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(EmbeddedGeneration::SolarCapacity)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(EmbeddedGeneration::WindGeneration)
                .integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(EmbeddedGeneration::WindCapacity)
                .integer()
                .not_null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum FuelType {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum GenerationByFuelTypeHh {
    Table,
    Time,
    FuelType,
    SettlementPeriod,
    Generation,
}

#[derive(DeriveIden)]
enum GenerationByFuelTypeInst {
    Table,
    Time,
    FuelType,
    Generation,
}

#[derive(DeriveIden)]
enum PvLive {
    Table,
    Time,
    PvGeneration,
}

#[derive(DeriveIden, Clone, Copy)]
enum EmbeddedGeneration {
    Table,
    Time,
    SolarGeneration,
    SolarCapacity,
    WindGeneration,
    WindCapacity,
}

#[derive(DeriveIden, Clone, Copy)]
enum EmbeddedGenerationForecast {
    Table,
}
