use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const UNIT_SERIES: &[(UnitSeries, UnitSeriesValue)] = &[
    (UnitSeries::StableExportLimit, UnitSeriesValue::ExportLimit),
    (UnitSeries::MaximumExportLimit, UnitSeriesValue::ExportLimit),
    (UnitSeries::MaximumImportLimit, UnitSeriesValue::ImportLimit),
    (UnitSeries::PhysicalNotification, UnitSeriesValue::Level),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, value) in UNIT_SERIES {
            manager
                .create_table(
                    Table::create()
                        .table(*table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(UnitSeriesCol::Time)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(ColumnDef::new(UnitSeriesCol::Unit).integer().not_null())
                        .col(ColumnDef::new(*value).double().not_null())
                        .primary_key(
                            Index::create()
                                .col(UnitSeriesCol::Time)
                                .col(UnitSeriesCol::Unit),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_foreign_key(
                    ForeignKey::create()
                        .name(&format!("fk_{}_unit", table.to_string()))
                        .from(*table, UnitSeriesCol::Unit)
                        .to(BmUnit::Table, BmUnit::Id)
                        .to_owned(),
                )
                .await?;

            // Per-unit history scans run keyed on unit first
            manager
                .create_index(
                    Index::create()
                        .name(&format!("idx_{}_unit_time", table.to_string()))
                        .table(*table)
                        .col(UnitSeriesCol::Unit)
                        .col(UnitSeriesCol::Time)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (table, _) in UNIT_SERIES.iter().rev() {
            manager
                .drop_table(Table::drop().table(*table).to_owned())
                .await?;
        }
        Ok(())
    }
}

#[derive(DeriveIden, Clone, Copy)]
enum UnitSeries {
    StableExportLimit,
    MaximumExportLimit,
    MaximumImportLimit,
    PhysicalNotification,
}

#[derive(DeriveIden, Clone, Copy)]
enum UnitSeriesCol {
    Time,
    Unit,
}

#[derive(DeriveIden, Clone, Copy)]
enum UnitSeriesValue {
    ExportLimit,
    ImportLimit,
    Level,
}

#[derive(DeriveIden)]
enum BmUnit {
    Table,
    Id,
}
