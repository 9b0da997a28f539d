use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Frequency::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Frequency::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Frequency::Frequency).double().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(carbon_intensity_table(CarbonIntensityNational::Table))
            .await?;
        manager
            .create_table(carbon_intensity_table(
                CarbonIntensityNationalForecast::Table,
            ))
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SystemWarning::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemWarning::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SystemWarning::Warning).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LolpDm::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(LolpDm::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(LolpDm::LossOfLoadProbability)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(LolpDm::DeratedMargin).double().not_null())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LolpDm::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SystemWarning::Table).to_owned())
            .await?;
        manager
            .drop_table(
                Table::drop()
                    .table(CarbonIntensityNationalForecast::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(CarbonIntensityNational::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Frequency::Table).to_owned())
            .await
    }
}

fn carbon_intensity_table<T: Iden + Copy + 'static>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(CarbonIntensityNational::Time)
                .timestamp_with_time_zone()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(CarbonIntensityNational::Intensity)
                .integer()
                .not_null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Frequency {
    Table,
    Time,
    Frequency,
}

#[derive(DeriveIden, Clone, Copy)]
enum CarbonIntensityNational {
    Table,
    Time,
    Intensity,
}

#[derive(DeriveIden, Clone, Copy)]
enum CarbonIntensityNationalForecast {
    Table,
}

#[derive(DeriveIden)]
enum SystemWarning {
    Table,
    Time,
    Warning,
}

#[derive(DeriveIden)]
enum LolpDm {
    Table,
    Time,
    LossOfLoadProbability,
    DeratedMargin,
}
