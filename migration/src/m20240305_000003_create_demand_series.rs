use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SystemDemand::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SystemDemand::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SystemDemand::Demand).integer().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InitialDemandOutturn::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InitialDemandOutturn::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InitialDemandOutturn::SettlementDate)
                            .date()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InitialDemandOutturn::SettlementPeriod)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InitialDemandOutturn::DemandOutturn)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InitialDemandOutturn::TransmissionDemandOutturn)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DemandForecast::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DemandForecast::Time)
                            .timestamp_with_time_zone()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DemandForecast::SettlementPeriod)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DemandForecast::TransmissionDemand)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DemandForecast::NationalDemand)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DemandForecast::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(InitialDemandOutturn::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SystemDemand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SystemDemand {
    Table,
    Time,
    Demand,
}

#[derive(DeriveIden)]
enum InitialDemandOutturn {
    Table,
    Time,
    SettlementDate,
    SettlementPeriod,
    DemandOutturn,
    TransmissionDemandOutturn,
}

#[derive(DeriveIden)]
enum DemandForecast {
    Table,
    Time,
    SettlementPeriod,
    TransmissionDemand,
    NationalDemand,
}
