use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FuelType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelType::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FuelType::Ref)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(FuelType::Name).string())
                    .col(
                        ColumnDef::new(FuelType::Interconnector)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(FuelType::Country).string())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Operator::Table)
                    .if_not_exists()
                    // Identity is part of the seed contract, so no auto-increment
                    .col(
                        ColumnDef::new(Operator::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Operator::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Region::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Region::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Region::Operator).integer().not_null())
                    .col(
                        ColumnDef::new(Region::GspGroup)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Region::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_region_operator")
                    .from(Region::Table, Region::Operator)
                    .to(Operator::Table, Operator::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BmUnitType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BmUnitType::Code)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BmUnitType::Description).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Participant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Participant::Ref)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Participant::Name).string())
                    .col(
                        ColumnDef::new(Participant::FirstSeen)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(Participant::LastSeen)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BmUnit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BmUnit::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BmUnit::ElexonRef)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(BmUnit::NgRef).string())
                    .col(ColumnDef::new(BmUnit::Fuel).integer())
                    .col(ColumnDef::new(BmUnit::PartyName).string())
                    .col(ColumnDef::new(BmUnit::UnitType).string())
                    .col(
                        ColumnDef::new(BmUnit::Fpn)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(BmUnit::Name).string())
                    .col(ColumnDef::new(BmUnit::Region).integer())
                    .col(ColumnDef::new(BmUnit::Participant).string())
                    .col(
                        ColumnDef::new(BmUnit::ProdCons)
                            .string()
                            .check(Expr::col(BmUnit::ProdCons).is_in(["producer", "consumer"])),
                    )
                    .col(
                        ColumnDef::new(BmUnit::FirstSeen)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .col(
                        ColumnDef::new(BmUnit::LastSeen)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(SimpleExpr::Keyword(Keyword::CurrentTimestamp)),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_bm_unit_fuel")
                    .from(BmUnit::Table, BmUnit::Fuel)
                    .to(FuelType::Table, FuelType::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_bm_unit_unit_type")
                    .from(BmUnit::Table, BmUnit::UnitType)
                    .to(BmUnitType::Table, BmUnitType::Code)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_bm_unit_region")
                    .from(BmUnit::Table, BmUnit::Region)
                    .to(Region::Table, Region::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_bm_unit_participant")
                    .from(BmUnit::Table, BmUnit::Participant)
                    .to(Participant::Table, Participant::Ref)
                    .to_owned(),
            )
            .await?;

        // The push feed addresses units by their secondary reference
        manager
            .create_index(
                Index::create()
                    .name("idx_bm_unit_ng_ref")
                    .table(BmUnit::Table)
                    .col(BmUnit::NgRef)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(WikidataPlant::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WikidataPlant::WdId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WikidataPlant::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        // One plant per unit; a plant may own several units
        manager
            .create_table(
                Table::create()
                    .table(PlantBmUnit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlantBmUnit::BmUnit)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PlantBmUnit::WdId).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_plant_bm_unit_unit")
                    .from(PlantBmUnit::Table, PlantBmUnit::BmUnit)
                    .to(BmUnit::Table, BmUnit::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_plant_bm_unit_plant")
                    .from(PlantBmUnit::Table, PlantBmUnit::WdId)
                    .to(WikidataPlant::Table, WikidataPlant::WdId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlantBmUnit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WikidataPlant::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BmUnit::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Participant::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BmUnitType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Region::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Operator::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(FuelType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FuelType {
    Table,
    Id,
    Ref,
    Name,
    Interconnector,
    Country,
}

#[derive(DeriveIden)]
enum Operator {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Region {
    Table,
    Id,
    Operator,
    GspGroup,
    Name,
}

#[derive(DeriveIden)]
enum BmUnitType {
    Table,
    Code,
    Description,
}

#[derive(DeriveIden)]
enum Participant {
    Table,
    Ref,
    Name,
    FirstSeen,
    LastSeen,
}

#[derive(DeriveIden)]
enum BmUnit {
    Table,
    Id,
    ElexonRef,
    NgRef,
    Fuel,
    PartyName,
    UnitType,
    Fpn,
    Name,
    Region,
    Participant,
    ProdCons,
    FirstSeen,
    LastSeen,
}

#[derive(DeriveIden)]
enum WikidataPlant {
    Table,
    WdId,
    Name,
}

#[derive(DeriveIden)]
enum PlantBmUnit {
    Table,
    BmUnit,
    WdId,
}
