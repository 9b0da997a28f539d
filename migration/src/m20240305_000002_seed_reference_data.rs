use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// The operator and region enumerations are part of the initial state
// contract: Writers attribute units to regions by GSP group code, so the
// fourteen groups and their owning operators must exist before any ingestion.
const OPERATORS: &[(i32, &str)] = &[
    (1, "UK Power Networks"),
    (2, "National Grid Electricity Distribution"),
    (3, "SP Energy Networks"),
    (4, "Northern Powergrid"),
    (5, "Electricity North West"),
    (6, "Scottish and Southern Electricity Networks"),
];

const REGIONS: &[(i32, i32, &str, &str)] = &[
    (1, 1, "_A", "East England"),
    (2, 2, "_B", "East Midlands"),
    (3, 1, "_C", "London"),
    (4, 3, "_D", "Merseyside and North Wales"),
    (5, 2, "_E", "West Midlands"),
    (6, 4, "_F", "North East England"),
    (7, 5, "_G", "North West England"),
    (8, 6, "_H", "Southern England"),
    (9, 1, "_J", "South East England"),
    (10, 2, "_K", "South Wales"),
    (11, 2, "_L", "South West England"),
    (12, 4, "_M", "Yorkshire"),
    (13, 3, "_N", "South Scotland"),
    (14, 6, "_P", "North Scotland"),
];

const BM_UNIT_TYPES: &[(&str, &str)] = &[
    ("T", "Directly connected unit"),
    ("E", "Embedded unit"),
    ("I", "Interconnector unit"),
    ("G", "Supplier unit (base)"),
    ("S", "Supplier unit (additional)"),
    ("M", "Miscellaneous unit"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert()
            .into_table(Operator::Table)
            .columns([Operator::Id, Operator::Name])
            .to_owned();
        for (id, name) in OPERATORS {
            insert.values_panic([(*id).into(), (*name).into()]);
        }
        manager.exec_stmt(insert).await?;

        let mut insert = Query::insert()
            .into_table(Region::Table)
            .columns([Region::Id, Region::Operator, Region::GspGroup, Region::Name])
            .to_owned();
        for (id, operator, gsp_group, name) in REGIONS {
            insert.values_panic([
                (*id).into(),
                (*operator).into(),
                (*gsp_group).into(),
                (*name).into(),
            ]);
        }
        manager.exec_stmt(insert).await?;

        let mut insert = Query::insert()
            .into_table(BmUnitType::Table)
            .columns([BmUnitType::Code, BmUnitType::Description])
            .to_owned();
        for (code, description) in BM_UNIT_TYPES {
            insert.values_panic([(*code).into(), (*description).into()]);
        }
        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(BmUnitType::Table)
                    .and_where(
                        Expr::col(BmUnitType::Code)
                            .is_in(BM_UNIT_TYPES.iter().map(|(code, _)| *code)),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Region::Table)
                    .and_where(Expr::col(Region::Id).is_in(REGIONS.iter().map(|(id, ..)| *id)))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Operator::Table)
                    .and_where(
                        Expr::col(Operator::Id).is_in(OPERATORS.iter().map(|(id, _)| *id)),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
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
