use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Readers get the stitched series without knowing about the split
        // between the actual and forecast tables. The cutover is recomputed
        // on every read from the current contents of the actual table, so it
        // advances as actuals land; forecast rows at or before the newest
        // actual are shadowed.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE VIEW embedded_generation_blended AS
                SELECT
                    time,
                    solar_generation,
                    solar_capacity,
                    wind_generation,
                    wind_capacity,
                    FALSE AS forecast
                FROM embedded_generation
                UNION ALL
                SELECT
                    time,
                    solar_generation,
                    solar_capacity,
                    wind_generation,
                    wind_capacity,
                    TRUE AS forecast
                FROM embedded_generation_forecast
                WHERE time > COALESCE(
                    (SELECT MAX(time) FROM embedded_generation),
                    '-infinity'::timestamptz
                );
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE VIEW carbon_intensity_blended AS
                SELECT time, intensity, FALSE AS forecast
                FROM carbon_intensity_national
                UNION ALL
                SELECT time, intensity, TRUE AS forecast
                FROM carbon_intensity_national_forecast
                WHERE time > COALESCE(
                    (SELECT MAX(time) FROM carbon_intensity_national),
                    '-infinity'::timestamptz
                );
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS carbon_intensity_blended")
            .await?;

        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS embedded_generation_blended")
            .await?;

        Ok(())
    }
}
