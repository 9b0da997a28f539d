use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Initial grant for the read-only principal. The grant covers tables that
// exist when it runs and nothing created afterwards; later migrations must
// be followed by a re-grant (see the refresh_grants binary).
const READER_ROLE: &str = "grid_reader";

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(&format!(
            r#"
            DO $$
            BEGIN
                IF NOT EXISTS (SELECT FROM pg_roles WHERE rolname = '{READER_ROLE}') THEN
                    CREATE ROLE {READER_ROLE} LOGIN;
                END IF;
            END
            $$;
            "#
        ))
        .await?;

        conn.execute_unprepared(&format!("GRANT USAGE ON SCHEMA public TO {READER_ROLE}"))
            .await?;
        conn.execute_unprepared(&format!(
            "GRANT SELECT ON ALL TABLES IN SCHEMA public TO {READER_ROLE}"
        ))
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let conn = manager.get_connection();

        conn.execute_unprepared(&format!(
            "REVOKE SELECT ON ALL TABLES IN SCHEMA public FROM {READER_ROLE}"
        ))
        .await?;
        conn.execute_unprepared(&format!(
            "REVOKE USAGE ON SCHEMA public FROM {READER_ROLE}"
        ))
        .await?;

        // The role itself is left in place: it may hold grants in other
        // databases on the same cluster.
        Ok(())
    }
}
