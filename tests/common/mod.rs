use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};
use std::env;
use tokio::sync::OnceCell;

static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Connect to the test database and bring the schema up to date.
///
/// Returns None when TEST_DATABASE_URL is unset, so the suite can run
/// without a database; the DB-backed tests skip themselves in that case.
/// Migrations run once per test binary however many tests ask.
pub async fn try_test_db() -> Option<DatabaseConnection> {
    let url = env::var("TEST_DATABASE_URL").ok()?;

    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to test DB");

    MIGRATED
        .get_or_init(|| async {
            Migrator::up(&db, None)
                .await
                .expect("Failed to run migrations");
        })
        .await;

    Some(db)
}
