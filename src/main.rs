use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridstore::services::access;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gridstore=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    // Connect to database
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    tracing::info!("Connecting to database...");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    // Run migrations
    tracing::info!("Running migrations...");
    migration::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    // Re-apply read grants so the reader covers any tables the migrations
    // just added
    let reader_role =
        env::var("GRID_READER_ROLE").unwrap_or_else(|_| access::DEFAULT_READER_ROLE.to_string());
    access::ensure_read_role(&db, &reader_role)
        .await
        .expect("Failed to create reader role");
    access::apply_read_grants(&db, &reader_role)
        .await
        .expect("Failed to apply read grants");

    tracing::info!("Schema is up to date");
}
