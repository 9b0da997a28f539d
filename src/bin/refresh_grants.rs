//! Re-apply the read-only grant after a schema change.
//!
//! PostgreSQL grants cover the tables that exist when they run, so any
//! migration adding a table must be followed by this step or the reader
//! loses sight of the new table.

use sea_orm::Database;
use std::env;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridstore::services::access;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,gridstore=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    let reader_role =
        env::var("GRID_READER_ROLE").unwrap_or_else(|_| access::DEFAULT_READER_ROLE.to_string());

    access::ensure_read_role(&db, &reader_role)
        .await
        .expect("Failed to create reader role");
    access::apply_read_grants(&db, &reader_role)
        .await
        .expect("Failed to apply read grants");
}
