use sqlx::{migrate::MigrateError, postgres::PgPoolOptions, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Open the shared connection pool. Every handler checks a connection out for
/// a single statement, so `max_connections` bounds concurrent queries.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .test_before_acquire(true)
        .connect(&config.url)
        .await?;

    info!(
        "Database connection pool initialized with {} min and {} max connections",
        config.min_connections, config.max_connections
    );
    Ok(pool)
}

/// Apply the embedded `wishes` schema.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
