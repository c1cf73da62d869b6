use std::time::Duration;

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::config::Config;

/// Creates the PostgreSQL connection pool for the catalog service.
/// A company write holds its connection for the whole multi-statement
/// transaction, so acquisition is bounded rather than waiting indefinitely.
pub async fn create_pool(config: &Config) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(config.db_pool_size)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&config.database_url)
        .await?;

    info!(
        "PostgreSQL connection pool established (max {} connections)",
        config.db_pool_size
    );
    Ok(pool)
}
