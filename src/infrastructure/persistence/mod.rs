//! Storage backends and the backend factory.

mod memory_store;
mod pg_short_url_repository;
mod pg_stats_repository;

pub use memory_store::MemoryStore;
pub use pg_short_url_repository::PgShortUrlRepository;
pub use pg_stats_repository::PgStatsRepository;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;

use crate::config::{Config, StorageConfig};
use crate::domain::repositories::{ShortUrlRepository, StatsRepository};

/// Repository handles produced by the backend factory.
pub struct Repositories {
    pub short_urls: Arc<dyn ShortUrlRepository>,
    pub stats: Arc<dyn StatsRepository>,
}

/// Connects the configured storage backend and returns its repositories.
///
/// For PostgreSQL this builds the connection pool with the configured
/// bounds, runs pending migrations, and hands both repositories the same
/// pool. The in-memory backend shares one [`MemoryStore`] between both
/// contracts.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn connect(config: &Config) -> Result<Repositories> {
    match &config.storage {
        StorageConfig::Postgres { database_url } => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let pool = Arc::new(pool);
            Ok(Repositories {
                short_urls: Arc::new(PgShortUrlRepository::new(pool.clone())),
                stats: Arc::new(PgStatsRepository::new(pool)),
            })
        }
        StorageConfig::Memory => {
            tracing::info!("Using in-memory storage, state will not survive a restart");
            let store = Arc::new(MemoryStore::new());
            Ok(Repositories {
                short_urls: store.clone(),
                stats: store,
            })
        }
    }
}
