//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresPostRepository` - the `posts` collection
//! - `PostgresVolunteerRequestRepository` - the `requests` collection,
//!   including the transactional apply
//! - `connect` / `migrate` - pool setup and schema migration at startup

mod post_repository;
mod volunteer_request_repository;

pub use post_repository::PostgresPostRepository;
pub use volunteer_request_repository::PostgresVolunteerRequestRepository;

use std::path::Path;

use sqlx::migrate::Migrator;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

/// Opens the connection pool described by `config`.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseSetupError> {
    config
        .pool_options()
        .connect(&config.url)
        .await
        .map_err(DatabaseSetupError::Unavailable)
}

/// Applies the SQL migrations found in `dir`.
pub async fn migrate(pool: &PgPool, dir: impl AsRef<Path>) -> Result<(), DatabaseSetupError> {
    let migrator = Migrator::new(dir.as_ref())
        .await
        .map_err(DatabaseSetupError::MigrationFailed)?;
    migrator
        .run(pool)
        .await
        .map_err(DatabaseSetupError::MigrationFailed)?;
    tracing::info!(dir = %dir.as_ref().display(), "Database migrations applied");
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum DatabaseSetupError {
    #[error("error occurred while attempting database migration: {0}")]
    MigrationFailed(sqlx::migrate::MigrateError),

    #[error("unable to perform initial connection and check of the database: {0}")]
    Unavailable(sqlx::Error),
}
