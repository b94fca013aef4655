//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! ot-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `TRACKING_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! Migrations live in `crates/admin/migrations/`.

use secrecy::ExposeSecret;
use sqlx::PgPool;
use thiserror::Error;

use order_tracking_admin::config::{ConfigError, database_url_from_env};

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Run tracking database migrations.
///
/// # Errors
///
/// Returns `MigrationError` if the URL is missing, the connection fails, or a
/// migration fails.
pub async fn run() -> Result<(), MigrationError> {
    dotenvy::dotenv().ok();

    let database_url = database_url_from_env()?;

    tracing::info!("Connecting to tracking database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Running tracking migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Tracking migrations complete!");
    Ok(())
}
