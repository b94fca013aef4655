//! Storage for shippers and per-order tracking.
//!
//! # Tables (`tracking` schema)
//!
//! - `shippers` - Carrier name, tracking URL template and status
//! - `order_tracking` - Shipper reference and tracking numbers per host order
//!
//! Services talk to storage through the [`ShipperRepository`] and
//! [`TrackingRepository`] traits. `PostgreSQL` implementations back the admin
//! binary; in-memory implementations back tests and embedded hosts.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/admin/migrations/` and run via:
//! ```bash
//! cargo run -p order-tracking-cli -- migrate
//! ```

pub mod memory;
pub mod order_tracking;
pub mod shippers;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use order_tracking_core::{OrderId, OrderTrackingRecord, Shipper, ShipperId, ShipperInput};

pub use memory::{InMemoryShipperRepository, InMemoryTrackingRepository};
pub use order_tracking::PgTrackingRepository;
pub use shippers::PgShipperRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation.
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Persistence for shipper rows.
///
/// Inputs reaching the repository are already validated.
#[async_trait]
pub trait ShipperRepository: Send + Sync {
    /// Insert a row and return it with its assigned ID.
    async fn insert(&self, input: &ShipperInput) -> Result<Shipper, RepositoryError>;

    /// Overwrite an existing row. Returns `None` if the ID does not exist.
    async fn update(
        &self,
        id: ShipperId,
        input: &ShipperInput,
    ) -> Result<Option<Shipper>, RepositoryError>;

    /// Remove a row. Returns whether one existed.
    async fn delete(&self, id: ShipperId) -> Result<bool, RepositoryError>;

    async fn get(&self, id: ShipperId) -> Result<Option<Shipper>, RepositoryError>;

    /// All rows, or only active ones, ordered by name (case-insensitive) then ID.
    async fn list(&self, active_only: bool) -> Result<Vec<Shipper>, RepositoryError>;

    async fn count(&self) -> Result<i64, RepositoryError>;

    /// Remove every row. Returns the number removed.
    async fn purge(&self) -> Result<u64, RepositoryError>;
}

/// Persistence for per-order tracking records.
#[async_trait]
pub trait TrackingRepository: Send + Sync {
    async fn load(&self, order_id: OrderId) -> Result<Option<OrderTrackingRecord>, RepositoryError>;

    /// Replace the record for an order.
    async fn store(
        &self,
        order_id: OrderId,
        record: &OrderTrackingRecord,
    ) -> Result<(), RepositoryError>;

    /// Remove the record for an order. Returns whether one existed.
    async fn clear(&self, order_id: OrderId) -> Result<bool, RepositoryError>;

    /// Remove every record. Returns the number removed.
    async fn purge(&self) -> Result<u64, RepositoryError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Arguments
///
/// * `database_url` - `PostgreSQL` connection string (wrapped in `SecretString`)
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
