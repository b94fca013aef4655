//! `PostgreSQL` shipper repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use order_tracking_core::{Shipper, ShipperId, ShipperInput, ShipperStatus};

use super::{RepositoryError, ShipperRepository};

// =============================================================================
// Types
// =============================================================================

/// Internal row type for `PostgreSQL` queries.
#[derive(Debug, sqlx::FromRow)]
struct ShipperRow {
    id: ShipperId,
    name: String,
    tracking_url: String,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ShipperRow> for Shipper {
    type Error = RepositoryError;

    fn try_from(row: ShipperRow) -> Result<Self, Self::Error> {
        let status: ShipperStatus = row.status.parse().map_err(|e| {
            RepositoryError::DataCorruption(format!("shipper {}: {e}", row.id))
        })?;

        Ok(Self {
            id: row.id,
            name: row.name,
            tracking_url: row.tracking_url,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

fn into_shippers(rows: Vec<ShipperRow>) -> Result<Vec<Shipper>, RepositoryError> {
    rows.into_iter().map(Shipper::try_from).collect()
}

// =============================================================================
// Repository
// =============================================================================

/// Shipper repository backed by `tracking.shippers`.
#[derive(Debug, Clone)]
pub struct PgShipperRepository {
    pool: PgPool,
}

impl PgShipperRepository {
    /// Create a new shipper repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShipperRepository for PgShipperRepository {
    #[instrument(skip(self, input), fields(name = %input.name))]
    async fn insert(&self, input: &ShipperInput) -> Result<Shipper, RepositoryError> {
        let row = sqlx::query_as::<_, ShipperRow>(
            r"
            INSERT INTO tracking.shippers (name, tracking_url, status)
            VALUES ($1, $2, $3)
            RETURNING id, name, tracking_url, status, created_at, updated_at
            ",
        )
        .bind(&input.name)
        .bind(&input.tracking_url)
        .bind(input.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    #[instrument(skip(self, input))]
    async fn update(
        &self,
        id: ShipperId,
        input: &ShipperInput,
    ) -> Result<Option<Shipper>, RepositoryError> {
        let row = sqlx::query_as::<_, ShipperRow>(
            r"
            UPDATE tracking.shippers
            SET
                name = $2,
                tracking_url = $3,
                status = $4,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, tracking_url, status, created_at, updated_at
            ",
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.tracking_url)
        .bind(input.status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Shipper::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ShipperId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM tracking.shippers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn get(&self, id: ShipperId) -> Result<Option<Shipper>, RepositoryError> {
        let row = sqlx::query_as::<_, ShipperRow>(
            r"
            SELECT id, name, tracking_url, status, created_at, updated_at
            FROM tracking.shippers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Shipper::try_from).transpose()
    }

    async fn list(&self, active_only: bool) -> Result<Vec<Shipper>, RepositoryError> {
        let rows = sqlx::query_as::<_, ShipperRow>(
            r"
            SELECT id, name, tracking_url, status, created_at, updated_at
            FROM tracking.shippers
            WHERE NOT $1 OR status = 'active'
            ORDER BY LOWER(name), id
            ",
        )
        .bind(active_only)
        .fetch_all(&self.pool)
        .await?;

        into_shippers(rows)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tracking.shippers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn purge(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM tracking.shippers")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
