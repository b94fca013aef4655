//! `PostgreSQL` order tracking repository.
//!
//! One row per host order. `tracking_number` is the legacy single-number
//! column and is written alongside `tracking_numbers`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use order_tracking_core::{OrderId, OrderTrackingRecord, ShipperId};

use super::{RepositoryError, TrackingRepository};

/// Internal row type for `PostgreSQL` queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderTrackingRow {
    tracking_shipper_id: Option<ShipperId>,
    tracking_numbers: Option<Vec<String>>,
    tracking_number: Option<String>,
}

impl From<OrderTrackingRow> for OrderTrackingRecord {
    fn from(row: OrderTrackingRow) -> Self {
        Self {
            shipper_id: row.tracking_shipper_id,
            tracking_numbers: row.tracking_numbers,
            legacy_tracking_number: row.tracking_number,
        }
    }
}

/// Tracking repository backed by `tracking.order_tracking`.
#[derive(Debug, Clone)]
pub struct PgTrackingRepository {
    pool: PgPool,
}

impl PgTrackingRepository {
    /// Create a new order tracking repository.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TrackingRepository for PgTrackingRepository {
    async fn load(&self, order_id: OrderId) -> Result<Option<OrderTrackingRecord>, RepositoryError> {
        let row = sqlx::query_as::<_, OrderTrackingRow>(
            r"
            SELECT tracking_shipper_id, tracking_numbers, tracking_number
            FROM tracking.order_tracking
            WHERE order_id = $1
            ",
        )
        .bind(order_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(OrderTrackingRecord::from))
    }

    #[instrument(skip(self, record))]
    async fn store(
        &self,
        order_id: OrderId,
        record: &OrderTrackingRecord,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO tracking.order_tracking (
                order_id,
                tracking_shipper_id,
                tracking_numbers,
                tracking_number
            )
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (order_id) DO UPDATE SET
                tracking_shipper_id = EXCLUDED.tracking_shipper_id,
                tracking_numbers = EXCLUDED.tracking_numbers,
                tracking_number = EXCLUDED.tracking_number,
                updated_at = NOW()
            ",
        )
        .bind(order_id)
        .bind(record.shipper_id)
        .bind(record.tracking_numbers.as_deref())
        .bind(record.legacy_tracking_number.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn clear(&self, order_id: OrderId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM tracking.order_tracking WHERE order_id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn purge(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM tracking.order_tracking")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
