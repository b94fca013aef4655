//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use order_tracking_core::DisplaySettings;

use crate::config::AdminConfig;
use crate::db::{
    InMemoryShipperRepository, InMemoryTrackingRepository, PgShipperRepository,
    PgTrackingRepository,
};
use crate::services::{OrderTrackingStore, ShipperRegistry};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    display: DisplaySettings,
    tracking: OrderTrackingStore,
    pool: Option<PgPool>,
}

impl AppState {
    /// Create state backed by `PostgreSQL`.
    #[must_use]
    pub fn new(config: &AdminConfig, pool: PgPool) -> Self {
        let shippers = ShipperRegistry::new(Arc::new(PgShipperRepository::new(pool.clone())));
        let tracking =
            OrderTrackingStore::new(Arc::new(PgTrackingRepository::new(pool.clone())), shippers);

        Self {
            inner: Arc::new(AppStateInner {
                display: config.display,
                tracking,
                pool: Some(pool),
            }),
        }
    }

    /// Create state backed by in-process storage. Nothing is persisted.
    #[must_use]
    pub fn in_memory(display: DisplaySettings) -> Self {
        let shippers = ShipperRegistry::new(Arc::new(InMemoryShipperRepository::new()));
        let tracking =
            OrderTrackingStore::new(Arc::new(InMemoryTrackingRepository::new()), shippers);

        Self {
            inner: Arc::new(AppStateInner {
                display,
                tracking,
                pool: None,
            }),
        }
    }

    /// Where resolved tracking may be shown.
    #[must_use]
    pub fn display(&self) -> &DisplaySettings {
        &self.inner.display
    }

    #[must_use]
    pub fn tracking(&self) -> &OrderTrackingStore {
        &self.inner.tracking
    }

    #[must_use]
    pub fn shippers(&self) -> &ShipperRegistry {
        self.inner.tracking.shippers()
    }

    /// Database pool, absent for in-memory state.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }
}
