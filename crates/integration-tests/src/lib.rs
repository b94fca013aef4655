//! Integration tests for order tracking.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p order-tracking-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `tracking_flow` - Registry and store behaviour end to end
//! - `admin_routes` - HTTP routes driven through the router without a socket
//!
//! Everything runs against in-memory repositories; no database is needed.

use std::sync::Arc;

use order_tracking_admin::db::{InMemoryShipperRepository, InMemoryTrackingRepository};
use order_tracking_admin::services::{OrderTrackingStore, ShipperRegistry};

/// Tracking store plus direct access to its order storage.
pub struct TestContext {
    pub store: OrderTrackingStore,
    /// The store's backing repository, for writing records the store itself
    /// would never produce.
    pub tracking_repo: Arc<InMemoryTrackingRepository>,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        let tracking_repo = Arc::new(InMemoryTrackingRepository::new());
        let registry = ShipperRegistry::new(Arc::new(InMemoryShipperRepository::new()));
        let store = OrderTrackingStore::new(tracking_repo.clone(), registry);
        Self {
            store,
            tracking_repo,
        }
    }

    #[must_use]
    pub fn shippers(&self) -> &ShipperRegistry {
        self.store.shippers()
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}
