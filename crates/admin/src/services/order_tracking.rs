//! Order tracking service.
//!
//! Stores the shipper and tracking numbers attached to an order and resolves
//! them into links at read time. Missing data is never an error: an order
//! without a shipper, without numbers, or pointing at a deleted shipper simply
//! has no tracking.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use order_tracking_core::{
    OrderId, OrderTrackingRecord, ResolvedTracking, ShipperId, TrackingSummary, resolve,
};

use super::shipper_registry::{RegistryError, ShipperRegistry};
use crate::db::{RepositoryError, TrackingRepository};

/// Per-order tracking storage and resolution.
#[derive(Clone)]
pub struct OrderTrackingStore {
    repo: Arc<dyn TrackingRepository>,
    shippers: ShipperRegistry,
}

impl std::fmt::Debug for OrderTrackingStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderTrackingStore")
            .field("shippers", &self.shippers)
            .finish_non_exhaustive()
    }
}

impl OrderTrackingStore {
    #[must_use]
    pub fn new(repo: Arc<dyn TrackingRepository>, shippers: ShipperRegistry) -> Self {
        Self { repo, shippers }
    }

    /// The registry used to resolve shipper references.
    #[must_use]
    pub const fn shippers(&self) -> &ShipperRegistry {
        &self.shippers
    }

    /// Save the tracking submitted for an order.
    ///
    /// Numbers are trimmed and empty entries dropped. If none remain the
    /// order's record is cleared. The shipper ID is not checked against the
    /// registry; a missing shipper is handled when reading.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if storage fails.
    #[instrument(skip(self, raw_numbers), fields(submitted = raw_numbers.len()))]
    pub async fn save<S: AsRef<str> + Sync>(
        &self,
        order_id: OrderId,
        shipper_id: Option<ShipperId>,
        raw_numbers: &[S],
    ) -> Result<(), RepositoryError> {
        let Some(record) = OrderTrackingRecord::from_input(shipper_id, raw_numbers) else {
            let cleared = self.repo.clear(order_id).await?;
            info!(cleared, "No tracking numbers submitted, cleared order tracking");
            return Ok(());
        };

        self.repo.store(order_id, &record).await?;
        info!(
            shipper_id = ?record.shipper_id,
            numbers = record.numbers().len(),
            "Saved order tracking"
        );
        Ok(())
    }

    /// Remove all tracking from an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if storage fails.
    #[instrument(skip(self))]
    pub async fn clear(&self, order_id: OrderId) -> Result<bool, RepositoryError> {
        self.repo.clear(order_id).await
    }

    /// Stored record for an order, exactly as persisted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if storage fails.
    pub async fn record(&self, order_id: OrderId) -> Result<Option<OrderTrackingRecord>, RepositoryError> {
        self.repo.load(order_id).await
    }

    /// Resolve the tracking links for an order.
    ///
    /// Returns `None` when the order has no shipper, no numbers, or references
    /// a shipper that no longer exists.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    #[instrument(skip(self))]
    pub async fn get_tracking_info(
        &self,
        order_id: OrderId,
    ) -> Result<Option<ResolvedTracking>, RegistryError> {
        Ok(self.summary(order_id).await?.tracking().cloned())
    }

    /// Tracking state of an order for the admin order list.
    ///
    /// Unlike [`Self::get_tracking_info`], a dangling shipper reference is
    /// reported as [`TrackingSummary::InvalidShipper`].
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Repository` if storage fails.
    #[instrument(skip(self))]
    pub async fn summary(&self, order_id: OrderId) -> Result<TrackingSummary, RegistryError> {
        let Some(record) = self.repo.load(order_id).await? else {
            return Ok(TrackingSummary::NoTracking);
        };

        let numbers = record.numbers();
        let Some(shipper_id) = record.shipper() else {
            return Ok(TrackingSummary::NoTracking);
        };
        if numbers.is_empty() {
            return Ok(TrackingSummary::NoTracking);
        }

        let Some(shipper) = self.shippers.get_by_id(shipper_id).await? else {
            debug!(%shipper_id, "Order references a deleted shipper");
            return Ok(TrackingSummary::InvalidShipper);
        };

        Ok(TrackingSummary::Tracked(resolve(&shipper, &numbers)))
    }

    pub(crate) async fn purge(&self) -> Result<u64, RepositoryError> {
        self.repo.purge().await
    }
}

/// Counts of rows removed by [`purge_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurgeReport {
    pub shippers: u64,
    pub orders: u64,
}

/// Remove every shipper and every order tracking record.
///
/// # Errors
///
/// Returns `RegistryError::Repository` if storage fails.
#[instrument(skip(store))]
pub async fn purge_all(store: &OrderTrackingStore) -> Result<PurgeReport, RegistryError> {
    let orders = store.purge().await?;
    let shippers = store.shippers.purge().await?;

    info!(shippers, orders, "Purged all tracking data");
    Ok(PurgeReport { shippers, orders })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use order_tracking_core::{ShipperInput, ShipperStatus};

    use super::*;
    use crate::db::{InMemoryShipperRepository, InMemoryTrackingRepository};

    fn store() -> OrderTrackingStore {
        let registry = ShipperRegistry::new(Arc::new(InMemoryShipperRepository::new()));
        OrderTrackingStore::new(Arc::new(InMemoryTrackingRepository::new()), registry)
    }

    async fn dhl(store: &OrderTrackingStore) -> ShipperId {
        store
            .shippers()
            .upsert(
                ShipperInput::new("DHL", "https://dhl.example/track?id={tracking_number}"),
                None,
            )
            .await
            .unwrap()
            .id
    }

    #[tokio::test]
    async fn test_save_then_resolve() {
        let store = store();
        let shipper = dhl(&store).await;
        let order = OrderId::new(1);

        store
            .save(order, Some(shipper), &[" AB 123 ", "", "CD#456"])
            .await
            .unwrap();

        let tracking = store.get_tracking_info(order).await.unwrap().unwrap();
        assert_eq!(tracking.shipper_name, "DHL");
        assert_eq!(tracking.tracking_numbers(), vec!["AB 123", "CD#456"]);
        assert_eq!(
            tracking.primary().unwrap().tracking_url,
            "https://dhl.example/track?id=AB%20123"
        );
    }

    #[tokio::test]
    async fn test_save_writes_legacy_slot() {
        let store = store();
        let shipper = dhl(&store).await;
        let order = OrderId::new(1);

        store
            .save(order, Some(shipper), &["  ", "FIRST", "SECOND"])
            .await
            .unwrap();

        let record = store.record(order).await.unwrap().unwrap();
        assert_eq!(record.legacy_tracking_number.as_deref(), Some("FIRST"));
    }

    #[tokio::test]
    async fn test_save_empty_clears_record() {
        let store = store();
        let shipper = dhl(&store).await;
        let order = OrderId::new(1);

        store.save(order, Some(shipper), &["A1"]).await.unwrap();
        store.save(order, Some(shipper), &["", " "]).await.unwrap();

        assert!(store.record(order).await.unwrap().is_none());
        assert!(store.get_tracking_info(order).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_no_shipper_means_no_tracking() {
        let store = store();
        let order = OrderId::new(1);

        store.save(order, None, &["A1"]).await.unwrap();
        assert!(store.get_tracking_info(order).await.unwrap().is_none());
        assert_eq!(store.summary(order).await.unwrap(), TrackingSummary::NoTracking);

        store.save(order, Some(ShipperId::new(0)), &["A1"]).await.unwrap();
        assert!(store.record(order).await.unwrap().unwrap().shipper_id.is_none());
    }

    #[tokio::test]
    async fn test_deleted_shipper_resolves_to_none() {
        let store = store();
        let shipper = dhl(&store).await;
        let order = OrderId::new(1);

        store.save(order, Some(shipper), &["ABC"]).await.unwrap();
        store.shippers().delete(shipper).await.unwrap();

        assert!(store.get_tracking_info(order).await.unwrap().is_none());
        assert_eq!(
            store.summary(order).await.unwrap(),
            TrackingSummary::InvalidShipper
        );
    }

    #[tokio::test]
    async fn test_inactive_shipper_still_resolves() {
        let store = store();
        let shipper = dhl(&store).await;
        let order = OrderId::new(1);

        store.save(order, Some(shipper), &["ABC"]).await.unwrap();
        store
            .shippers()
            .upsert(
                ShipperInput::new("DHL", "https://dhl.example/{tracking_number}")
                    .with_status(ShipperStatus::Inactive),
                Some(shipper),
            )
            .await
            .unwrap();

        let tracking = store.get_tracking_info(order).await.unwrap().unwrap();
        assert_eq!(tracking.primary().unwrap().tracking_url, "https://dhl.example/ABC");
    }

    #[tokio::test]
    async fn test_purge_all() {
        let store = store();
        let shipper = dhl(&store).await;
        store.save(OrderId::new(1), Some(shipper), &["A"]).await.unwrap();
        store.save(OrderId::new(2), Some(shipper), &["B"]).await.unwrap();

        let report = purge_all(&store).await.unwrap();
        assert_eq!(report, PurgeReport { shippers: 1, orders: 2 });
        assert!(store.shippers().list_all().await.unwrap().is_empty());
        assert!(store.record(OrderId::new(1)).await.unwrap().is_none());
    }
}
