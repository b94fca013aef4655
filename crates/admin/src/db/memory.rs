//! In-memory repositories.
//!
//! Mirror the `PostgreSQL` semantics (auto-increment IDs starting at 1,
//! case-insensitive name ordering) without a database.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use order_tracking_core::{OrderId, OrderTrackingRecord, Shipper, ShipperId, ShipperInput};

use super::{RepositoryError, ShipperRepository, TrackingRepository};

#[derive(Debug, Default)]
struct ShipperTable {
    next_id: i32,
    rows: BTreeMap<ShipperId, Shipper>,
}

/// Shipper repository held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryShipperRepository {
    table: RwLock<ShipperTable>,
}

impl InMemoryShipperRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShipperRepository for InMemoryShipperRepository {
    async fn insert(&self, input: &ShipperInput) -> Result<Shipper, RepositoryError> {
        let mut table = self.table.write().await;
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::Conflict("shipper id sequence exhausted".to_string()))?;

        let now = Utc::now();
        let shipper = Shipper {
            id: ShipperId::new(table.next_id),
            name: input.name.clone(),
            tracking_url: input.tracking_url.clone(),
            status: input.status,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(shipper.id, shipper.clone());

        Ok(shipper)
    }

    async fn update(
        &self,
        id: ShipperId,
        input: &ShipperInput,
    ) -> Result<Option<Shipper>, RepositoryError> {
        let mut table = self.table.write().await;
        let Some(row) = table.rows.get_mut(&id) else {
            return Ok(None);
        };

        row.name.clone_from(&input.name);
        row.tracking_url.clone_from(&input.tracking_url);
        row.status = input.status;
        row.updated_at = Utc::now();

        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: ShipperId) -> Result<bool, RepositoryError> {
        Ok(self.table.write().await.rows.remove(&id).is_some())
    }

    async fn get(&self, id: ShipperId) -> Result<Option<Shipper>, RepositoryError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self, active_only: bool) -> Result<Vec<Shipper>, RepositoryError> {
        let table = self.table.read().await;
        let mut shippers: Vec<Shipper> = table
            .rows
            .values()
            .filter(|s| !active_only || s.is_active())
            .cloned()
            .collect();
        shippers.sort_by_cached_key(|s| (s.name.to_lowercase(), s.id));

        Ok(shippers)
    }

    async fn count(&self) -> Result<i64, RepositoryError> {
        let len = self.table.read().await.rows.len();
        i64::try_from(len).map_err(|e| RepositoryError::DataCorruption(e.to_string()))
    }

    async fn purge(&self) -> Result<u64, RepositoryError> {
        let mut table = self.table.write().await;
        let removed = table.rows.len() as u64;
        table.rows.clear();

        Ok(removed)
    }
}

/// Order tracking repository held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryTrackingRepository {
    records: RwLock<HashMap<OrderId, OrderTrackingRecord>>,
}

impl InMemoryTrackingRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TrackingRepository for InMemoryTrackingRepository {
    async fn load(&self, order_id: OrderId) -> Result<Option<OrderTrackingRecord>, RepositoryError> {
        Ok(self.records.read().await.get(&order_id).cloned())
    }

    async fn store(
        &self,
        order_id: OrderId,
        record: &OrderTrackingRecord,
    ) -> Result<(), RepositoryError> {
        self.records.write().await.insert(order_id, record.clone());
        Ok(())
    }

    async fn clear(&self, order_id: OrderId) -> Result<bool, RepositoryError> {
        Ok(self.records.write().await.remove(&order_id).is_some())
    }

    async fn purge(&self) -> Result<u64, RepositoryError> {
        let mut records = self.records.write().await;
        let removed = records.len() as u64;
        records.clear();

        Ok(removed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use order_tracking_core::ShipperStatus;

    use super::*;

    fn input(name: &str) -> ShipperInput {
        ShipperInput::new(name, "https://t.example/{tracking_number}")
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryShipperRepository::new();
        let first = repo.insert(&input("DHL")).await.unwrap();
        let second = repo.insert(&input("UPS")).await.unwrap();
        assert_eq!(first.id, ShipperId::new(1));
        assert_eq!(second.id, ShipperId::new(2));
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryShipperRepository::new();
        let first = repo.insert(&input("DHL")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        let second = repo.insert(&input("UPS")).await.unwrap();
        assert_eq!(second.id, ShipperId::new(2));
    }

    #[tokio::test]
    async fn test_list_sorted_case_insensitive() {
        let repo = InMemoryShipperRepository::new();
        for name in ["ups", "DHL", "FedEx", "aramex"] {
            repo.insert(&input(name)).await.unwrap();
        }
        let names: Vec<String> = repo
            .list(false)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["aramex", "DHL", "FedEx", "ups"]);
    }

    #[tokio::test]
    async fn test_list_active_only() {
        let repo = InMemoryShipperRepository::new();
        repo.insert(&input("DHL")).await.unwrap();
        repo.insert(&input("UPS").with_status(ShipperStatus::Inactive))
            .await
            .unwrap();
        let active = repo.list(true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "DHL");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryShipperRepository::new();
        let updated = repo.update(ShipperId::new(9), &input("DHL")).await.unwrap();
        assert!(updated.is_none());
    }

    #[tokio::test]
    async fn test_tracking_store_and_clear() {
        let repo = InMemoryTrackingRepository::new();
        let order = OrderId::new(7);
        let record = OrderTrackingRecord::legacy(Some(ShipperId::new(1)), "A1");

        repo.store(order, &record).await.unwrap();
        assert_eq!(repo.load(order).await.unwrap(), Some(record));
        assert!(repo.clear(order).await.unwrap());
        assert!(!repo.clear(order).await.unwrap());
        assert!(repo.load(order).await.unwrap().is_none());
    }
}
