//! Business logic services.
//!
//! - [`ShipperRegistry`] - Validated CRUD over shippers
//! - [`OrderTrackingStore`] - Per-order tracking numbers and link resolution

pub mod order_tracking;
pub mod shipper_registry;

pub use order_tracking::{OrderTrackingStore, PurgeReport, purge_all};
pub use shipper_registry::{RegistryError, ShipperRegistry, ShipperSeedFile};
