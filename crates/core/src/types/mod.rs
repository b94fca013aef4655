//! Core types for order tracking.
//!
//! This module provides type-safe wrappers for shippers and per-order tracking.

pub mod id;
pub mod shipper;
pub mod status;
pub mod tracking;

pub use id::*;
pub use shipper::{DEFAULT_SHIPPERS, DefaultShipper, Shipper, ShipperInput, ValidationError};
pub use status::ShipperStatus;
pub use tracking::{
    OrderTrackingRecord, ResolvedTracking, TrackingItem, TrackingSummary,
    sanitize_tracking_numbers,
};
