//! Order Tracking Core - shipper and tracking types plus link resolution.
//!
//! This crate provides the types shared by every order tracking component:
//! - `admin` - Repositories, services, rendering and the HTTP adapter
//! - `cli` - Migrations, carrier seeding and cleanup
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Type-safe IDs, shippers, and order tracking records
//! - [`resolver`] - Tracking URL template substitution
//! - [`display`] - Where tracking is shown to customers

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod display;
pub mod resolver;
pub mod types;

pub use display::{CUSTOMER_COMPLETED_ORDER_EMAIL, DisplaySettings, EmailContext};
pub use resolver::{TRACKING_NUMBER_PLACEHOLDER, build_links, resolve, tracking_url};
pub use types::*;
