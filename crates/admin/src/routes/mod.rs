//! HTTP route handlers for the tracking admin.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                  - Liveness check
//! GET  /health/ready                            - Database readiness check
//!
//! # Shippers (JSON)
//! GET    /api/shippers[?active=true]            - List shippers sorted by name
//! POST   /api/shippers                          - Create shipper
//! GET    /api/shippers/{id}                     - Shipper detail
//! PUT    /api/shippers/{id}                     - Update shipper
//! DELETE /api/shippers/{id}                     - Delete shipper
//!
//! # Order tracking (JSON)
//! GET    /api/orders/{order_id}/tracking        - Resolved tracking or null
//! PUT    /api/orders/{order_id}/tracking        - Save shipper and numbers
//! DELETE /api/orders/{order_id}/tracking        - Clear tracking
//!
//! # Order tracking (rendered fragments)
//! GET  /orders/{order_id}/tracking/details      - Customer order page section
//! GET  /orders/{order_id}/tracking/email        - Completed-order email block
//! GET  /orders/{order_id}/tracking/column       - Admin order list cell
//! ```

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod orders;
pub mod shippers;

/// Build the application router (without middleware layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(shippers::router())
        .merge(orders::router())
}
