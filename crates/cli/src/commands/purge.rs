//! Remove all tracking data.
//!
//! Deletes every shipper and every order's tracking. Requires `--yes`.

use tracing::{info, warn};

use order_tracking_admin::services::purge_all;

use super::{connect, tracking_store};

/// Purge shippers and order tracking.
///
/// # Errors
///
/// Returns an error if `confirmed` is false or database operations fail.
pub async fn run(confirmed: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !confirmed {
        warn!("Purge deletes all shippers and order tracking");
        return Err("refusing to purge without --yes".into());
    }

    let store = tracking_store(connect().await?);
    let report = purge_all(&store).await?;

    info!("Purge complete!");
    info!("  Shippers removed: {}", report.shippers);
    info!("  Order tracking records removed: {}", report.orders);
    Ok(())
}
