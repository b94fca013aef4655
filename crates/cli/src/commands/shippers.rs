//! Shipper management commands.
//!
//! # Seed File Format
//!
//! ```yaml
//! shippers:
//!   - name: DHL
//!     tracking_url: https://www.dhl.com/en/express/tracking.html?AWB={tracking_number}
//!   - name: PostNL
//!     tracking_url: https://jouw.postnl.nl/track-and-trace/{tracking_number}
//!     status: inactive
//! ```

use std::path::Path;

use tracing::info;

use order_tracking_admin::services::ShipperSeedFile;

use super::{connect, tracking_store};

/// Seed shippers from a file, or the default carriers when no file is given.
///
/// Nothing is written if any shipper already exists.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, an entry fails
/// validation, or database operations fail.
pub async fn seed(file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    // Read and validate YAML before connecting to database
    let seed_file = match file {
        Some(path) => {
            info!(path = %path.display(), "Loading shippers from file");
            let content = tokio::fs::read_to_string(path).await?;
            let parsed: ShipperSeedFile = serde_yaml::from_str(&content)?;
            info!(shippers = parsed.shippers.len(), "Parsed seed file");
            Some(parsed)
        }
        None => None,
    };

    let store = tracking_store(connect().await?);
    let registry = store.shippers();

    let inserted = match seed_file {
        Some(seed_file) => registry.seed_from_file(seed_file).await?,
        None => registry.seed_defaults().await?,
    };

    if inserted == 0 {
        info!("Registry already has shippers, nothing seeded");
    } else {
        info!("Seeded {inserted} shippers");
    }
    Ok(())
}

/// List shippers sorted by name.
///
/// # Errors
///
/// Returns an error if database operations fail.
pub async fn list(active_only: bool) -> Result<(), Box<dyn std::error::Error>> {
    let store = tracking_store(connect().await?);
    let registry = store.shippers();

    let shippers = if active_only {
        registry.list_active().await?
    } else {
        registry.list_all().await?
    };

    info!("Shippers ({})", shippers.len());
    info!("============");
    for shipper in shippers {
        info!(
            "  [{}] {} ({}) {}",
            shipper.id, shipper.name, shipper.status, shipper.tracking_url
        );
    }
    Ok(())
}
