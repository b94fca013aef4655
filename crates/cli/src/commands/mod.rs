//! CLI subcommands.

use std::sync::Arc;

use sqlx::PgPool;

use order_tracking_admin::config::database_url_from_env;
use order_tracking_admin::db::{self, PgShipperRepository, PgTrackingRepository};
use order_tracking_admin::services::{OrderTrackingStore, ShipperRegistry};

pub mod migrate;
pub mod purge;
pub mod shippers;

/// Connect using `TRACKING_DATABASE_URL` (or `DATABASE_URL`).
async fn connect() -> Result<PgPool, Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = database_url_from_env()?;
    let pool = db::create_pool(&database_url).await?;
    tracing::info!("Connected to database");
    Ok(pool)
}

fn tracking_store(pool: PgPool) -> OrderTrackingStore {
    let shippers = ShipperRegistry::new(Arc::new(PgShipperRepository::new(pool.clone())));
    OrderTrackingStore::new(Arc::new(PgTrackingRepository::new(pool)), shippers)
}
