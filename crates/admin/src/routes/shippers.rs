//! Shipper management routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use order_tracking_core::{Shipper, ShipperId, ShipperInput};

use crate::error::AppError;
use crate::state::AppState;

/// Build the shipper router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/shippers", get(index).post(create))
        .route(
            "/api/shippers/{id}",
            get(show).put(update).delete(destroy),
        )
}

#[derive(Debug, Default, Deserialize)]
pub struct ShippersQuery {
    /// Only list active shippers.
    #[serde(default)]
    pub active: bool,
}

/// GET /api/shippers - All shippers, or only active ones.
#[instrument(skip(state))]
async fn index(
    State(state): State<AppState>,
    Query(query): Query<ShippersQuery>,
) -> Result<Json<Vec<Shipper>>, AppError> {
    let shippers = if query.active {
        state.shippers().list_active().await?
    } else {
        state.shippers().list_all().await?
    };
    Ok(Json(shippers))
}

/// POST /api/shippers - Create a shipper.
#[instrument(skip(state, input))]
async fn create(
    State(state): State<AppState>,
    Json(input): Json<ShipperInput>,
) -> Result<(StatusCode, Json<Shipper>), AppError> {
    let shipper = state.shippers().upsert(input, None).await?;
    Ok((StatusCode::CREATED, Json(shipper)))
}

/// GET /api/shippers/{id}
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(id): Path<ShipperId>,
) -> Result<Json<Shipper>, AppError> {
    state
        .shippers()
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("shipper {id}")))
}

/// PUT /api/shippers/{id} - Replace a shipper's fields.
#[instrument(skip(state, input))]
async fn update(
    State(state): State<AppState>,
    Path(id): Path<ShipperId>,
    Json(input): Json<ShipperInput>,
) -> Result<Json<Shipper>, AppError> {
    let shipper = state.shippers().upsert(input, Some(id)).await?;
    Ok(Json(shipper))
}

/// DELETE /api/shippers/{id}
///
/// Orders referencing the shipper keep the reference and resolve to no tracking.
#[instrument(skip(state))]
async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<ShipperId>,
) -> Result<StatusCode, AppError> {
    if state.shippers().delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("shipper {id}")))
    }
}
