//! Order tracking routes.
//!
//! JSON endpoints used by the order edit screen, and the rendered fragments
//! the host inserts into the customer order page, the completed-order email
//! and the admin order list.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use tracing::instrument;

use order_tracking_core::{EmailContext, OrderId, ResolvedTracking, ShipperId};

use crate::error::AppError;
use crate::render;
use crate::state::AppState;

/// Build the order tracking router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/orders/{order_id}/tracking",
            get(show).put(save).delete(clear),
        )
        .route("/orders/{order_id}/tracking/details", get(details))
        .route("/orders/{order_id}/tracking/email", get(email))
        .route("/orders/{order_id}/tracking/column", get(column))
}

/// Tracking submitted from the order edit screen.
#[derive(Debug, Deserialize)]
pub struct TrackingInput {
    #[serde(default)]
    pub shipper_id: Option<ShipperId>,
    #[serde(default)]
    pub tracking_numbers: Vec<String>,
}

/// GET /api/orders/{order_id}/tracking - Resolved tracking, `null` when none.
#[instrument(skip(state))]
async fn show(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<Option<ResolvedTracking>>, AppError> {
    Ok(Json(state.tracking().get_tracking_info(order_id).await?))
}

/// PUT /api/orders/{order_id}/tracking - Save and return the resolved result.
#[instrument(skip(state, input), fields(submitted = input.tracking_numbers.len()))]
async fn save(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
    Json(input): Json<TrackingInput>,
) -> Result<Json<Option<ResolvedTracking>>, AppError> {
    let tracking = state.tracking();
    tracking
        .save(order_id, input.shipper_id, &input.tracking_numbers)
        .await?;
    Ok(Json(tracking.get_tracking_info(order_id).await?))
}

/// DELETE /api/orders/{order_id}/tracking
#[instrument(skip(state))]
async fn clear(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<StatusCode, AppError> {
    state.tracking().clear(order_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /orders/{order_id}/tracking/details - Customer order page section.
///
/// Empty when disabled in settings or the order has no tracking.
#[instrument(skip(state))]
async fn details(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Html<String>, AppError> {
    if !state.display().include_in_order_details() {
        return Ok(Html(String::new()));
    }

    let Some(tracking) = state.tracking().get_tracking_info(order_id).await? else {
        return Ok(Html(String::new()));
    };

    Ok(Html(render::render_order_details(&tracking)?))
}

/// GET /orders/{order_id}/tracking/email - Email block for the given email.
///
/// Empty unless the email is the customer's completed-order email and email
/// display is enabled.
#[instrument(skip(state))]
async fn email(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
    Query(email): Query<EmailContext>,
) -> Result<Response, AppError> {
    let content_type = if email.plain_text {
        "text/plain; charset=utf-8"
    } else {
        "text/html; charset=utf-8"
    };

    let body = if state.display().include_in_email(&email) {
        match state.tracking().get_tracking_info(order_id).await? {
            Some(tracking) => render::render_email(&tracking, &email)?,
            None => String::new(),
        }
    } else {
        String::new()
    };

    Ok(([(header::CONTENT_TYPE, content_type)], body).into_response())
}

/// GET /orders/{order_id}/tracking/column - Admin order list cell.
#[instrument(skip(state))]
async fn column(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Html<String>, AppError> {
    let summary = state.tracking().summary(order_id).await?;
    Ok(Html(render::render_summary_column(&summary)?))
}
