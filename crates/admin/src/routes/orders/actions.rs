//! Single-order actions and selection handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::instrument;

use cakeshop_core::{OrderId, StatusId};

use crate::error::AppError;
use crate::state::AppState;

use super::types::{OrderRowView, OrdersResponse};

/// Input for a single status change.
#[derive(Debug, Deserialize)]
pub struct StatusInput {
    /// Target status id.
    pub status_id: String,
}

/// Input naming one order id.
#[derive(Debug, Deserialize)]
pub struct OrderIdInput {
    /// Order entity id.
    pub order_id: String,
}

/// `POST /orders/{id}/status` - move one order to a new status.
///
/// Returns the reconciled row as the server now sees it.
#[instrument(skip(state))]
pub async fn set_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<StatusInput>,
) -> Result<Json<OrderRowView>, AppError> {
    if input.status_id.trim().is_empty() {
        return Err(AppError::BadRequest("status_id must not be empty".into()));
    }
    let id = OrderId::from(id);
    let status_id = StatusId::from(input.status_id);
    let mut store = state.store().write().await;
    let order = store.set_status(&id, &status_id).await?;
    Ok(Json(OrderRowView::from_order(&order, false)))
}

/// `POST /orders/{id}/delete` - delete one order.
///
/// On confirmation the order leaves the collection and the selection in
/// the same step; the updated grid page is returned.
#[instrument(skip(state))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrdersResponse>, AppError> {
    let id = OrderId::from(id);
    let mut store = state.store().write().await;
    store.remove(&id).await?;
    Ok(Json(OrdersResponse::from_state(store.state())))
}

/// `POST /orders/selection/toggle` - toggle one row's selection.
///
/// Toggling twice restores the original selection; unknown ids are
/// ignored.
#[instrument(skip(state))]
pub async fn toggle_selection(
    State(state): State<AppState>,
    Json(input): Json<OrderIdInput>,
) -> Json<OrdersResponse> {
    let mut store = state.store().write().await;
    store.toggle_selected(OrderId::from(input.order_id));
    Json(OrdersResponse::from_state(store.state()))
}

/// `POST /orders/selection/page` - toggle the visible page's rows.
///
/// Deselects them all if every row on the page is selected, otherwise
/// selects the missing ones. Rows on other pages are untouched.
#[instrument(skip(state))]
pub async fn toggle_page_selection(State(state): State<AppState>) -> Json<OrdersResponse> {
    let mut store = state.store().write().await;
    store.toggle_page_selection();
    Json(OrdersResponse::from_state(store.state()))
}

/// `POST /orders/selection/clear` - empty the selection.
#[instrument(skip(state))]
pub async fn clear_selection(State(state): State<AppState>) -> Json<OrdersResponse> {
    let mut store = state.store().write().await;
    store.clear_selection();
    Json(OrdersResponse::from_state(store.state()))
}
