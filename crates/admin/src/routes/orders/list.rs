//! Order grid and detail handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use tracing::instrument;

use cakeshop_core::OrderId;

use crate::error::AppError;
use crate::state::AppState;

use super::types::{OrderDetailView, OrdersQuery, OrdersResponse};

/// `GET /orders` - the order grid.
///
/// Applies the query's filter/sort/pagination parameters to the store and
/// returns the visible page. Serves from the in-memory collection; use
/// [`refresh`] to re-fetch from the backend.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<Json<OrdersResponse>, AppError> {
    let mut store = state.store().write().await;
    store.set_params(query.into_params());
    Ok(Json(OrdersResponse::from_state(store.state())))
}

/// `POST /orders/refresh` - re-fetch the collection from the backend.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Result<Json<OrdersResponse>, AppError> {
    let mut store = state.store().write().await;
    store.refresh().await?;
    Ok(Json(OrdersResponse::from_state(store.state())))
}

/// `GET /orders/{id}` - full order detail.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderDetailView>, AppError> {
    let id = OrderId::from(id);
    let mut store = state.store().write().await;
    let order = store.load_order(&id).await?;
    Ok(Json(OrderDetailView::from_order(&order)))
}
