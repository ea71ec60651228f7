//! CSV export handler.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, HeaderValue, header};
use axum::response::IntoResponse;
use tracing::instrument;

use crate::error::AppError;
use crate::export::{csv_filename, orders_to_csv};
use crate::state::AppState;
use crate::store::view::filter_orders;

use super::types::OrdersQuery;

/// `GET /orders/export` - download the grid as CSV.
///
/// Accepts the same query parameters as the grid and exports every row
/// matching them, ignoring pagination: staff export the whole filtered
/// set, not one page.
#[instrument(skip(state))]
pub async fn export(
    State(state): State<AppState>,
    Query(query): Query<OrdersQuery>,
) -> Result<impl IntoResponse, AppError> {
    let params = query.into_params();
    let store = state.store().read().await;
    let rows = filter_orders(store.state().orders(), &params);
    let csv = orders_to_csv(rows);
    drop(store);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/csv; charset=utf-8"),
    );
    let disposition = format!("attachment; filename=\"{}\"", csv_filename());
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|_| AppError::BadRequest("invalid export filename".into()))?,
    );
    Ok((headers, csv))
}
