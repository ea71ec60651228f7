//! Bulk action handlers.
//!
//! Bulk requests carry a comma-separated id list. Items are processed
//! per-id: a response of 200 means every item succeeded, 207 means the
//! outcome body must be inspected for per-item failures.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::instrument;

use cakeshop_core::{OrderId, StatusId};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::BulkOutcome;

/// Input for a bulk status change.
#[derive(Debug, Deserialize)]
pub struct BulkStatusInput {
    /// Comma-separated order ids.
    pub order_ids: String,
    /// Target status id.
    pub status_id: String,
}

/// Input for a bulk delete.
#[derive(Debug, Deserialize)]
pub struct BulkOrdersInput {
    /// Comma-separated order ids.
    pub order_ids: String,
}

fn parse_ids(raw: &str) -> Vec<OrderId> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(OrderId::from)
        .collect()
}

fn outcome_response(outcome: BulkOutcome) -> (StatusCode, Json<BulkOutcome>) {
    let status = if outcome.all_ok() {
        StatusCode::OK
    } else {
        StatusCode::MULTI_STATUS
    };
    (status, Json(outcome))
}

/// `POST /orders/bulk/status` - move several orders to a new status.
///
/// Rejected up front when no ids are given or the targets do not share a
/// status; otherwise always reports per item.
#[instrument(skip(state))]
pub async fn bulk_status(
    State(state): State<AppState>,
    Json(input): Json<BulkStatusInput>,
) -> Result<(StatusCode, Json<BulkOutcome>), AppError> {
    if input.status_id.trim().is_empty() {
        return Err(AppError::BadRequest("status_id must not be empty".into()));
    }
    let ids = parse_ids(&input.order_ids);
    let status_id = StatusId::from(input.status_id);
    let mut store = state.store().write().await;
    let outcome = store.set_status_bulk(&ids, &status_id).await?;
    Ok(outcome_response(outcome))
}

/// `POST /orders/bulk/delete` - delete several orders.
#[instrument(skip(state))]
pub async fn bulk_delete(
    State(state): State<AppState>,
    Json(input): Json<BulkOrdersInput>,
) -> Result<(StatusCode, Json<BulkOutcome>), AppError> {
    let ids = parse_ids(&input.order_ids);
    let mut store = state.store().write().await;
    let outcome = store.remove_bulk(&ids).await?;
    Ok(outcome_response(outcome))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_list_parsing_skips_blanks() {
        let ids = parse_ids(" a, b,, c ,");
        let rendered: Vec<&str> = ids.iter().map(OrderId::as_str).collect();
        assert_eq!(rendered, vec!["a", "b", "c"]);
    }

    #[test]
    fn partial_failure_maps_to_multi_status() {
        use crate::store::ItemOutcome;

        let outcome = BulkOutcome {
            results: vec![
                ItemOutcome {
                    id: "a".into(),
                    ok: true,
                    error: None,
                },
                ItemOutcome {
                    id: "b".into(),
                    ok: false,
                    error: Some("rejected".into()),
                },
            ],
        };
        let (status, _) = outcome_response(outcome);
        assert_eq!(status, StatusCode::MULTI_STATUS);
    }
}
