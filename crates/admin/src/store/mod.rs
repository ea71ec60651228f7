//! Order list state store.
//!
//! This is the state layer behind the dashboard's order grid. It owns the
//! order collection, the bulk-action selection set, the grid parameters,
//! and the last-error slot.
//!
//! Two rules keep it predictable:
//!
//! - Every mutation flows through [`OrderListState::apply`] with an explicit
//!   [`StateChange`] value, so any interleaving of operations can be
//!   reproduced in a test by replaying changes.
//! - Network-backed actions live on [`OrderStore`] and take `&mut self`,
//!   which serializes overlapping operations by construction.
//!
//! Bulk operations track results per item: each confirmed item is
//! reconciled independently, and the caller gets a [`BulkOutcome`] listing
//! which ids succeeded and which failed with what message.

pub mod view;

use std::collections::HashSet;

use futures::future::join_all;
use serde::Serialize;
use thiserror::Error;
use tracing::instrument;

use cakeshop_core::{OrderId, StatusId};

use crate::bakery::payload::RawOrder;
use crate::bakery::{BakeryApiError, BakeryClient, Order, normalize_order};

use view::{OrderPage, OrderViewParams, total_pages, visible_orders};

/// Errors produced by store actions.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend call failed; the message is surfaced to the dashboard.
    #[error(transparent)]
    Api(#[from] BakeryApiError),

    /// A client-side guard rejected the action before any network call.
    #[error("{0}")]
    Validation(String),
}

/// Seam over the four backend order operations.
///
/// [`BakeryClient`] is the production implementation; tests script their
/// own.
pub trait OrderApi: Send + Sync {
    /// Fetch the full order collection.
    fn fetch_orders(&self)
    -> impl Future<Output = Result<Vec<RawOrder>, BakeryApiError>> + Send;

    /// Fetch a single order by id.
    fn fetch_order(&self, id: &str)
    -> impl Future<Output = Result<RawOrder, BakeryApiError>> + Send;

    /// Move an order to a new status, returning the updated representation.
    fn update_order_status(
        &self,
        order_id: &str,
        status_id: &str,
    ) -> impl Future<Output = Result<RawOrder, BakeryApiError>> + Send;

    /// Delete an order.
    fn delete_order(&self, id: &str) -> impl Future<Output = Result<(), BakeryApiError>> + Send;
}

impl OrderApi for BakeryClient {
    async fn fetch_orders(&self) -> Result<Vec<RawOrder>, BakeryApiError> {
        Self::fetch_orders(self).await
    }

    async fn fetch_order(&self, id: &str) -> Result<RawOrder, BakeryApiError> {
        Self::fetch_order(self, id).await
    }

    async fn update_order_status(
        &self,
        order_id: &str,
        status_id: &str,
    ) -> Result<RawOrder, BakeryApiError> {
        Self::update_order_status(self, order_id, status_id).await
    }

    async fn delete_order(&self, id: &str) -> Result<(), BakeryApiError> {
        Self::delete_order(self, id).await
    }
}

/// Per-item result of a bulk action.
#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcome {
    /// Order id the result belongs to.
    pub id: OrderId,
    /// Whether the backend confirmed this item.
    pub ok: bool,
    /// Failure message when `ok` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Outcome of a bulk action, one entry per requested id.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkOutcome {
    /// Per-item results in request order.
    pub results: Vec<ItemOutcome>,
}

impl BulkOutcome {
    /// Whether every item succeeded.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.results.iter().all(|r| r.ok)
    }

    /// Number of confirmed items.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.ok).count()
    }

    /// Joined `id: message` summary of the failures, if any.
    #[must_use]
    pub fn error_summary(&self) -> Option<String> {
        let failures: Vec<String> = self
            .results
            .iter()
            .filter(|r| !r.ok)
            .map(|r| format!("{}: {}", r.id, r.error.as_deref().unwrap_or("failed")))
            .collect();
        if failures.is_empty() {
            None
        } else {
            Some(failures.join("; "))
        }
    }
}

/// A single state mutation.
///
/// The reducer in [`OrderListState::apply`] is the only writer of state.
#[derive(Debug, Clone)]
pub enum StateChange {
    /// Replace the whole collection (successful fetch-all).
    OrdersLoaded(Vec<Order>),
    /// Store the current order for detail views.
    OrderLoaded(Box<Order>),
    /// Replace one entry with the server's returned representation.
    OrderReplaced(Box<Order>),
    /// Remove confirmed-deleted orders from collection and selection.
    OrdersRemoved(Vec<OrderId>),
    /// Toggle one id's selection membership.
    SelectionToggled(OrderId),
    /// Toggle the currently visible page's id set.
    PageSelectionToggled,
    /// Empty the selection.
    SelectionCleared,
    /// Replace the grid parameters.
    ParamsChanged(OrderViewParams),
    /// Record a failure message in the error slot.
    ErrorRecorded(String),
    /// Clear the error slot.
    ErrorCleared,
}

/// The order grid's state: collection, selection, parameters, error slot.
#[derive(Debug, Default)]
pub struct OrderListState {
    orders: Vec<Order>,
    selected: HashSet<OrderId>,
    params: OrderViewParams,
    current: Option<Order>,
    last_error: Option<String>,
}

impl OrderListState {
    /// Apply one state change. The only mutation path.
    pub fn apply(&mut self, change: StateChange) {
        match change {
            StateChange::OrdersLoaded(orders) => {
                self.orders = orders;
                // Selection holds weak references; drop ids that no longer
                // resolve to an order.
                self.selected
                    .retain(|id| self.orders.iter().any(|o| &o.id == id));
            }
            StateChange::OrderLoaded(order) => {
                self.current = Some(*order);
            }
            StateChange::OrderReplaced(order) => {
                if let Some(slot) = self.orders.iter_mut().find(|o| o.id == order.id) {
                    *slot = (*order).clone();
                }
                if self.current.as_ref().is_some_and(|c| c.id == order.id) {
                    self.current = Some((*order).clone());
                }
                self.selected.remove(&order.id);
            }
            StateChange::OrdersRemoved(ids) => {
                self.orders.retain(|o| !ids.contains(&o.id));
                for id in &ids {
                    self.selected.remove(id);
                }
                if self
                    .current
                    .as_ref()
                    .is_some_and(|c| ids.contains(&c.id))
                {
                    self.current = None;
                }
            }
            StateChange::SelectionToggled(id) => {
                // No dangling selections: unknown ids are ignored.
                if !self.orders.iter().any(|o| o.id == id) {
                    return;
                }
                if !self.selected.remove(&id) {
                    self.selected.insert(id);
                }
            }
            StateChange::PageSelectionToggled => {
                let page_ids: Vec<OrderId> = self
                    .visible()
                    .orders
                    .into_iter()
                    .map(|o| o.id)
                    .collect();
                let all_selected =
                    !page_ids.is_empty() && page_ids.iter().all(|id| self.selected.contains(id));
                if all_selected {
                    for id in &page_ids {
                        self.selected.remove(id);
                    }
                } else {
                    self.selected.extend(page_ids);
                }
            }
            StateChange::SelectionCleared => {
                self.selected.clear();
            }
            StateChange::ParamsChanged(params) => {
                self.params = params.clamped();
            }
            StateChange::ErrorRecorded(message) => {
                self.last_error = Some(message);
            }
            StateChange::ErrorCleared => {
                self.last_error = None;
            }
        }
    }

    /// The full order collection.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Ids currently checked for bulk actions.
    #[must_use]
    pub const fn selected(&self) -> &HashSet<OrderId> {
        &self.selected
    }

    /// Current grid parameters.
    #[must_use]
    pub const fn params(&self) -> &OrderViewParams {
        &self.params
    }

    /// Current order for detail views, if one was loaded.
    #[must_use]
    pub const fn current(&self) -> Option<&Order> {
        self.current.as_ref()
    }

    /// Last recorded failure message.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The visible page under the current parameters.
    #[must_use]
    pub fn visible(&self) -> OrderPage {
        visible_orders(&self.orders, &self.params)
    }

    /// Rows after filtering, before pagination.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        view::filter_orders(&self.orders, &self.params).len()
    }

    /// Page count under the current parameters.
    #[must_use]
    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_len(), self.params.per_page)
    }
}

/// The order store: state plus the backend client driving it.
pub struct OrderStore<C> {
    client: C,
    state: OrderListState,
}

impl<C: OrderApi> OrderStore<C> {
    /// Create a store with an empty collection.
    pub fn new(client: C) -> Self {
        Self {
            client,
            state: OrderListState::default(),
        }
    }

    /// Read access to the state.
    #[must_use]
    pub const fn state(&self) -> &OrderListState {
        &self.state
    }

    /// Fetch the full collection and replace local state with it.
    ///
    /// On failure the previous collection is untouched and the failure
    /// message lands in the error slot.
    ///
    /// # Errors
    ///
    /// Returns the backend error after recording it.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), StoreError> {
        match self.client.fetch_orders().await {
            Ok(raw) => {
                let orders: Vec<Order> = raw.into_iter().map(normalize_order).collect();
                tracing::debug!(count = orders.len(), "order collection refreshed");
                self.state.apply(StateChange::OrdersLoaded(orders));
                self.state.apply(StateChange::ErrorCleared);
                Ok(())
            }
            Err(e) => {
                self.state.apply(StateChange::ErrorRecorded(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Fetch one order and store it as the current detail order.
    ///
    /// # Errors
    ///
    /// Returns the backend error after recording it, so callers can react.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn load_order(&mut self, id: &OrderId) -> Result<Order, StoreError> {
        match self.client.fetch_order(id.as_str()).await {
            Ok(raw) => {
                let order = normalize_order(raw);
                self.state
                    .apply(StateChange::OrderLoaded(Box::new(order.clone())));
                self.state.apply(StateChange::ErrorCleared);
                Ok(order)
            }
            Err(e) => {
                self.state.apply(StateChange::ErrorRecorded(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Move one order to a new status and reconcile the local entry with
    /// the server's returned representation.
    ///
    /// # Errors
    ///
    /// Returns the backend error after recording it.
    #[instrument(skip(self), fields(order_id = %order_id, status_id = %status_id))]
    pub async fn set_status(
        &mut self,
        order_id: &OrderId,
        status_id: &StatusId,
    ) -> Result<Order, StoreError> {
        match self
            .client
            .update_order_status(order_id.as_str(), status_id.as_str())
            .await
        {
            Ok(raw) => {
                let order = normalize_order(raw);
                self.state
                    .apply(StateChange::OrderReplaced(Box::new(order.clone())));
                self.state.apply(StateChange::ErrorCleared);
                Ok(order)
            }
            Err(e) => {
                self.state.apply(StateChange::ErrorRecorded(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Bulk status update with per-item result tracking.
    ///
    /// All calls are issued concurrently. Each confirmed item is reconciled
    /// independently; failed items keep their old entry and stay selected.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no ids are given or the targeted
    /// orders do not share a current status. Individual backend failures do
    /// not fail the call; they are reported in the outcome.
    #[instrument(skip(self), fields(count = ids.len(), status_id = %status_id))]
    pub async fn set_status_bulk(
        &mut self,
        ids: &[OrderId],
        status_id: &StatusId,
    ) -> Result<BulkOutcome, StoreError> {
        if ids.is_empty() {
            return Err(StoreError::Validation(
                "select at least one order".to_string(),
            ));
        }
        // Every id must resolve to a local order; like the selection set,
        // bulk targets never dangle.
        let mut current_statuses: Vec<&StatusId> = Vec::with_capacity(ids.len());
        for id in ids {
            let Some(order) = self.state.orders.iter().find(|o| &o.id == id) else {
                return Err(StoreError::Validation(format!("unknown order: {id}")));
            };
            current_statuses.push(&order.status.id);
        }
        current_statuses.dedup();
        if current_statuses.len() > 1 {
            return Err(StoreError::Validation(
                "orders must share a status before a bulk update".to_string(),
            ));
        }

        let client = &self.client;
        let calls = ids.iter().map(|id| async move {
            let result = client
                .update_order_status(id.as_str(), status_id.as_str())
                .await;
            (id.clone(), result)
        });
        let results = join_all(calls).await;

        let mut outcome = BulkOutcome::default();
        for (id, result) in results {
            match result {
                Ok(raw) => {
                    let order = normalize_order(raw);
                    self.state
                        .apply(StateChange::OrderReplaced(Box::new(order)));
                    outcome.results.push(ItemOutcome {
                        id,
                        ok: true,
                        error: None,
                    });
                }
                Err(e) => {
                    outcome.results.push(ItemOutcome {
                        id,
                        ok: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        if let Some(summary) = outcome.error_summary() {
            tracing::warn!(
                succeeded = outcome.succeeded(),
                errors = %summary,
                "bulk status update completed with errors"
            );
            self.state.apply(StateChange::ErrorRecorded(summary));
        } else {
            tracing::info!(count = outcome.succeeded(), "bulk status update completed");
            // A fully successful bulk action retires the whole selection.
            self.state.apply(StateChange::SelectionCleared);
            self.state.apply(StateChange::ErrorCleared);
        }
        Ok(outcome)
    }

    /// Delete one order; on confirmation it leaves both the collection and
    /// the selection.
    ///
    /// # Errors
    ///
    /// Returns the backend error after recording it.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn remove(&mut self, id: &OrderId) -> Result<(), StoreError> {
        match self.client.delete_order(id.as_str()).await {
            Ok(()) => {
                self.state
                    .apply(StateChange::OrdersRemoved(vec![id.clone()]));
                self.state.apply(StateChange::ErrorCleared);
                Ok(())
            }
            Err(e) => {
                self.state.apply(StateChange::ErrorRecorded(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Bulk delete with per-item result tracking; confirmed deletions are
    /// applied independently of failed ones.
    ///
    /// # Errors
    ///
    /// Returns a validation error when no ids are given. Individual backend
    /// failures are reported in the outcome.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn remove_bulk(&mut self, ids: &[OrderId]) -> Result<BulkOutcome, StoreError> {
        if ids.is_empty() {
            return Err(StoreError::Validation(
                "select at least one order".to_string(),
            ));
        }

        let client = &self.client;
        let calls = ids.iter().map(|id| async move {
            let result = client.delete_order(id.as_str()).await;
            (id.clone(), result)
        });
        let results = join_all(calls).await;

        let mut outcome = BulkOutcome::default();
        for (id, result) in results {
            match result {
                Ok(()) => {
                    self.state
                        .apply(StateChange::OrdersRemoved(vec![id.clone()]));
                    outcome.results.push(ItemOutcome {
                        id,
                        ok: true,
                        error: None,
                    });
                }
                Err(e) => {
                    outcome.results.push(ItemOutcome {
                        id,
                        ok: false,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        if let Some(summary) = outcome.error_summary() {
            tracing::warn!(
                succeeded = outcome.succeeded(),
                errors = %summary,
                "bulk delete completed with errors"
            );
            self.state.apply(StateChange::ErrorRecorded(summary));
        } else {
            tracing::info!(count = outcome.succeeded(), "bulk delete completed");
            self.state.apply(StateChange::SelectionCleared);
            self.state.apply(StateChange::ErrorCleared);
        }
        Ok(outcome)
    }

    /// Replace the grid parameters (clamped).
    pub fn set_params(&mut self, params: OrderViewParams) {
        self.state.apply(StateChange::ParamsChanged(params));
    }

    /// Toggle one id's selection membership.
    pub fn toggle_selected(&mut self, id: OrderId) {
        self.state.apply(StateChange::SelectionToggled(id));
    }

    /// Toggle the currently visible page's id set: clears them if all are
    /// selected, otherwise adds the missing ones. Other pages' selections
    /// are untouched.
    pub fn toggle_page_selection(&mut self) {
        self.state.apply(StateChange::PageSelectionToggled);
    }

    /// Empty the selection unconditionally.
    pub fn clear_selection(&mut self) {
        self.state.apply(StateChange::SelectionCleared);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use cakeshop_core::Vnd;

    use crate::bakery::payload::{RawOrder, RawStatus, StatusRef};
    use crate::store::view::{OrderSortKey, SortDir};

    use super::*;

    /// Scripted backend: serves a fixed collection and fails the ids it is
    /// told to fail.
    #[derive(Default)]
    struct MockApi {
        orders: Vec<RawOrder>,
        fail_fetch: bool,
        fail_ids: HashSet<String>,
    }

    fn raw_order(id: &str, code: &str, price: i64, status_id: &str, status_name: &str) -> RawOrder {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "code": code,
            "userName": format!("Khách {id}"),
            "orderItems": [{"product": {"_id": "p1", "name": "Bánh kem", "category": "bánh kem"},
                            "quantity": 1, "price": price}],
            "totalPrice": price,
            "finalPrice": price,
            "status": {"_id": status_id, "statusName": status_name},
            "createdAt": "2025-03-01T08:00:00Z"
        }))
        .expect("raw order")
    }

    impl OrderApi for MockApi {
        async fn fetch_orders(&self) -> Result<Vec<RawOrder>, BakeryApiError> {
            if self.fail_fetch {
                return Err(BakeryApiError::Server("backend down".to_string()));
            }
            Ok(self.orders.clone())
        }

        async fn fetch_order(&self, id: &str) -> Result<RawOrder, BakeryApiError> {
            self.orders
                .iter()
                .find(|o| o.id.as_deref() == Some(id))
                .cloned()
                .ok_or_else(|| BakeryApiError::NotFound(format!("order {id}")))
        }

        async fn update_order_status(
            &self,
            order_id: &str,
            status_id: &str,
        ) -> Result<RawOrder, BakeryApiError> {
            if self.fail_ids.contains(order_id) {
                return Err(BakeryApiError::Server(format!(
                    "update rejected for {order_id}"
                )));
            }
            let mut raw = self.fetch_order(order_id).await?;
            raw.status = Some(StatusRef::Embedded(RawStatus {
                id: Some(status_id.to_string()),
                status_name: Some("đã cập nhật".to_string()),
            }));
            Ok(raw)
        }

        async fn delete_order(&self, id: &str) -> Result<(), BakeryApiError> {
            if self.fail_ids.contains(id) {
                return Err(BakeryApiError::Server(format!("delete rejected for {id}")));
            }
            Ok(())
        }
    }

    fn seeded_store() -> OrderStore<MockApi> {
        OrderStore::new(MockApi {
            orders: vec![
                raw_order("1", "DH-001", 100_000, "s1", "đang làm"),
                raw_order("2", "DH-002", 600_000, "s1", "đang làm"),
                raw_order("3", "DH-003", 900_000, "s2", "đã giao"),
            ],
            ..MockApi::default()
        })
    }

    #[tokio::test]
    async fn refresh_replaces_the_collection() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        assert_eq!(store.state().orders().len(), 3);
        assert!(store.state().last_error().is_none());
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_collection_and_records_error() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");

        store.client.fail_fetch = true;
        let err = store.refresh().await.expect_err("should fail");
        assert!(matches!(err, StoreError::Api(_)));
        assert_eq!(store.state().orders().len(), 3);
        assert_eq!(store.state().last_error(), Some("backend down"));
    }

    #[tokio::test]
    async fn load_order_stores_the_current_detail() {
        let mut store = seeded_store();
        let order = store.load_order(&"2".into()).await.expect("load");
        assert_eq!(order.code, "DH-002");
        assert_eq!(store.state().current().map(|o| o.code.as_str()), Some("DH-002"));
    }

    #[tokio::test]
    async fn toggling_a_row_twice_restores_the_selection() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.toggle_selected("2".into());
        let before = store.state().selected().clone();

        store.toggle_selected("1".into());
        store.toggle_selected("1".into());
        assert_eq!(store.state().selected(), &before);
    }

    #[tokio::test]
    async fn page_selection_completes_partial_and_clears_full() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.toggle_selected("2".into());

        // Not all rows were selected, so the missing ones are added.
        store.toggle_page_selection();
        assert_eq!(store.state().selected().len(), 3);
        // Every row was selected, so the page is cleared.
        store.toggle_page_selection();
        assert!(store.state().selected().is_empty());
    }

    #[tokio::test]
    async fn selection_ignores_unknown_ids() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.toggle_selected("ghost".into());
        assert!(store.state().selected().is_empty());
    }

    #[tokio::test]
    async fn remove_drops_order_and_selection_together() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.toggle_selected("1".into());

        store.remove(&"1".into()).await.expect("remove");
        assert_eq!(store.state().orders().len(), 2);
        assert!(store.state().selected().is_empty());
        // Invariant: no selected id without a matching order.
        for id in store.state().selected() {
            assert!(store.state().orders().iter().any(|o| &o.id == id));
        }
    }

    #[tokio::test]
    async fn bulk_status_update_tracks_per_item_results() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.client.fail_ids.insert("2".to_string());
        store.toggle_selected("1".into());
        store.toggle_selected("2".into());

        let outcome = store
            .set_status_bulk(&["1".into(), "2".into()], &"s9".into())
            .await
            .expect("bulk");

        assert!(!outcome.all_ok());
        assert_eq!(outcome.succeeded(), 1);

        let orders = store.state().orders();
        let one = orders.iter().find(|o| o.id.as_str() == "1").expect("order 1");
        let two = orders.iter().find(|o| o.id.as_str() == "2").expect("order 2");
        // Confirmed item reconciled and deselected; failed item untouched
        // and still selected.
        assert_eq!(one.status.id.as_str(), "s9");
        assert_eq!(two.status.id.as_str(), "s1");
        assert!(!store.state().selected().contains(&"1".into()));
        assert!(store.state().selected().contains(&"2".into()));
        assert!(store.state().last_error().is_some());
    }

    #[tokio::test]
    async fn fully_successful_bulk_update_clears_the_selection() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.toggle_selected("1".into());
        store.toggle_selected("2".into());
        store.toggle_selected("3".into());

        let outcome = store
            .set_status_bulk(&["1".into(), "2".into()], &"s9".into())
            .await
            .expect("bulk");
        assert!(outcome.all_ok());
        // Completion retires the whole selection, even ids outside the batch.
        assert!(store.state().selected().is_empty());
        assert!(store.state().last_error().is_none());
    }

    #[tokio::test]
    async fn bulk_status_update_rejects_mixed_statuses() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        let err = store
            .set_status_bulk(&["1".into(), "3".into()], &"s9".into())
            .await
            .expect_err("mixed statuses");
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn bulk_status_update_rejects_unknown_ids() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");

        // An id with no matching local order must not reach the backend,
        // even alongside valid ids whose statuses agree.
        let err = store
            .set_status_bulk(&["1".into(), "ghost".into()], &"s9".into())
            .await
            .expect_err("unknown id");
        assert!(matches!(err, StoreError::Validation(_)));

        let orders = store.state().orders();
        let one = orders.iter().find(|o| o.id.as_str() == "1").expect("order 1");
        assert_eq!(one.status.id.as_str(), "s1");
    }

    #[tokio::test]
    async fn bulk_actions_reject_empty_selection() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        assert!(matches!(
            store.set_status_bulk(&[], &"s9".into()).await,
            Err(StoreError::Validation(_))
        ));
        assert!(matches!(
            store.remove_bulk(&[]).await,
            Err(StoreError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn bulk_delete_applies_confirmed_items_only() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.client.fail_ids.insert("3".to_string());

        let outcome = store
            .remove_bulk(&["1".into(), "3".into()])
            .await
            .expect("bulk delete");
        assert_eq!(outcome.succeeded(), 1);
        let remaining: Vec<&str> = store
            .state()
            .orders()
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(remaining, vec!["2", "3"]);
    }

    #[tokio::test]
    async fn replaced_orders_keep_grid_parameters_applied() {
        let mut store = seeded_store();
        store.refresh().await.expect("refresh");
        store.set_params(OrderViewParams {
            sort_by: OrderSortKey::FinalPrice,
            sort_dir: SortDir::Asc,
            ..OrderViewParams::default()
        });
        let page = store.state().visible();
        assert_eq!(page.orders.first().map(|o| o.final_price), Some(Vnd::new(100_000)));
        assert_eq!(store.state().total_pages(), 1);
    }
}
