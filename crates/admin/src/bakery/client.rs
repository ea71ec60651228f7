//! Reqwest client for the bakery backend.

use std::sync::Arc;

use reqwest::StatusCode;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::config::BakeryApiConfig;

use super::BakeryApiError;
use super::payload::{MutationEnvelope, OrderPayload, OrdersPayload, RawOrder};

/// Bakery backend API client.
///
/// Cheap to clone; all clones share one connection pool and token.
#[derive(Clone)]
pub struct BakeryClient {
    inner: Arc<BakeryClientInner>,
}

struct BakeryClientInner {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

/// Error body some endpoints return alongside a non-2xx status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl BakeryClient {
    /// Create a new client from configuration.
    #[must_use]
    pub fn new(config: &BakeryApiConfig) -> Self {
        Self {
            inner: Arc::new(BakeryClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url.trim_end_matches('/').to_string(),
                token: config.token.expose_secret().to_string(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Check the transport-level response and surface typed failures before
    /// any payload parsing happens.
    async fn check(
        response: reqwest::Response,
        resource: &str,
    ) -> Result<reqwest::Response, BakeryApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(BakeryApiError::Unauthorized(
                "bearer token missing or rejected".to_string(),
            ));
        }
        if status == StatusCode::NOT_FOUND {
            return Err(BakeryApiError::NotFound(resource.to_string()));
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("backend returned {status}"));
            return Err(BakeryApiError::Server(message));
        }
        Ok(response)
    }

    /// Fetch the full order collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend reports one.
    #[instrument(skip(self))]
    pub async fn fetch_orders(&self) -> Result<Vec<RawOrder>, BakeryApiError> {
        let response = self
            .inner
            .client
            .get(self.url("/order"))
            .bearer_auth(&self.inner.token)
            .send()
            .await?;

        let payload: OrdersPayload = Self::check(response, "orders").await?.json().await?;
        Ok(payload.into_orders())
    }

    /// Fetch a single order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the order does not exist, or
    /// the backend reports a failure.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn fetch_order(&self, id: &str) -> Result<RawOrder, BakeryApiError> {
        let response = self
            .inner
            .client
            .get(self.url(&format!("/order/{id}")))
            .bearer_auth(&self.inner.token)
            .send()
            .await?;

        let payload: OrderPayload = Self::check(response, &format!("order {id}"))
            .await?
            .json()
            .await?;
        Ok(payload.into_order())
    }

    /// Move an order to a new workflow status.
    ///
    /// Returns the server's updated order representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the envelope is not the
    /// success sentinel.
    #[instrument(skip(self), fields(order_id = %order_id, status_id = %status_id))]
    pub async fn update_order_status(
        &self,
        order_id: &str,
        status_id: &str,
    ) -> Result<RawOrder, BakeryApiError> {
        let response = self
            .inner
            .client
            .put(self.url(&format!("/order/{order_id}/status")))
            .bearer_auth(&self.inner.token)
            .json(&json!({ "statusId": status_id }))
            .send()
            .await?;

        let envelope: MutationEnvelope<RawOrder> =
            Self::check(response, &format!("order {order_id}"))
                .await?
                .json()
                .await?;

        if !envelope.is_ok() {
            return Err(BakeryApiError::Server(envelope.message.unwrap_or_else(
                || format!("status update rejected for order {order_id}"),
            )));
        }

        envelope.data.ok_or_else(|| {
            BakeryApiError::Server(format!("no order data returned for {order_id}"))
        })
    }

    /// Delete an order.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the envelope is not the
    /// success sentinel.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn delete_order(&self, id: &str) -> Result<(), BakeryApiError> {
        let response = self
            .inner
            .client
            .delete(self.url(&format!("/order/{id}")))
            .bearer_auth(&self.inner.token)
            .send()
            .await?;

        let envelope: MutationEnvelope<serde_json::Value> =
            Self::check(response, &format!("order {id}")).await?.json().await?;

        if !envelope.is_ok() {
            return Err(BakeryApiError::Server(
                envelope
                    .message
                    .unwrap_or_else(|| format!("delete rejected for order {id}")),
            ));
        }

        Ok(())
    }
}
