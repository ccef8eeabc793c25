//! Async REST client for the ordering API.
//!
//! One method per endpoint. Every call:
//! - resolves the endpoint path against the configured base URL,
//! - maps a non-2xx status to [`ClientError::Api`] with the server's
//!   `{"error": ...}` message when there is one,
//! - maps a 2xx body with `success: false` to [`ClientError::Rejected`].
//!
//! There are no retries; callers decide what to show the user.

use std::time::Duration;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use cart_core::{Menu, MenuItem, MenuItemId, OrderSubmission};
use cart_protocol::endpoints;
use cart_protocol::{
    AdminStats, ErrorBody, MenuItemDraft, MenuItemPatch, MenuItemResponse, OrderRecord,
    OrderStatus, OrdersPage, OrdersQuery, StatusUpdate, StatusUpdateResponse,
    SubmitOrderResponse, SuccessResponse,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let base = Url::parse(base_url).map_err(|e| ClientError::Url {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self { http, base })
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_base_url, config.timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    // -------------------------------------------------------------------------
    // Ordering
    // -------------------------------------------------------------------------

    /// `GET /api/menu`
    pub async fn fetch_menu(&self) -> Result<Menu, ClientError> {
        let menu: Menu = self.get_json(endpoints::MENU).await?;
        info!(items = menu.len(), "menu loaded");
        Ok(menu)
    }

    /// `GET /api/menu/{id}`
    pub async fn fetch_menu_item(&self, id: MenuItemId) -> Result<MenuItem, ClientError> {
        self.get_json(&endpoints::menu_item(id)).await
    }

    /// `POST /api/submit-order`
    pub async fn submit_order(
        &self,
        submission: &OrderSubmission,
    ) -> Result<SubmitOrderResponse, ClientError> {
        info!(
            lines = submission.items.len(),
            customer = %submission.customer_name,
            "submitting order"
        );
        let resp: SubmitOrderResponse = self
            .send_json(reqwest::Method::POST, endpoints::SUBMIT_ORDER, submission)
            .await?;
        if !resp.success {
            return Err(ClientError::Rejected("Failed to submit order".into()));
        }
        info!(order_id = resp.order_id, total = %resp.order.total, "order accepted");
        Ok(resp)
    }

    // -------------------------------------------------------------------------
    // Orders (admin)
    // -------------------------------------------------------------------------

    /// `GET /api/orders?page&per_page&status`
    pub async fn list_orders(&self, query: &OrdersQuery) -> Result<OrdersPage, ClientError> {
        self.get_json(&endpoints::orders_with_query(query)).await
    }

    /// `GET /api/orders/{id}`
    pub async fn fetch_order(&self, id: u32) -> Result<OrderRecord, ClientError> {
        self.get_json(&endpoints::order(id)).await
    }

    /// `PUT /api/orders/{id}/status`
    pub async fn update_order_status(
        &self,
        id: u32,
        status: OrderStatus,
    ) -> Result<OrderRecord, ClientError> {
        let resp: StatusUpdateResponse = self
            .send_json(reqwest::Method::PUT, &endpoints::order_status(id), &StatusUpdate { status })
            .await?;
        if !resp.success {
            return Err(ClientError::Rejected(format!("status update for order {id}")));
        }
        Ok(resp.order)
    }

    // -------------------------------------------------------------------------
    // Menu administration
    // -------------------------------------------------------------------------

    /// `GET /api/admin/menu` (includes unavailable items)
    pub async fn admin_menu(&self) -> Result<Vec<MenuItem>, ClientError> {
        self.get_json(endpoints::ADMIN_MENU).await
    }

    /// `POST /api/admin/menu`
    pub async fn create_menu_item(&self, draft: &MenuItemDraft) -> Result<MenuItem, ClientError> {
        let resp: MenuItemResponse = self
            .send_json(reqwest::Method::POST, endpoints::ADMIN_MENU, draft)
            .await?;
        if !resp.success {
            return Err(ClientError::Rejected(format!("create menu item {}", draft.name)));
        }
        Ok(resp.item)
    }

    /// `PUT /api/admin/menu/{id}`
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        patch: &MenuItemPatch,
    ) -> Result<MenuItem, ClientError> {
        let resp: MenuItemResponse = self
            .send_json(reqwest::Method::PUT, &endpoints::admin_menu_item(id), patch)
            .await?;
        if !resp.success {
            return Err(ClientError::Rejected(format!("update menu item {id}")));
        }
        Ok(resp.item)
    }

    /// `DELETE /api/admin/menu/{id}`
    pub async fn delete_menu_item(&self, id: MenuItemId) -> Result<(), ClientError> {
        let url = self.url(&endpoints::admin_menu_item(id))?;
        debug!(%url, "DELETE");
        let resp = self.http.delete(url).send().await?;
        let body: SuccessResponse = Self::decode(resp).await?;
        if !body.success {
            return Err(ClientError::Rejected(format!("delete menu item {id}")));
        }
        Ok(())
    }

    /// `GET /api/admin/stats`
    pub async fn fetch_stats(&self) -> Result<AdminStats, ClientError> {
        self.get_json(endpoints::ADMIN_STATS).await
    }

    // -------------------------------------------------------------------------
    // Helpers
    // -------------------------------------------------------------------------

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.base.join(path).map_err(|e| ClientError::Url {
            url: format!("{}{}", self.base, path),
            reason: e.to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = self.url(path)?;
        debug!(%url, "GET");
        let resp = self.http.get(url).send().await?;
        Self::decode(resp).await
    }

    async fn send_json<B, T>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path)?;
        debug!(%url, %method, "sending json body");
        let resp = self.http.request(method, url).json(body).send().await?;
        Self::decode(resp).await
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let fallback = status.canonical_reason().unwrap_or("request failed").to_string();
        let message = match resp.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => fallback,
        };
        warn!(status = status.as_u16(), %message, "api error");
        Err(ClientError::Api {
            status: status.as_u16(),
            message,
        })
    }
}
