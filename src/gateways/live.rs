use crate::config::{AppConfig, Mode};
use crate::domain::authorization::AuthorizationRequest;
use crate::domain::cancel::CancelRequest;
use crate::domain::capture::CaptureRequest;
use crate::domain::refund::RefundRequest;
use crate::error::GatewayError;
use crate::gateways::{
    authorization_idempotency_key, cancel_idempotency_key, capture_idempotency_key,
    refund_idempotency_key, GatewayResult, ProcessorGateway,
};
use crate::gateways::token::TokenManager;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

pub struct LiveGateway {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    tokens: Arc<TokenManager>,
}

impl LiveGateway {
    pub fn new(cfg: &AppConfig, http: reqwest::Client, tokens: Arc<TokenManager>) -> Self {
        Self {
            http,
            base_url: cfg.upstream_base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(cfg.upstream_timeout_secs),
            tokens,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json(
        &self,
        url: String,
        idempotency_key: &str,
        body: &Value,
    ) -> Result<Value, GatewayError> {
        let bearer = self.tokens.bearer().await?;
        let response = self
            .http
            .post(&url)
            .header("accept", "application/json")
            .header("Idempotency-Key", idempotency_key)
            .bearer_auth(bearer)
            .timeout(self.timeout)
            .json(body)
            .send()
            .await?;
        Self::success_body(url, response).await
    }

    async fn get_json(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<Value, GatewayError> {
        let bearer = self.tokens.bearer().await?;
        let response = self
            .http
            .get(&url)
            .header("accept", "application/json")
            .bearer_auth(bearer)
            .timeout(self.timeout)
            .query(query)
            .send()
            .await?;
        Self::success_body(url, response).await
    }

    async fn success_body(url: String, response: reqwest::Response) -> Result<Value, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Upstream {
                status: status.as_u16(),
                url,
                body,
            });
        }
        Ok(response.json().await?)
    }

    fn live(body: Value) -> GatewayResult {
        GatewayResult {
            mode: Mode::Live,
            body,
        }
    }
}

#[async_trait::async_trait]
impl ProcessorGateway for LiveGateway {
    async fn authorize(&self, request: &AuthorizationRequest) -> Result<GatewayResult, GatewayError> {
        let key = authorization_idempotency_key(request);
        let body = serde_json::to_value(request)?;
        let url = self.url("/v1/authorizations");
        Ok(Self::live(self.post_json(url, &key, &body).await?))
    }

    async fn cancel(
        &self,
        payment_id: &str,
        request: &CancelRequest,
    ) -> Result<GatewayResult, GatewayError> {
        let key = cancel_idempotency_key(payment_id);
        let body = serde_json::to_value(request)?;
        let url = self.url(&format!("/v1/payments/{payment_id}/cancel"));
        Ok(Self::live(self.post_json(url, &key, &body).await?))
    }

    async fn refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<GatewayResult, GatewayError> {
        let key = refund_idempotency_key(payment_id);
        let body = serde_json::to_value(request)?;
        let url = self.url(&format!("/v1/payments/{payment_id}/refund"));
        Ok(Self::live(self.post_json(url, &key, &body).await?))
    }

    async fn capture(
        &self,
        payment_id: &str,
        request: &CaptureRequest,
    ) -> Result<GatewayResult, GatewayError> {
        let key = capture_idempotency_key(payment_id, request.amount.is_some());
        let body = serde_json::to_value(request)?;
        let url = self.url(&format!("/v1/payments/{payment_id}/captures"));
        Ok(Self::live(self.post_json(url, &key, &body).await?))
    }

    async fn list_organizations(&self) -> Result<GatewayResult, GatewayError> {
        let url = self.url("/v1/organizations");
        Ok(Self::live(self.get_json(url, &[]).await?))
    }

    async fn list_merchants(
        &self,
        organization_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<GatewayResult, GatewayError> {
        let url = self.url("/v1/merchants");
        let query = [
            ("organization_id", organization_id.to_string()),
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        Ok(Self::live(self.get_json(url, &query).await?))
    }
}
