use crate::config::Mode;
use crate::domain::authorization::AuthorizationRequest;
use crate::domain::cancel::CancelRequest;
use crate::domain::capture::CaptureRequest;
use crate::domain::refund::RefundRequest;
use crate::error::GatewayError;
use serde_json::Value;

pub mod live;
pub mod simulated;
pub mod token;

#[derive(Debug, Clone)]
pub struct GatewayResult {
    pub mode: Mode,
    pub body: Value,
}

#[async_trait::async_trait]
pub trait ProcessorGateway: Send + Sync {
    async fn authorize(&self, request: &AuthorizationRequest) -> Result<GatewayResult, GatewayError>;

    async fn cancel(
        &self,
        payment_id: &str,
        request: &CancelRequest,
    ) -> Result<GatewayResult, GatewayError>;

    async fn refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<GatewayResult, GatewayError>;

    async fn capture(
        &self,
        payment_id: &str,
        request: &CaptureRequest,
    ) -> Result<GatewayResult, GatewayError>;

    async fn list_organizations(&self) -> Result<GatewayResult, GatewayError>;

    async fn list_merchants(
        &self,
        organization_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<GatewayResult, GatewayError>;
}

pub fn authorization_idempotency_key(request: &AuthorizationRequest) -> String {
    request
        .id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

// Deterministic per payment: repeated cancels of the same payment reuse the
// key, so the upstream treats them as one logical cancellation.
pub fn cancel_idempotency_key(payment_id: &str) -> String {
    format!("cancel-{payment_id}")
}

pub fn refund_idempotency_key(payment_id: &str) -> String {
    format!("refund-{payment_id}")
}

// Partial and full captures of the same payment must not collide.
pub fn capture_idempotency_key(payment_id: &str, partial: bool) -> String {
    if partial {
        format!("capture-{payment_id}")
    } else {
        format!("capture-{payment_id}-full")
    }
}
