use crate::config::Mode;
use crate::domain::authorization::AuthorizationRequest;
use crate::domain::cancel::CancelRequest;
use crate::domain::capture::CaptureRequest;
use crate::domain::refund::RefundRequest;
use crate::error::GatewayError;
use crate::gateways::{GatewayResult, ProcessorGateway};
use serde_json::json;

/// Fabricates upstream responses locally so the request/response contract
/// can be exercised without live credentials. Never issues a network call
/// and never fails.
pub struct SimulatedGateway;

fn opaque_id(prefix: &str) -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &hex[..20])
}

fn simulated(body: serde_json::Value) -> GatewayResult {
    GatewayResult {
        mode: Mode::Simulated,
        body,
    }
}

#[async_trait::async_trait]
impl ProcessorGateway for SimulatedGateway {
    async fn authorize(&self, request: &AuthorizationRequest) -> Result<GatewayResult, GatewayError> {
        let body = json!({
            "instrument_id": opaque_id("ins"),
            "payment_id": opaque_id("pay"),
            "response_code": "00",
            "response_code_description": "Approved or completed successfully",
            "transaction": {
                "amount": request.amount.value.to_string(),
                "currency": request.amount.currency,
                "id": opaque_id("trx"),
                "network_data": {
                    "approval_code": "772886",
                    "response_code": "00",
                    "response_code_description": "Approved or completed successfully"
                },
                "risk_id": opaque_id("eva"),
                "status": "APPROVED",
                "status_detail": "SUCCESS",
                "type": "AUTHORIZATION"
            }
        });
        Ok(simulated(body))
    }

    async fn cancel(
        &self,
        payment_id: &str,
        _request: &CancelRequest,
    ) -> Result<GatewayResult, GatewayError> {
        let body = json!({
            "payment": {
                "id": payment_id,
                "transaction": {
                    "amount": 25.25,
                    "id": opaque_id("trx"),
                    "status": "APPROVED",
                    "status_detail": "SUCCESS",
                    "type": "CANCEL"
                }
            }
        });
        Ok(simulated(body))
    }

    async fn refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<GatewayResult, GatewayError> {
        let body = json!({
            "payment": {
                "id": payment_id,
                "transaction": {
                    "amount": request.amount.value,
                    "authorization_code": "744019",
                    "id": opaque_id("trx"),
                    "status": "APPROVED",
                    "status_detail": "SUCCESS",
                    "type": "REFUND"
                }
            }
        });
        Ok(simulated(body))
    }

    async fn capture(
        &self,
        payment_id: &str,
        request: &CaptureRequest,
    ) -> Result<GatewayResult, GatewayError> {
        // No amount means the upstream captures the full pending amount; the
        // simulation stands in a fixed placeholder for it.
        let (value, currency) = match &request.amount {
            Some(amount) => (amount.value, amount.currency.clone()),
            None => (100.0, "USD".to_string()),
        };
        let body = json!({
            "payment": {
                "id": payment_id,
                "transaction": {
                    "amount": value,
                    "currency": currency,
                    "id": opaque_id("trx"),
                    "status": "PENDING",
                    "type": "CAPTURE"
                }
            }
        });
        Ok(simulated(body))
    }

    async fn list_organizations(&self) -> Result<GatewayResult, GatewayError> {
        let body = json!({
            "data": [
                {
                    "id": "org-simulated-0001",
                    "name": "Simulated Organization",
                    "country": "CO",
                    "status": "ACTIVE"
                }
            ]
        });
        Ok(simulated(body))
    }

    async fn list_merchants(
        &self,
        organization_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<GatewayResult, GatewayError> {
        let body = json!({
            "data": [
                {
                    "id": "mer-simulated-0001",
                    "organization_id": organization_id,
                    "name": "Simulated Merchant",
                    "status": "ACTIVE"
                }
            ],
            "page": page,
            "page_size": page_size
        });
        Ok(simulated(body))
    }
}
