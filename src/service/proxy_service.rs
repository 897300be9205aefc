use crate::domain::authorization::{
    Amount, AuthorizationRequest, Card, CaptureDirective, Installments, Instrument,
};
use crate::domain::cancel::CancelRequest;
use crate::domain::capture::CaptureRequest;
use crate::domain::checkout::{CheckoutRequest, CheckoutResponse};
use crate::domain::overrides::{
    apply_authorization_overrides, apply_capture_overrides, AuthorizationOverrides,
    CaptureOverrides,
};
use crate::domain::refund::RefundRequest;
use crate::error::GatewayError;
use crate::gateways::{GatewayResult, ProcessorGateway};
use crate::repo::authorizations_repo::{AuthorizationRecordInput, AuthorizationsRepo};
use crate::repo::cancellations_repo::{CancellationRecordInput, CancellationsRepo};
use crate::repo::captures_repo::{CaptureRecordInput, CapturesRepo};
use crate::repo::payments_repo::{PaymentRecordInput, PaymentsRepo};
use serde_json::Value;
use std::sync::Arc;

const UNKNOWN_STATUS: &str = "UNKNOWN";

#[derive(Clone)]
pub struct ProxyService {
    pub gateway: Arc<dyn ProcessorGateway>,
    pub payments_repo: PaymentsRepo,
    pub authorizations_repo: AuthorizationsRepo,
    pub cancellations_repo: CancellationsRepo,
    pub captures_repo: CapturesRepo,
    pub merchant_id: Option<String>,
}

impl ProxyService {
    pub async fn authorize(
        &self,
        request: AuthorizationRequest,
        overrides: AuthorizationOverrides,
    ) -> Result<Value, GatewayError> {
        let request = apply_authorization_overrides(request, &overrides);
        let result = self.gateway.authorize(&request).await?;
        self.audit_authorization(&request, &result, "AUTHORIZATION").await;
        Ok(with_mode_tag(result))
    }

    pub async fn preauthorize(
        &self,
        request: AuthorizationRequest,
    ) -> Result<Value, GatewayError> {
        let mut request = request;
        request.intent = "pre-authorization".to_string();
        let capture_after = request.capture.take().and_then(|c| c.capture_after);
        request.capture = Some(CaptureDirective {
            mode: "MANUAL".to_string(),
            capture_after,
        });
        let result = self.gateway.authorize(&request).await?;
        self.audit_authorization(&request, &result, "PRE_AUTHORIZATION").await;
        Ok(with_mode_tag(result))
    }

    pub async fn capture(
        &self,
        payment_id: &str,
        request: CaptureRequest,
        overrides: CaptureOverrides,
    ) -> Result<Value, GatewayError> {
        let request = apply_capture_overrides(request, &overrides);
        let result = self.gateway.capture(payment_id, &request).await?;

        let tx = result.body.pointer("/payment/transaction");
        let record = CaptureRecordInput {
            payment_id: payment_id.to_string(),
            transaction_id: string_at(tx, "id"),
            amount: amount_at(tx),
            status: string_at(tx, "status").unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            raw_response: result.body.clone(),
        };
        if let Err(e) = self.captures_repo.record_capture(&record).await {
            tracing::error!(error = %e, payment_id, "capture succeeded upstream but audit write failed");
        }

        Ok(with_mode_tag(result))
    }

    pub async fn cancel(
        &self,
        payment_id: &str,
        request: CancelRequest,
    ) -> Result<Value, GatewayError> {
        let result = self.gateway.cancel(payment_id, &request).await?;

        let tx = result.body.pointer("/payment/transaction");
        let record = CancellationRecordInput {
            payment_id: payment_id.to_string(),
            transaction_id: string_at(tx, "id"),
            status: string_at(tx, "status").unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            raw_response: result.body.clone(),
        };
        if let Err(e) = self.cancellations_repo.record_cancellation(&record).await {
            tracing::error!(error = %e, payment_id, "cancel succeeded upstream but audit write failed");
        }

        Ok(with_mode_tag(result))
    }

    pub async fn refund(
        &self,
        payment_id: &str,
        request: RefundRequest,
    ) -> Result<Value, GatewayError> {
        let result = self.gateway.refund(payment_id, &request).await?;
        Ok(with_mode_tag(result))
    }

    pub async fn checkout(
        &self,
        request: CheckoutRequest,
    ) -> Result<CheckoutResponse, GatewayError> {
        let merchant_id = self
            .merchant_id
            .clone()
            .ok_or_else(|| GatewayError::Config("PROCESSOR_MERCHANT_ID is not set".to_string()))?;

        let authorization = AuthorizationRequest {
            intent: "authorization".to_string(),
            amount: Amount {
                value: request.amount,
                currency: request.currency.clone(),
            },
            instrument: Instrument {
                instrument_type: "CARD".to_string(),
                card: Card {
                    number: request.card.number.clone(),
                    cvv: request.card.cvv.clone(),
                    expiration_month: request.card.exp_month.clone(),
                    expiration_year: request.card.exp_year.clone(),
                    holder_name: request.card.holder_name.clone(),
                },
            },
            merchant_id,
            id: Some(format!("order-{}", request.order_id)),
            entry_mode: "ecommerce".to_string(),
            order_type: "purchase".to_string(),
            initiator: "cardholder".to_string(),
            capture: Some(CaptureDirective {
                mode: request.capture_mode.clone(),
                capture_after: None,
            }),
            installments: Some(Installments {
                quantity: 1,
                installments_type: "issuer-financed".to_string(),
            }),
            three_ds: None,
            eci: "05".to_string(),
            transaction_compliance: Some(Vec::new()),
        };

        let result = self.gateway.authorize(&authorization).await?;

        let payment_id = string_at(Some(&result.body), "payment_id");
        let transaction_id = string_at(result.body.pointer("/transaction"), "id");
        let status = string_at(result.body.pointer("/transaction"), "status");
        let (Some(payment_id), Some(transaction_id), Some(status)) =
            (payment_id, transaction_id, status)
        else {
            return Err(GatewayError::Incomplete(
                "checkout requires payment_id, transaction id and status in the upstream body",
            ));
        };

        let record = PaymentRecordInput {
            order_id: request.order_id.clone(),
            payment_id: payment_id.clone(),
            transaction_id: transaction_id.clone(),
            status: status.clone(),
            raw_response: result.body.clone(),
        };
        if let Err(e) = self.payments_repo.record_payment(&record).await {
            tracing::error!(error = %e, order_id = %request.order_id, "checkout succeeded upstream but audit write failed");
        }

        Ok(CheckoutResponse {
            order_id: request.order_id,
            payment_id,
            transaction_id,
            status,
            mode: result.mode.as_str().to_string(),
        })
    }

    pub async fn list_organizations(&self) -> Result<Value, GatewayError> {
        Ok(self.gateway.list_organizations().await?.body)
    }

    pub async fn list_merchants(
        &self,
        organization_id: &str,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Result<Value, GatewayError> {
        let page = page.unwrap_or(1).max(1);
        let page_size = page_size.unwrap_or(20).clamp(1, 100);
        Ok(self
            .gateway
            .list_merchants(organization_id, page, page_size)
            .await?
            .body)
    }

    async fn audit_authorization(
        &self,
        request: &AuthorizationRequest,
        result: &GatewayResult,
        auth_type: &str,
    ) {
        let record = AuthorizationRecordInput {
            merchant_id: request.merchant_id.clone(),
            authorization_id: request
                .id
                .clone()
                .unwrap_or_else(|| "auto-generated".to_string()),
            payment_id: string_at(Some(&result.body), "payment_id"),
            transaction_id: string_at(result.body.pointer("/transaction"), "id"),
            status: string_at(result.body.pointer("/transaction"), "status")
                .unwrap_or_else(|| UNKNOWN_STATUS.to_string()),
            auth_type: auth_type.to_string(),
            raw_response: result.body.clone(),
        };
        if let Err(e) = self.authorizations_repo.record_authorization(&record).await {
            tracing::error!(error = %e, merchant_id = %request.merchant_id, "authorization succeeded upstream but audit write failed");
        }
    }
}

fn with_mode_tag(result: GatewayResult) -> Value {
    match result.body {
        Value::Object(mut map) => {
            map.insert(
                "mode".to_string(),
                Value::String(result.mode.as_str().to_string()),
            );
            Value::Object(map)
        }
        other => serde_json::json!({
            "mode": result.mode.as_str(),
            "body": other,
        }),
    }
}

fn string_at(base: Option<&Value>, key: &str) -> Option<String> {
    base.and_then(|v| v.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn amount_at(tx: Option<&Value>) -> Option<String> {
    match tx.and_then(|v| v.get("amount")) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;

    #[test]
    fn mode_tag_is_appended_to_object_bodies() {
        let tagged = with_mode_tag(GatewayResult {
            mode: Mode::Simulated,
            body: serde_json::json!({"payment_id": "pay-1"}),
        });
        assert_eq!(tagged["mode"], "SIMULATED");
        assert_eq!(tagged["payment_id"], "pay-1");
    }

    #[test]
    fn non_object_bodies_are_wrapped() {
        let tagged = with_mode_tag(GatewayResult {
            mode: Mode::Live,
            body: serde_json::json!([1, 2]),
        });
        assert_eq!(tagged["mode"], "LIVE");
        assert_eq!(tagged["body"], serde_json::json!([1, 2]));
    }

    #[test]
    fn amounts_are_stringified_from_numbers_and_strings() {
        let tx = serde_json::json!({"amount": 60.25});
        assert_eq!(amount_at(Some(&tx)).as_deref(), Some("60.25"));
        let tx = serde_json::json!({"amount": "321.23"});
        assert_eq!(amount_at(Some(&tx)).as_deref(), Some("321.23"));
        let tx = serde_json::json!({});
        assert_eq!(amount_at(Some(&tx)), None);
    }
}
