use crate::domain::refund::RefundRequest;
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn refund_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Json(request): Json<RefundRequest>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.proxy_service.refund(&payment_id, request).await?;
    Ok(Json(body))
}
