use crate::domain::cancel::CancelRequest;
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn cancel_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Json(request): Json<CancelRequest>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.proxy_service.cancel(&payment_id, request).await?;
    Ok(Json(body))
}
