use crate::domain::capture::CaptureRequest;
use crate::domain::overrides::CaptureOverrides;
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

pub async fn capture_payment(
    State(state): State<AppState>,
    Path(payment_id): Path<String>,
    Query(overrides): Query<CaptureOverrides>,
    Json(request): Json<CaptureRequest>,
) -> Result<Json<Value>, GatewayError> {
    let body = state
        .proxy_service
        .capture(&payment_id, request, overrides)
        .await?;
    Ok(Json(body))
}
