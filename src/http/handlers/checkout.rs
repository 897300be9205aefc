use crate::domain::checkout::{CheckoutRequest, CheckoutResponse};
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::State;
use axum::Json;

pub async fn ecommerce_checkout(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, GatewayError> {
    let response = state.proxy_service.checkout(request).await?;
    Ok(Json(response))
}
