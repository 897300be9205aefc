use crate::domain::authorization::AuthorizationRequest;
use crate::domain::overrides::AuthorizationOverrides;
use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::Value;

pub async fn create_authorization(
    State(state): State<AppState>,
    Query(overrides): Query<AuthorizationOverrides>,
    Json(request): Json<AuthorizationRequest>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.proxy_service.authorize(request, overrides).await?;
    Ok(Json(body))
}

pub async fn create_preauthorization(
    State(state): State<AppState>,
    Json(request): Json<AuthorizationRequest>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.proxy_service.preauthorize(request).await?;
    Ok(Json(body))
}
