use crate::error::GatewayError;
use crate::AppState;
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct MerchantListParams {
    pub organization_id: String,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

pub async fn list_organizations(
    State(state): State<AppState>,
) -> Result<Json<Value>, GatewayError> {
    let body = state.proxy_service.list_organizations().await?;
    Ok(Json(body))
}

pub async fn list_merchants(
    State(state): State<AppState>,
    Query(params): Query<MerchantListParams>,
) -> Result<Json<Value>, GatewayError> {
    let body = state
        .proxy_service
        .list_merchants(&params.organization_id, params.page, params.page_size)
        .await?;
    Ok(Json(body))
}
