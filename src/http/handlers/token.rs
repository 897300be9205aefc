use crate::error::GatewayError;
use crate::AppState;
use axum::Json;
use axum::extract::State;
use serde_json::Value;

/// Validates the configured client credentials by performing a live
/// client-credentials exchange; never returns the full token.
pub async fn token_check(State(state): State<AppState>) -> Result<Json<Value>, GatewayError> {
    let (access_token, expires_in) = state.tokens.acquire_token().await?;
    let prefix: String = access_token.chars().take(20).collect();
    Ok(Json(serde_json::json!({
        "status": "ok",
        "token_prefix": format!("{prefix}..."),
        "expires_in": expires_in,
    })))
}
