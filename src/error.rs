use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing configuration: {0}")]
    Config(String),

    #[error("token exchange rejected by upstream: {body}")]
    Auth { body: String },

    #[error("upstream call failed: HTTP {status} from {url}: {body}")]
    Upstream { status: u16, url: String, body: String },

    #[error("upstream response incomplete: {0}")]
    Incomplete(&'static str),

    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request body could not be serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Config(_) | GatewayError::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            GatewayError::Config(_) => "CONFIGURATION_ERROR",
            GatewayError::Auth { .. } => "UPSTREAM_AUTH_ERROR",
            GatewayError::Upstream { .. } => "UPSTREAM_CALL_ERROR",
            GatewayError::Incomplete(_) => "INCOMPLETE_UPSTREAM_RESPONSE",
            GatewayError::Transport(_) => "UPSTREAM_TRANSPORT_ERROR",
            GatewayError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed on local configuration");
        }
        let body = serde_json::json!({
            "error": {
                "code": self.code(),
                "message": self.to_string(),
            }
        });
        (status, Json(body)).into_response()
    }
}
