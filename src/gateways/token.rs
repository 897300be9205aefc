use crate::config::AppConfig;
use crate::error::GatewayError;
use serde_json::Value;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

/// Resolves the bearer token for upstream calls. A statically configured
/// token always wins; otherwise a client-credentials token is acquired and
/// cached until its declared expiry.
pub struct TokenManager {
    http: reqwest::Client,
    base_url: String,
    static_token: Option<String>,
    client_id: Option<String>,
    client_secret: Option<String>,
    timeout: Duration,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenManager {
    pub fn new(cfg: &AppConfig, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: cfg.upstream_base_url.trim_end_matches('/').to_string(),
            static_token: cfg.static_access_token.clone(),
            client_id: cfg.client_id.clone(),
            client_secret: cfg.client_secret.clone(),
            timeout: Duration::from_secs(cfg.upstream_timeout_secs),
            cached: Mutex::new(None),
        }
    }

    pub async fn bearer(&self) -> Result<String, GatewayError> {
        if let Some(token) = &self.static_token {
            return Ok(token.clone());
        }

        let mut guard = self.cached.lock().await;
        if let Some(cached) = guard.as_ref() {
            if Instant::now() < cached.expires_at {
                return Ok(cached.access_token.clone());
            }
        }

        let (access_token, expires_in) = self.acquire_token().await?;
        *guard = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at: Instant::now() + Duration::from_secs(expires_in),
        });
        tracing::info!(expires_in, "acquired upstream access token");
        Ok(access_token)
    }

    /// One client-credentials exchange. No retry: a rejected exchange is a
    /// failed request.
    pub async fn acquire_token(&self) -> Result<(String, u64), GatewayError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or_else(|| GatewayError::Config("PROCESSOR_CLIENT_ID is not set".to_string()))?;
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or_else(|| GatewayError::Config("PROCESSOR_CLIENT_SECRET is not set".to_string()))?;

        let url = format!("{}/oauth/token", self.base_url);
        let payload = serde_json::json!({
            "grant_type": "client_credentials",
            "audience": self.base_url,
            "client_id": client_id,
            "client_secret": client_secret,
        });

        let response = self
            .http
            .post(&url)
            .header("accept", "application/json")
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Auth { body });
        }

        let body: Value = response.json().await?;
        let access_token = body
            .get("access_token")
            .and_then(Value::as_str)
            .ok_or(GatewayError::Incomplete("token response missing access_token"))?
            .to_string();
        let expires_in = body.get("expires_in").and_then(Value::as_u64).unwrap_or(0);

        Ok((access_token, expires_in))
    }
}
