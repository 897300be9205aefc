use anyhow::Result;
use sqlx::SqlitePool;

pub struct AuthorizationRecordInput {
    pub merchant_id: String,
    pub authorization_id: String,
    pub payment_id: Option<String>,
    pub transaction_id: Option<String>,
    pub status: String,
    /// AUTHORIZATION or PRE_AUTHORIZATION
    pub auth_type: String,
    pub raw_response: serde_json::Value,
}

#[derive(Clone)]
pub struct AuthorizationsRepo {
    pub pool: SqlitePool,
}

impl AuthorizationsRepo {
    pub async fn record_authorization(&self, data: &AuthorizationRecordInput) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO authorizations (merchant_id, authorization_id, payment_id, transaction_id, status, auth_type, raw_response, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.merchant_id)
        .bind(&data.authorization_id)
        .bind(&data.payment_id)
        .bind(&data.transaction_id)
        .bind(&data.status)
        .bind(&data.auth_type)
        .bind(data.raw_response.to_string())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
