use anyhow::Result;
use sqlx::SqlitePool;

pub struct CaptureRecordInput {
    pub payment_id: String,
    pub transaction_id: Option<String>,
    /// Stringified captured amount; absent for a full capture the upstream
    /// did not echo back.
    pub amount: Option<String>,
    pub status: String,
    pub raw_response: serde_json::Value,
}

#[derive(Clone)]
pub struct CapturesRepo {
    pub pool: SqlitePool,
}

impl CapturesRepo {
    pub async fn record_capture(&self, data: &CaptureRecordInput) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO captures (payment_id, transaction_id, amount, status, raw_response, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.payment_id)
        .bind(&data.transaction_id)
        .bind(&data.amount)
        .bind(&data.status)
        .bind(data.raw_response.to_string())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
