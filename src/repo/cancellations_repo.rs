use anyhow::Result;
use sqlx::SqlitePool;

pub struct CancellationRecordInput {
    pub payment_id: String,
    pub transaction_id: Option<String>,
    pub status: String,
    pub raw_response: serde_json::Value,
}

#[derive(Clone)]
pub struct CancellationsRepo {
    pub pool: SqlitePool,
}

impl CancellationsRepo {
    pub async fn record_cancellation(&self, data: &CancellationRecordInput) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO cancellations (payment_id, transaction_id, status, raw_response, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.payment_id)
        .bind(&data.transaction_id)
        .bind(&data.status)
        .bind(data.raw_response.to_string())
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
