use anyhow::Result;
use sqlx::SqlitePool;

pub struct PaymentRecordInput {
    pub order_id: String,
    pub payment_id: String,
    pub transaction_id: String,
    pub status: String,
    pub raw_response: serde_json::Value,
}

#[derive(Clone)]
pub struct PaymentsRepo {
    pub pool: SqlitePool,
}

impl PaymentsRepo {
    pub async fn record_payment(&self, data: &PaymentRecordInput) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payments (order_id, payment_id, transaction_id, status, raw_response, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&data.order_id)
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
