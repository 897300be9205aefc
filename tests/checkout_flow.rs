use payments_proxy::domain::checkout::CheckoutRequest;
use payments_proxy::error::GatewayError;
use payments_proxy::gateways::simulated::SimulatedGateway;
use payments_proxy::gateways::ProcessorGateway;
use payments_proxy::repo::authorizations_repo::AuthorizationsRepo;
use payments_proxy::repo::cancellations_repo::CancellationsRepo;
use payments_proxy::repo::captures_repo::CapturesRepo;
use payments_proxy::repo::payments_repo::PaymentsRepo;
use payments_proxy::service::proxy_service::ProxyService;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;

async fn audit_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn service(pool: SqlitePool, merchant_id: Option<&str>) -> ProxyService {
    let gateway: Arc<dyn ProcessorGateway> = Arc::new(SimulatedGateway);
    ProxyService {
        gateway,
        payments_repo: PaymentsRepo { pool: pool.clone() },
        authorizations_repo: AuthorizationsRepo { pool: pool.clone() },
        cancellations_repo: CancellationsRepo { pool: pool.clone() },
        captures_repo: CapturesRepo { pool },
        merchant_id: merchant_id.map(str::to_string),
    }
}

fn checkout_body(order_id: &str) -> CheckoutRequest {
    serde_json::from_value(serde_json::json!({
        "order_id": order_id,
        "amount": 100000,
        "currency": "COP",
        "card": {
            "number": "5191872272166422",
            "cvv": "917",
            "exp_month": "12",
            "exp_year": "26",
            "holder_name": "ALEJANDRO BOGOTA"
        },
        "capture_mode": "AUTOMATIC"
    }))
    .unwrap()
}

#[tokio::test]
async fn checkout_returns_the_distilled_payment_summary() {
    let svc = service(audit_pool().await, Some("merchant_123"));
    let response = svc.checkout(checkout_body("ORD-1")).await.unwrap();

    assert_eq!(response.order_id, "ORD-1");
    assert!(!response.payment_id.is_empty());
    assert!(!response.transaction_id.is_empty());
    assert_eq!(response.status, "APPROVED");
    assert_eq!(response.mode, "SIMULATED");
}

#[tokio::test]
async fn checkout_appends_a_matching_payment_row() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Some("merchant_123"));
    let response = svc.checkout(checkout_body("ORD-1")).await.unwrap();

    let row: (String, String, String, String, String) = sqlx::query_as(
        "SELECT order_id, payment_id, transaction_id, status, raw_response FROM payments",
    )
    .fetch_one(&pool)
    .await
    .unwrap();

    assert_eq!(row.0, "ORD-1");
    assert_eq!(row.1, response.payment_id);
    assert_eq!(row.2, response.transaction_id);
    assert_eq!(row.3, response.status);

    // The archived body is the verbatim upstream payload.
    let raw: serde_json::Value = serde_json::from_str(&row.4).unwrap();
    assert_eq!(raw["payment_id"], response.payment_id.as_str());
}

#[tokio::test]
async fn checkout_timestamps_are_present_and_ordered() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Some("merchant_123"));
    svc.checkout(checkout_body("ORD-1")).await.unwrap();
    svc.checkout(checkout_body("ORD-2")).await.unwrap();

    let rows: Vec<(String,)> =
        sqlx::query_as("SELECT created_at FROM payments ORDER BY id ASC")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(rows.len(), 2);

    let first = chrono::DateTime::parse_from_rfc3339(&rows[0].0).unwrap();
    let second = chrono::DateTime::parse_from_rfc3339(&rows[1].0).unwrap();
    assert!(first <= second);
}

#[tokio::test]
async fn checkout_without_configured_merchant_is_a_configuration_error() {
    let svc = service(audit_pool().await, None);
    let err = svc.checkout(checkout_body("ORD-1")).await.unwrap_err();
    assert!(matches!(err, GatewayError::Config(_)));

    use axum::response::IntoResponse;
    assert_eq!(
        err.into_response().status(),
        axum::http::StatusCode::INTERNAL_SERVER_ERROR
    );
}
