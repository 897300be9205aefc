use payments_proxy::config::Mode;
use payments_proxy::domain::authorization::AuthorizationRequest;
use payments_proxy::domain::cancel::CancelRequest;
use payments_proxy::domain::capture::CaptureRequest;
use payments_proxy::domain::overrides::AuthorizationOverrides;
use payments_proxy::domain::refund::RefundRequest;
use payments_proxy::error::GatewayError;
use payments_proxy::gateways::simulated::SimulatedGateway;
use payments_proxy::gateways::{GatewayResult, ProcessorGateway};
use payments_proxy::repo::authorizations_repo::AuthorizationsRepo;
use payments_proxy::repo::cancellations_repo::CancellationsRepo;
use payments_proxy::repo::captures_repo::CapturesRepo;
use payments_proxy::repo::payments_repo::PaymentsRepo;
use payments_proxy::service::proxy_service::ProxyService;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::sync::Mutex;

async fn audit_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::migrate!("./migrations").run(&pool).await.unwrap();
    pool
}

fn service(pool: SqlitePool, gateway: Arc<dyn ProcessorGateway>) -> ProxyService {
    ProxyService {
        gateway,
        payments_repo: PaymentsRepo { pool: pool.clone() },
        authorizations_repo: AuthorizationsRepo { pool: pool.clone() },
        cancellations_repo: CancellationsRepo { pool: pool.clone() },
        captures_repo: CapturesRepo { pool },
        merchant_id: Some("merchant_123".to_string()),
    }
}

fn authorization_body(capture_mode: &str) -> AuthorizationRequest {
    serde_json::from_value(serde_json::json!({
        "amount": {"value": 100000, "currency": "COP"},
        "instrument": {"card": {
            "number": "4111111111111111",
            "cvv": "123",
            "expiration_month": "12",
            "expiration_year": "2030",
            "holder_name": "JANE DOE"
        }},
        "merchant_id": "merchant_123",
        "capture": {"mode": capture_mode}
    }))
    .unwrap()
}

/// Records the request that actually reached the gateway so tests can
/// assert on server-forced fields.
struct RecordingGateway {
    seen: Mutex<Option<AuthorizationRequest>>,
}

#[async_trait::async_trait]
impl ProcessorGateway for RecordingGateway {
    async fn authorize(&self, request: &AuthorizationRequest) -> Result<GatewayResult, GatewayError> {
        *self.seen.lock().unwrap() = Some(request.clone());
        SimulatedGateway.authorize(request).await
    }

    async fn cancel(
        &self,
        payment_id: &str,
        request: &CancelRequest,
    ) -> Result<GatewayResult, GatewayError> {
        SimulatedGateway.cancel(payment_id, request).await
    }

    async fn refund(
        &self,
        payment_id: &str,
        request: &RefundRequest,
    ) -> Result<GatewayResult, GatewayError> {
        SimulatedGateway.refund(payment_id, request).await
    }

    async fn capture(
        &self,
        payment_id: &str,
        request: &CaptureRequest,
    ) -> Result<GatewayResult, GatewayError> {
        SimulatedGateway.capture(payment_id, request).await
    }

    async fn list_organizations(&self) -> Result<GatewayResult, GatewayError> {
        SimulatedGateway.list_organizations().await
    }

    async fn list_merchants(
        &self,
        organization_id: &str,
        page: u32,
        page_size: u32,
    ) -> Result<GatewayResult, GatewayError> {
        SimulatedGateway.list_merchants(organization_id, page, page_size).await
    }
}

#[tokio::test]
async fn authorize_tags_the_response_with_simulated_mode() {
    let svc = service(audit_pool().await, Arc::new(SimulatedGateway));
    let body = svc
        .authorize(authorization_body("AUTOMATIC"), AuthorizationOverrides::default())
        .await
        .unwrap();

    assert_eq!(body["mode"], Mode::Simulated.as_str());
    assert!(!body["payment_id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn repeated_authorizations_do_not_collide_on_identifiers() {
    let svc = service(audit_pool().await, Arc::new(SimulatedGateway));
    let mut seen = std::collections::HashSet::new();
    for _ in 0..10 {
        let body = svc
            .authorize(authorization_body("AUTOMATIC"), AuthorizationOverrides::default())
            .await
            .unwrap();
        assert!(seen.insert(body["payment_id"].as_str().unwrap().to_string()));
    }
}

#[tokio::test]
async fn preauthorization_forces_intent_and_manual_capture() {
    let recording = Arc::new(RecordingGateway {
        seen: Mutex::new(None),
    });
    let svc = service(audit_pool().await, recording.clone());

    // Caller explicitly asks for AUTOMATIC; the server must override it.
    svc.preauthorize(authorization_body("AUTOMATIC")).await.unwrap();

    let seen = recording.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.intent, "pre-authorization");
    assert_eq!(seen.capture.unwrap().mode, "MANUAL");
}

#[tokio::test]
async fn authorization_overrides_reach_the_gateway() {
    let recording = Arc::new(RecordingGateway {
        seen: Mutex::new(None),
    });
    let svc = service(audit_pool().await, recording.clone());

    let overrides = AuthorizationOverrides {
        amount_currency: Some("USD".to_string()),
        card_holder_name: Some("JOHN ROE".to_string()),
        ..AuthorizationOverrides::default()
    };
    svc.authorize(authorization_body("AUTOMATIC"), overrides)
        .await
        .unwrap();

    let seen = recording.seen.lock().unwrap().clone().unwrap();
    assert_eq!(seen.amount.currency, "USD");
    assert_eq!(seen.instrument.card.holder_name, "JOHN ROE");
}

#[tokio::test]
async fn authorization_appends_an_audit_row() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Arc::new(SimulatedGateway));
    svc.authorize(authorization_body("AUTOMATIC"), AuthorizationOverrides::default())
        .await
        .unwrap();

    let row: (String, String, String) = sqlx::query_as(
        "SELECT merchant_id, auth_type, status FROM authorizations",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(row.0, "merchant_123");
    assert_eq!(row.1, "AUTHORIZATION");
    assert_eq!(row.2, "APPROVED");
}

#[tokio::test]
async fn preauthorization_audit_row_carries_its_subtype() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Arc::new(SimulatedGateway));
    svc.preauthorize(authorization_body("AUTOMATIC")).await.unwrap();

    let (auth_type,): (String,) =
        sqlx::query_as("SELECT auth_type FROM authorizations")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(auth_type, "PRE_AUTHORIZATION");
}

#[tokio::test]
async fn cancel_appends_a_cancellation_row() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Arc::new(SimulatedGateway));
    let body = svc
        .cancel("pay-42", CancelRequest { taxes: None })
        .await
        .unwrap();
    assert_eq!(body["mode"], "SIMULATED");

    let row: (String, Option<String>, String) =
        sqlx::query_as("SELECT payment_id, transaction_id, status FROM cancellations")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(row.0, "pay-42");
    assert!(row.1.unwrap().starts_with("trx-"));
    assert_eq!(row.2, "APPROVED");
}

#[tokio::test]
async fn full_capture_records_the_placeholder_amount() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Arc::new(SimulatedGateway));
    svc.capture("pay-7", CaptureRequest { amount: None }, Default::default())
        .await
        .unwrap();

    let row: (String, Option<String>, String) =
        sqlx::query_as("SELECT payment_id, amount, status FROM captures")
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(row.0, "pay-7");
    assert_eq!(row.1.as_deref(), Some("100.0"));
    assert_eq!(row.2, "PENDING");
}

#[tokio::test]
async fn refund_does_not_touch_the_audit_store() {
    let pool = audit_pool().await;
    let svc = service(pool.clone(), Arc::new(SimulatedGateway));
    let request: RefundRequest =
        serde_json::from_value(serde_json::json!({"amount": {"value": 60.25, "currency": "USD"}}))
            .unwrap();
    let body = svc.refund("pay-3", request).await.unwrap();
    assert_eq!(body["mode"], "SIMULATED");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn merchant_listing_clamps_pagination() {
    let svc = service(audit_pool().await, Arc::new(SimulatedGateway));
    let body = svc
        .list_merchants("org-1", Some(0), Some(500))
        .await
        .unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 100);

    let body = svc.list_merchants("org-1", None, None).await.unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 20);
}
