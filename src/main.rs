use axum::routing::{get, post};
use axum::Router;
use payments_proxy::config::{AppConfig, Mode};
use payments_proxy::gateways::live::LiveGateway;
use payments_proxy::gateways::simulated::SimulatedGateway;
use payments_proxy::gateways::token::TokenManager;
use payments_proxy::gateways::ProcessorGateway;
use payments_proxy::repo::authorizations_repo::AuthorizationsRepo;
use payments_proxy::repo::cancellations_repo::CancellationsRepo;
use payments_proxy::repo::captures_repo::CapturesRepo;
use payments_proxy::repo::payments_repo::PaymentsRepo;
use payments_proxy::service::proxy_service::ProxyService;
use payments_proxy::AppState;
use sqlx::sqlite::SqlitePoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let http = reqwest::Client::new();
    let tokens = Arc::new(TokenManager::new(&cfg, http.clone()));

    let gateway: Arc<dyn ProcessorGateway> = match cfg.mode {
        Mode::Simulated => Arc::new(SimulatedGateway),
        Mode::Live => Arc::new(LiveGateway::new(&cfg, http, tokens.clone())),
    };

    let proxy_service = ProxyService {
        gateway,
        payments_repo: PaymentsRepo { pool: pool.clone() },
        authorizations_repo: AuthorizationsRepo { pool: pool.clone() },
        cancellations_repo: CancellationsRepo { pool: pool.clone() },
        captures_repo: CapturesRepo { pool },
        merchant_id: cfg.merchant_id.clone(),
    };

    let state = AppState {
        proxy_service,
        tokens,
    };

    let app = Router::new()
        .route("/health", get(payments_proxy::http::handlers::ops::health))
        .route(
            "/v1/authorization",
            post(payments_proxy::http::handlers::authorization::create_authorization),
        )
        .route(
            "/v1/preauthorization",
            post(payments_proxy::http::handlers::authorization::create_preauthorization),
        )
        .route(
            "/v1/capture/:payment_id",
            post(payments_proxy::http::handlers::capture::capture_payment),
        )
        .route(
            "/v1/cancel/:payment_id",
            post(payments_proxy::http::handlers::cancel::cancel_payment),
        )
        .route(
            "/v1/refund/:payment_id",
            post(payments_proxy::http::handlers::refund::refund_payment),
        )
        .route(
            "/v1/ecommerce/checkout",
            post(payments_proxy::http::handlers::checkout::ecommerce_checkout),
        )
        .route(
            "/v1/organizations",
            get(payments_proxy::http::handlers::directory::list_organizations),
        )
        .route(
            "/v1/merchants",
            get(payments_proxy::http::handlers::directory::list_merchants),
        )
        .route(
            "/v1/token/check",
            get(payments_proxy::http::handlers::token::token_check),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!(mode = cfg.mode.as_str(), "listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
