#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Simulated,
    Live,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Simulated => "SIMULATED",
            Mode::Live => "LIVE",
        }
    }

    fn parse(s: &str) -> Mode {
        match s.trim().to_uppercase().as_str() {
            "LIVE" => Mode::Live,
            _ => Mode::Simulated,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub mode: Mode,
    pub upstream_base_url: String,
    pub static_access_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub merchant_id: Option<String>,
    pub bind_addr: String,
    pub database_url: String,
    pub upstream_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            mode: Mode::parse(
                &std::env::var("PROCESSOR_MODE").unwrap_or_else(|_| "SIMULATED".to_string()),
            ),
            upstream_base_url: std::env::var("PROCESSOR_BASE_URL")
                .unwrap_or_else(|_| "https://sandbox.processor.example".to_string()),
            static_access_token: std::env::var("PROCESSOR_ACCESS_TOKEN").ok(),
            client_id: std::env::var("PROCESSOR_CLIENT_ID").ok(),
            client_secret: std::env::var("PROCESSOR_CLIENT_SECRET").ok(),
            merchant_id: std::env::var("PROCESSOR_MERCHANT_ID").ok(),
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://payments_audit.db?mode=rwc".to_string()),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(20),
        }
    }
}
