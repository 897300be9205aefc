pub mod config;
pub mod error;
pub mod domain {
    pub mod authorization;
    pub mod cancel;
    pub mod capture;
    pub mod checkout;
    pub mod overrides;
    pub mod refund;
}
pub mod gateways;
pub mod http {
    pub mod handlers {
        pub mod authorization;
        pub mod cancel;
        pub mod capture;
        pub mod checkout;
        pub mod directory;
        pub mod ops;
        pub mod refund;
        pub mod token;
    }
}
pub mod repo {
    pub mod authorizations_repo;
    pub mod cancellations_repo;
    pub mod captures_repo;
    pub mod payments_repo;
}
pub mod service {
    pub mod proxy_service;
}

#[derive(Clone)]
pub struct AppState {
    pub proxy_service: service::proxy_service::ProxyService,
    pub tokens: std::sync::Arc<gateways::token::TokenManager>,
}
