use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutCard {
    pub number: String,
    pub cvv: String,
    pub exp_month: String,
    pub exp_year: String,
    pub holder_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    pub card: CheckoutCard,
    #[serde(default = "default_capture_mode")]
    pub capture_mode: String,
}

fn default_capture_mode() -> String {
    "AUTOMATIC".to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub order_id: String,
    pub payment_id: String,
    pub transaction_id: String,
    pub status: String,
    pub mode: String,
}
