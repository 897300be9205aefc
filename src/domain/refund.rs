use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundAmount {
    pub value: f64,
    pub currency: String,
}

/// Unlike capture, `amount` is mandatory for a refund; a body without it
/// fails deserialization before any upstream call is made.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    pub amount: RefundAmount,
}
