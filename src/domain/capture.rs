use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureAmount {
    pub value: f64,
    pub currency: String,
}

/// Omitting `amount` asks the upstream to capture the full pending amount.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<CaptureAmount>,
}
