use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Amount {
    pub value: i64,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    pub number: String,
    pub cvv: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub holder_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instrument {
    #[serde(rename = "type", default = "default_instrument_type")]
    pub instrument_type: String,
    pub card: Card,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureDirective {
    #[serde(default = "default_capture_mode")]
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_after: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Installments {
    #[serde(default = "default_installments_quantity")]
    pub quantity: u32,
    #[serde(rename = "type", default = "default_installments_type")]
    pub installments_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeDs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cavv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ds_transaction_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceAmount {
    pub currency: String,
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCompliance {
    pub laws: Vec<String>,
    pub taxable_amount: ComplianceAmount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorizationRequest {
    #[serde(default = "default_intent")]
    pub intent: String,
    pub amount: Amount,
    pub instrument: Instrument,
    pub merchant_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default = "default_entry_mode")]
    pub entry_mode: String,
    #[serde(default = "default_order_type")]
    pub order_type: String,
    #[serde(default = "default_initiator")]
    pub initiator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture: Option<CaptureDirective>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installments: Option<Installments>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_ds: Option<ThreeDs>,
    #[serde(default = "default_eci")]
    pub eci: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_compliance: Option<Vec<TransactionCompliance>>,
}

fn default_intent() -> String {
    "authorization".to_string()
}

fn default_instrument_type() -> String {
    "CARD".to_string()
}

fn default_capture_mode() -> String {
    "AUTOMATIC".to_string()
}

fn default_installments_quantity() -> u32 {
    1
}

fn default_installments_type() -> String {
    "issuer-financed".to_string()
}

fn default_entry_mode() -> String {
    "contactless".to_string()
}

fn default_order_type() -> String {
    "purchase".to_string()
}

fn default_initiator() -> String {
    "merchant".to_string()
}

fn default_eci() -> String {
    "05".to_string()
}
