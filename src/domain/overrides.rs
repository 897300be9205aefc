use crate::domain::authorization::AuthorizationRequest;
use crate::domain::capture::{CaptureAmount, CaptureRequest};
use serde::Deserialize;

/// Sparse query-parameter overrides for an authorization body. Intended as
/// a test/demo convenience, not part of the payment contract.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthorizationOverrides {
    pub amount_value: Option<i64>,
    pub amount_currency: Option<String>,
    pub intent: Option<String>,
    pub card_number: Option<String>,
    pub card_cvv: Option<String>,
    pub card_expiration_month: Option<String>,
    pub card_expiration_year: Option<String>,
    pub card_holder_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptureOverrides {
    pub value: Option<f64>,
    pub currency: Option<String>,
}

pub fn apply_authorization_overrides(
    base: AuthorizationRequest,
    overrides: &AuthorizationOverrides,
) -> AuthorizationRequest {
    let mut merged = base;

    if let Some(value) = overrides.amount_value {
        merged.amount.value = value;
    }
    if let Some(currency) = &overrides.amount_currency {
        merged.amount.currency = currency.clone();
    }
    if let Some(intent) = &overrides.intent {
        merged.intent = intent.clone();
    }

    let card = &mut merged.instrument.card;
    if let Some(number) = &overrides.card_number {
        card.number = number.clone();
    }
    if let Some(cvv) = &overrides.card_cvv {
        card.cvv = cvv.clone();
    }
    if let Some(month) = &overrides.card_expiration_month {
        card.expiration_month = month.clone();
    }
    if let Some(year) = &overrides.card_expiration_year {
        card.expiration_year = year.clone();
    }
    if let Some(name) = &overrides.card_holder_name {
        card.holder_name = name.clone();
    }

    merged
}

/// A `value` override constructs an amount even when the body omitted one;
/// a lone `currency` override with no base amount is ignored.
pub fn apply_capture_overrides(base: CaptureRequest, overrides: &CaptureOverrides) -> CaptureRequest {
    let amount = match (base.amount, overrides.value, &overrides.currency) {
        (Some(mut amount), value, currency) => {
            if let Some(value) = value {
                amount.value = value;
            }
            if let Some(currency) = currency {
                amount.currency = currency.clone();
            }
            Some(amount)
        }
        (None, Some(value), currency) => Some(CaptureAmount {
            value,
            currency: currency.clone().unwrap_or_else(|| "USD".to_string()),
        }),
        (None, None, _) => None,
    };

    CaptureRequest { amount }
}
