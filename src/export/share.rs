//! Shareable budget links
//!
//! Encodes `{title, items, totals}` as base64 JSON appended to a URL as a
//! `shared` query parameter, and decodes such a parameter back into the
//! payload so links produced here can be consumed here.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{BalanceBeamError, BalanceBeamResult};
use crate::models::{BudgetItem, Totals};

/// The shared portion of a budget: title, items, and computed totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub items: Vec<BudgetItem>,
    pub totals: Totals,
}

/// Encode a payload into a shareable URL
///
/// Refused when the payload has no items.
pub fn encode_share_url(base_url: &str, payload: &SharePayload) -> BalanceBeamResult<String> {
    if payload.items.is_empty() {
        return Err(BalanceBeamError::EmptyBudget);
    }

    let json = serde_json::to_string(payload)?;
    let encoded = STANDARD.encode(json);
    Ok(format!("{}?shared={}", base_url.trim_end_matches('/'), encoded))
}

/// Decode a `shared` query parameter value back into its payload
pub fn decode_share_param(param: &str) -> BalanceBeamResult<SharePayload> {
    let bytes = STANDARD
        .decode(param)
        .map_err(|e| BalanceBeamError::Export(format!("Invalid share parameter: {}", e)))?;
    let json = String::from_utf8(bytes)
        .map_err(|e| BalanceBeamError::Export(format!("Invalid share parameter: {}", e)))?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetItem, ItemKind};

    fn sample_payload() -> SharePayload {
        let items = vec![
            BudgetItem::new("Salary", 5000.0, ItemKind::Income),
            BudgetItem::new("Rent", 1200.0, ItemKind::Expense),
        ];
        let totals = Totals::from_items(&items, 1000.0);
        SharePayload {
            title: "Monthly Budget".to_string(),
            items,
            totals,
        }
    }

    #[test]
    fn test_share_url_shape() {
        let url = encode_share_url("https://balancebeam.app", &sample_payload()).unwrap();
        assert!(url.starts_with("https://balancebeam.app?shared="));
        // Only the base64 alphabet after the parameter
        let param = url.split("?shared=").nth(1).unwrap();
        assert!(!param.is_empty());
        assert!(param
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '/' || c == '='));
    }

    #[test]
    fn test_round_trip() {
        let payload = sample_payload();
        let url = encode_share_url("https://balancebeam.app", &payload).unwrap();
        let param = url.split("?shared=").nth(1).unwrap();

        let decoded = decode_share_param(param).unwrap();
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_empty_payload_is_refused() {
        let payload = SharePayload {
            title: "Empty".to_string(),
            items: vec![],
            totals: Totals::from_items(&[], 1000.0),
        };
        assert!(matches!(
            encode_share_url("https://balancebeam.app", &payload),
            Err(BalanceBeamError::EmptyBudget)
        ));
    }

    #[test]
    fn test_garbage_parameter_is_an_error() {
        assert!(decode_share_param("!!!not-base64!!!").is_err());
        // Valid base64 but not JSON
        let param = STANDARD.encode("hello");
        assert!(decode_share_param(&param).is_err());
    }
}
