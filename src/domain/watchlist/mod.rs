//! Watchlist domain — user-tracked symbols with target prices.

pub mod client;

use crate::shared::SymbolToken;
use serde::{Deserialize, Serialize};

/// A tracked symbol from `GET /watchlist`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    #[serde(default)]
    pub id: Option<i64>,
    pub symbol_token: SymbolToken,
    pub symbol_name: String,
    /// Live price, absent when the feed is down.
    #[serde(default)]
    pub ltp: Option<f64>,
    #[serde(default)]
    pub target_price: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for `POST /watchlist` and `PUT /watchlist/{symbolToken}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistRequest {
    pub symbol_token: SymbolToken,
    pub symbol_name: String,
    pub target_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_format() {
        let json = r#"{
            "id": 7,
            "symbolToken": "2885",
            "symbolName": "RELIANCE",
            "ltp": 2512.0,
            "targetPrice": 2400.0,
            "notes": "buy the dip"
        }"#;
        let entry: WatchlistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.symbol_token.as_str(), "2885");
        assert_eq!(entry.target_price, Some(2400.0));
    }

    #[test]
    fn test_request_omits_empty_notes() {
        let request = WatchlistRequest {
            symbol_token: SymbolToken::from("2885"),
            symbol_name: "RELIANCE".to_string(),
            target_price: 2400.0,
            notes: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("notes"));
        assert!(json.contains("\"symbolToken\":\"2885\""));
    }
}
