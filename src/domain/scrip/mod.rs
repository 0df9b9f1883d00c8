//! Scrip domain — instrument search and autocomplete suggestions.

pub mod client;

use crate::shared::SymbolToken;
use serde::{Deserialize, Serialize};

/// One autocomplete suggestion from `GET /scriplist/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scrip {
    pub token: SymbolToken,
    /// Raw exchange symbol, e.g. `"RELIANCE-EQ"`. Older backend builds omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Display name with the series suffix removed, e.g. `"RELIANCE"`.
    pub name: String,
}

impl Scrip {
    /// Display name derived from a raw exchange symbol (`"TCS-EQ"` → `"TCS"`).
    pub fn display_name(symbol: &str) -> &str {
        symbol.strip_suffix("-EQ").unwrap_or(symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_strips_series() {
        assert_eq!(Scrip::display_name("RELIANCE-EQ"), "RELIANCE");
        assert_eq!(Scrip::display_name("NIFTY 50"), "NIFTY 50");
    }

    #[test]
    fn test_scrip_without_symbol_field() {
        let scrip: Scrip = serde_json::from_str(r#"{"token": "2885", "name": "RELIANCE"}"#).unwrap();
        assert!(scrip.symbol.is_none());
        assert_eq!(scrip.name, "RELIANCE");
    }
}
