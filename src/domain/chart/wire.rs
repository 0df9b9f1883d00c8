//! Wire types for price history (REST).

use serde::{Deserialize, Serialize};

/// Raw OHLC bar from `GET /priceHistory`.
///
/// The timestamp is a string because the backend relays whatever the
/// upstream broker feed produced; parsing happens in [`super::normalize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<u64>,
}
