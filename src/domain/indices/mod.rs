//! Indices domain — live index quotes for the price ticker.

pub mod client;
pub mod state;

use serde::{Deserialize, Serialize};

pub use state::TickerState;

/// Direction of a quote change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketTrend {
    Up,
    Down,
    Neutral,
}

impl MarketTrend {
    const EPSILON: f64 = 1e-4;

    /// Classify a price change. NaN and near-zero changes are neutral.
    pub fn from_change(change: f64) -> Self {
        if change.is_nan() {
            return Self::Neutral;
        }
        if change > Self::EPSILON {
            Self::Up
        } else if change < -Self::EPSILON {
            Self::Down
        } else {
            Self::Neutral
        }
    }
}

/// Full quote for one index from `GET /market/indices/full`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexQuote {
    pub name: String,
    pub ltp: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub change: f64,
    pub percent_change: f64,
    pub trend: MarketTrend,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_change() {
        assert_eq!(MarketTrend::from_change(12.5), MarketTrend::Up);
        assert_eq!(MarketTrend::from_change(-0.01), MarketTrend::Down);
        assert_eq!(MarketTrend::from_change(0.0), MarketTrend::Neutral);
        assert_eq!(MarketTrend::from_change(0.00005), MarketTrend::Neutral);
        assert_eq!(MarketTrend::from_change(f64::NAN), MarketTrend::Neutral);
    }

    #[test]
    fn test_index_quote_wire_format() {
        let json = r#"{
            "name": "NIFTY 50",
            "ltp": 21731.4,
            "open": 21690.0,
            "high": 21750.25,
            "low": 21650.1,
            "close": 21710.8,
            "change": 20.6,
            "percentChange": 0.095,
            "trend": "UP"
        }"#;
        let quote: IndexQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.name, "NIFTY 50");
        assert_eq!(quote.trend, MarketTrend::Up);
        assert_eq!(quote.percent_change, 0.095);
    }
}
