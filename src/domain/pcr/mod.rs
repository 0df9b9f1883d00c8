//! PCR domain — put-call-ratio sentiment classification.

pub mod classify;
pub mod client;

use serde::{Deserialize, Serialize};

pub use classify::{clean_trading_symbol, classify, TOP_PER_BUCKET};

/// A single instrument's put-call ratio after cleaning and filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcrRecord {
    pub trading_symbol: String,
    pub pcr: f64,
}

/// Sentiment bucket for a put-call ratio.
///
/// Closed enumeration with non-overlapping boundaries; `pcr ≤ 0` belongs to
/// no bucket at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PcrCategory {
    Oversold,
    Bearish,
    Neutral,
    Bullish,
}

impl PcrCategory {
    /// Bucket a raw PCR value. `None` for non-positive (or NaN) values.
    pub fn of(pcr: f64) -> Option<Self> {
        if pcr > 0.0 && pcr < 0.4 {
            Some(Self::Oversold)
        } else if pcr >= 0.4 && pcr < 0.7 {
            Some(Self::Bearish)
        } else if pcr >= 0.7 && pcr <= 1.0 {
            Some(Self::Neutral)
        } else if pcr > 1.0 {
            Some(Self::Bullish)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Oversold => "Oversold",
            Self::Bearish => "Bearish",
            Self::Neutral => "Neutral",
            Self::Bullish => "Bullish",
        }
    }
}

impl std::fmt::Display for PcrCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top instruments per sentiment bucket, each bounded to
/// [`TOP_PER_BUCKET`] entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegregatedPcr {
    pub oversold: Vec<PcrRecord>,
    pub bearish: Vec<PcrRecord>,
    pub neutral: Vec<PcrRecord>,
    pub bullish: Vec<PcrRecord>,
}

/// Raw PCR row from `GET /dashboard/pcr`. `pcr` may be null.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PcrRow {
    #[serde(default)]
    pub trading_symbol: String,
    #[serde(default)]
    pub pcr: Option<f64>,
}
