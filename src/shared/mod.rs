//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize
//! identically to the raw format the backend sends, so they can be used
//! directly in wire types without conversion overhead.

pub mod serde_util;

pub use serde_util::Rows;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── SymbolToken ─────────────────────────────────────────────────────────────

/// Newtype for exchange instrument tokens (e.g. `"99926000"` for NIFTY 50).
///
/// Tokens are opaque identifiers assigned by the exchange; the SDK never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolToken(String);

impl SymbolToken {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SymbolToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for SymbolToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for SymbolToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for SymbolToken {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SymbolToken(s.to_string()))
    }
}

impl Serialize for SymbolToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SymbolToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SymbolToken(s))
    }
}

// ─── Exchange ────────────────────────────────────────────────────────────────

/// Exchange segment a scrip trades on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    #[default]
    #[serde(rename = "NSE")]
    Nse,
    #[serde(rename = "BSE")]
    Bse,
    /// NSE futures & options segment.
    #[serde(rename = "NFO")]
    Nfo,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nse => "NSE",
            Self::Bse => "BSE",
            Self::Nfo => "NFO",
        }
    }
}

impl std::fmt::Display for Exchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Interval ────────────────────────────────────────────────────────────────

/// Price history candle interval, in the backend's wire spelling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    #[serde(rename = "ONE_MINUTE")]
    Minute1,
    #[serde(rename = "FIVE_MINUTE")]
    Minute5,
    #[serde(rename = "FIFTEEN_MINUTE")]
    Minute15,
    #[serde(rename = "ONE_HOUR")]
    Hour1,
    #[default]
    #[serde(rename = "ONE_DAY")]
    Day1,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minute1 => "ONE_MINUTE",
            Self::Minute5 => "FIVE_MINUTE",
            Self::Minute15 => "FIFTEEN_MINUTE",
            Self::Hour1 => "ONE_HOUR",
            Self::Day1 => "ONE_DAY",
        }
    }

    /// Duration of one candle in seconds.
    pub fn seconds(&self) -> u64 {
        match self {
            Self::Minute1 => 60,
            Self::Minute5 => 300,
            Self::Minute15 => 900,
            Self::Hour1 => 3600,
            Self::Day1 => 86400,
        }
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_token_serde() {
        let token = SymbolToken::from("99926000");
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, "\"99926000\"");
        let back: SymbolToken = serde_json::from_str(&json).unwrap();
        assert_eq!(token, back);
    }

    #[test]
    fn test_exchange_serde() {
        let e: Exchange = serde_json::from_str("\"NFO\"").unwrap();
        assert_eq!(e, Exchange::Nfo);
        assert_eq!(serde_json::to_string(&Exchange::Nse).unwrap(), "\"NSE\"");
    }

    #[test]
    fn test_interval_serde() {
        let i: Interval = serde_json::from_str("\"ONE_DAY\"").unwrap();
        assert_eq!(i, Interval::Day1);
        assert_eq!(i.seconds(), 86400);
        assert_eq!(Interval::Minute5.as_str(), "FIVE_MINUTE");
    }
}
