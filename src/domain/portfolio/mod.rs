//! Portfolio domain — broker holdings and user-tracked assets.

pub mod client;

use crate::shared::SymbolToken;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A broker holding from `GET /dashboard/portfolio`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub trading_symbol: String,
    pub symbol_token: SymbolToken,
    pub quantity: i32,
    pub average_price: f64,
    pub ltp: f64,
    pub pnl: f64,
    pub profit_percentage: f64,
}

/// A manually tracked asset from `GET /portfolio`, with values the backend
/// computes from the live price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAsset {
    pub id: i64,
    pub symbol: String,
    pub asset_type: String,
    pub quantity: String,
    pub asset_price: String,
    #[serde(default)]
    pub current_price: Option<Decimal>,
    #[serde(default)]
    pub total_value: Option<Decimal>,
    #[serde(default)]
    pub profit_and_loss: Option<Decimal>,
}

/// Request body for `POST /portfolio/assets`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddAssetRequest {
    pub symbol: String,
    pub asset_type: String,
    pub quantity: String,
    pub asset_price: String,
}
