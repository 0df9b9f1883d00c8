//! Charts sub-client — price history fetch + normalization.

use crate::client::MonetaryClient;
use crate::domain::chart::wire::PriceBar;
use crate::domain::chart::{normalize, ChartPoint};
use crate::error::SdkError;
use crate::shared::{Exchange, Interval, SymbolToken};

/// Sub-client for chart data.
pub struct Charts<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Charts<'a> {
    /// Fetch raw OHLC bars for a scrip. Dates use the backend's
    /// `YYYY-MM-DD HH:MM` convention.
    pub async fn bars(
        &self,
        exchange: Exchange,
        symbol_token: &SymbolToken,
        interval: Interval,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<PriceBar>, SdkError> {
        let rows = self
            .client
            .http
            .get_price_history(exchange, symbol_token, interval, from_date, to_date)
            .await?;
        Ok(rows.into_vec())
    }

    /// Fetch bars and normalize them into a renderer-ready series
    /// (sorted ascending, one point per second, close as value).
    pub async fn series(
        &self,
        exchange: Exchange,
        symbol_token: &SymbolToken,
        interval: Interval,
        from_date: &str,
        to_date: &str,
    ) -> Result<Vec<ChartPoint>, SdkError> {
        let bars = self
            .bars(exchange, symbol_token, interval, from_date, to_date)
            .await?;
        Ok(normalize(&bars)?)
    }

    /// Previous session close for a scrip: the last bar's close in the
    /// given window, if any. The ticker uses this as its change reference.
    pub async fn last_close(
        &self,
        exchange: Exchange,
        symbol_token: &SymbolToken,
        from_date: &str,
        to_date: &str,
    ) -> Result<Option<f64>, SdkError> {
        let series = self
            .series(exchange, symbol_token, Interval::Day1, from_date, to_date)
            .await?;
        Ok(series.last().map(|point| point.value))
    }
}
