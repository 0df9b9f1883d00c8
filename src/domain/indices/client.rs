//! Indices sub-client — live index quotes.

use crate::client::MonetaryClient;
use crate::domain::indices::IndexQuote;
use crate::error::SdkError;
use std::collections::HashMap;

/// Sub-client for market index quotes.
pub struct Indices<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Indices<'a> {
    /// Last traded price per index name — the light payload the ticker polls.
    pub async fn ltp(&self) -> Result<HashMap<String, f64>, SdkError> {
        Ok(self.client.http.get_indices_ltp().await?)
    }

    /// Full OHLC + change quote per index name.
    pub async fn full(&self) -> Result<HashMap<String, IndexQuote>, SdkError> {
        Ok(self.client.http.get_indices_full().await?)
    }
}
