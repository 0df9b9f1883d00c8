//! Watchlist sub-client — CRUD for tracked symbols.

use crate::client::MonetaryClient;
use crate::domain::watchlist::{WatchlistEntry, WatchlistRequest};
use crate::error::SdkError;
use crate::shared::SymbolToken;

/// Sub-client for watchlist operations.
pub struct Watchlist<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Watchlist<'a> {
    pub async fn list(&self) -> Result<Vec<WatchlistEntry>, SdkError> {
        Ok(self.client.http.get_watchlist().await?.into_vec())
    }

    pub async fn add(&self, request: &WatchlistRequest) -> Result<WatchlistEntry, SdkError> {
        Ok(self.client.http.add_watchlist_entry(request).await?)
    }

    pub async fn update(
        &self,
        symbol_token: &SymbolToken,
        request: &WatchlistRequest,
    ) -> Result<WatchlistEntry, SdkError> {
        Ok(self
            .client
            .http
            .update_watchlist_entry(symbol_token, request)
            .await?)
    }

    pub async fn remove(&self, symbol_token: &SymbolToken) -> Result<(), SdkError> {
        Ok(self.client.http.delete_watchlist_entry(symbol_token).await?)
    }
}
