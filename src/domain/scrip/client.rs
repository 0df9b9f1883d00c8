//! Scrips sub-client — autocomplete search with a per-query TTL cache.

use crate::client::MonetaryClient;
use crate::domain::scrip::Scrip;
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for instrument search.
pub struct Scrips<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Scrips<'a> {
    /// Search scrips by name fragment. Repeated queries within the cache
    /// TTL are served locally; the debounced search box re-issues the same
    /// text constantly while a user edits.
    pub async fn search(&self, query: &str) -> Result<Vec<Scrip>, SdkError> {
        let key = query.trim().to_uppercase();
        if key.is_empty() {
            return Ok(Vec::new());
        }

        {
            let cache = self.client.scrip_cache.read().await;
            if let Some((results, fetched_at)) = cache.get(&key) {
                if fetched_at.elapsed() < self.client.scrip_cache_ttl {
                    return Ok(results.clone());
                }
            }
        }

        let results = self.client.http.search_scrips(&key).await?;
        self.client
            .scrip_cache
            .write()
            .await
            .insert(key, (results.clone(), Instant::now()));
        Ok(results)
    }

    /// Drop all cached suggestions.
    pub async fn clear_cache(&self) {
        self.client.scrip_cache.write().await.clear();
    }
}
