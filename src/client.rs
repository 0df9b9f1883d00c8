//! High-level client — `MonetaryClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the shared scrip-search cache, and the
//! accessor methods.

use crate::auth::client::Auth;
use crate::auth::Session;
use crate::domain::chart::client::Charts;
use crate::domain::indices::client::Indices;
use crate::domain::pcr::client::Pcr;
use crate::domain::portfolio::client::Portfolio;
use crate::domain::scrip::client::Scrips;
use crate::domain::scrip::Scrip;
use crate::domain::watchlist::client::Watchlist;
use crate::error::SdkError;
use crate::http::MonetaryHttp;

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::chart::client::Charts as ChartsClient;
pub use crate::domain::indices::client::Indices as IndicesClient;
pub use crate::domain::pcr::client::Pcr as PcrClient;
pub use crate::domain::portfolio::client::Portfolio as PortfolioClient;
pub use crate::domain::scrip::client::Scrips as ScripsClient;
pub use crate::domain::watchlist::client::Watchlist as WatchlistClient;

/// The primary entry point for the Monetary SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.pcr()`, `client.charts()`, `client.watchlist()`, etc.
pub struct MonetaryClient {
    pub(crate) http: MonetaryHttp,
    pub(crate) session: Arc<Session>,
    /// Scrip suggestion cache: query → (results, fetched_at). Debounced
    /// search still repeats queries constantly (backspacing, re-typing);
    /// the master list changes once a day at most.
    pub(crate) scrip_cache: Arc<RwLock<HashMap<String, (Vec<Scrip>, Instant)>>>,
    pub(crate) scrip_cache_ttl: Duration,
}

impl MonetaryClient {
    pub fn builder() -> MonetaryClientBuilder {
        MonetaryClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }

    pub fn pcr(&self) -> Pcr<'_> {
        Pcr { client: self }
    }

    pub fn indices(&self) -> Indices<'_> {
        Indices { client: self }
    }

    pub fn portfolio(&self) -> Portfolio<'_> {
        Portfolio { client: self }
    }

    pub fn scrips(&self) -> Scrips<'_> {
        Scrips { client: self }
    }

    pub fn watchlist(&self) -> Watchlist<'_> {
        Watchlist { client: self }
    }

    /// The session shared with the HTTP layer. Register
    /// [`Session::on_change`] listeners here to observe login/logout.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.scrip_cache.write().await.clear();
    }
}

impl Clone for MonetaryClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            session: self.session.clone(),
            scrip_cache: self.scrip_cache.clone(),
            scrip_cache_ttl: self.scrip_cache_ttl,
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MonetaryClientBuilder {
    base_url: String,
    auth_base_url: Option<String>,
    scrip_cache_ttl: Duration,
    session: Option<Arc<Session>>,
}

impl Default for MonetaryClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            auth_base_url: None,
            scrip_cache_ttl: Duration::from_secs(60),
            session: None,
        }
    }
}

impl MonetaryClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Override the auth mount. By default it is derived from `base_url`
    /// (`/api/v1` becomes `/api/auth`), matching how the backend routes.
    pub fn auth_base_url(mut self, url: &str) -> Self {
        self.auth_base_url = Some(url.to_string());
        self
    }

    pub fn scrip_cache_ttl(mut self, ttl: Duration) -> Self {
        self.scrip_cache_ttl = ttl;
        self
    }

    /// Use a pre-built session (e.g. seeded with a persisted token).
    pub fn session(mut self, session: Arc<Session>) -> Self {
        self.session = Some(session);
        self
    }

    pub fn build(self) -> Result<MonetaryClient, SdkError> {
        let session = self.session.unwrap_or_else(Session::new);
        let auth_base_url = self
            .auth_base_url
            .unwrap_or_else(|| crate::network::derive_auth_url(&self.base_url));
        Ok(MonetaryClient {
            http: MonetaryHttp::new(&self.base_url, &auth_base_url, session.clone()),
            session,
            scrip_cache: Arc::new(RwLock::new(HashMap::new())),
            scrip_cache_ttl: self.scrip_cache_ttl,
        })
    }
}
