//! Low-level HTTP client — `MonetaryHttp`.
//!
//! One method per backend endpoint. Returns wire types; conversion to domain
//! types (chart normalization, PCR classification) happens in the sub-clients.

use crate::auth::{LoginRequest, LoginResponse, RegisterRequest, Session};
use crate::domain::chart::wire::PriceBar;
use crate::domain::indices::IndexQuote;
use crate::domain::pcr::PcrRow;
use crate::domain::portfolio::{AddAssetRequest, Holding, PortfolioAsset};
use crate::domain::scrip::Scrip;
use crate::domain::watchlist::{WatchlistEntry, WatchlistRequest};
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::{Exchange, Interval, Rows, SymbolToken};

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

/// Low-level HTTP client for the Monetary REST API.
///
/// The [`Session`] is injected at construction; every request carries its
/// bearer token, and any 401 response invalidates it (listeners see a
/// `LoggedOut` event).
pub struct MonetaryHttp {
    base_url: String,
    auth_base_url: String,
    client: Client,
    session: Arc<Session>,
}

impl MonetaryHttp {
    pub fn new(base_url: &str, auth_base_url: &str, session: Arc<Session>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            auth_base_url: auth_base_url.trim_end_matches('/').to_string(),
            client,
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_base_url(&self) -> &str {
        &self.auth_base_url
    }

    // ── Price history ────────────────────────────────────────────────────

    pub async fn get_price_history(
        &self,
        exchange: Exchange,
        symbol_token: &SymbolToken,
        interval: Interval,
        from_date: &str,
        to_date: &str,
    ) -> Result<Rows<PriceBar>, HttpError> {
        let url = format!(
            "{}/priceHistory?exchange={}&symboltoken={}&interval={}&fromDate={}&toDate={}",
            self.base_url,
            exchange,
            urlencoding::encode(symbol_token.as_str()),
            interval,
            urlencoding::encode(from_date),
            urlencoding::encode(to_date),
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Dashboard ────────────────────────────────────────────────────────

    pub async fn get_pcr(&self) -> Result<Rows<PcrRow>, HttpError> {
        let url = format!("{}/dashboard/pcr", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_holdings(&self) -> Result<Rows<Holding>, HttpError> {
        let url = format!("{}/dashboard/portfolio", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Indices ──────────────────────────────────────────────────────────

    pub async fn get_indices_ltp(&self) -> Result<HashMap<String, f64>, HttpError> {
        let url = format!("{}/market/indices", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn get_indices_full(&self) -> Result<HashMap<String, IndexQuote>, HttpError> {
        let url = format!("{}/market/indices/full", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Scrip search ─────────────────────────────────────────────────────

    pub async fn search_scrips(&self, query: &str) -> Result<Vec<Scrip>, HttpError> {
        let url = format!(
            "{}/scriplist/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        self.get(&url, RetryPolicy::Idempotent).await
    }

    // ── Portfolio ────────────────────────────────────────────────────────

    pub async fn get_portfolio(&self) -> Result<Rows<PortfolioAsset>, HttpError> {
        let url = format!("{}/portfolio", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn add_asset(&self, request: &AddAssetRequest) -> Result<PortfolioAsset, HttpError> {
        let url = format!("{}/portfolio/assets", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn delete_asset(&self, id: i64) -> Result<(), HttpError> {
        let url = format!("{}/portfolio/assets/{}", self.base_url, id);
        self.delete(&url, RetryPolicy::Idempotent).await
    }

    // ── Watchlist ────────────────────────────────────────────────────────

    pub async fn get_watchlist(&self) -> Result<Rows<WatchlistEntry>, HttpError> {
        let url = format!("{}/watchlist", self.base_url);
        self.get(&url, RetryPolicy::Idempotent).await
    }

    pub async fn add_watchlist_entry(
        &self,
        request: &WatchlistRequest,
    ) -> Result<WatchlistEntry, HttpError> {
        let url = format!("{}/watchlist", self.base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    pub async fn update_watchlist_entry(
        &self,
        symbol_token: &SymbolToken,
        request: &WatchlistRequest,
    ) -> Result<WatchlistEntry, HttpError> {
        let url = format!(
            "{}/watchlist/{}",
            self.base_url,
            urlencoding::encode(symbol_token.as_str())
        );
        let resp = self
            .request_with_retry(Method::PUT, &url, Some(request), RetryPolicy::None)
            .await?;
        Ok(resp.json().await?)
    }

    pub async fn delete_watchlist_entry(
        &self,
        symbol_token: &SymbolToken,
    ) -> Result<(), HttpError> {
        let url = format!(
            "{}/watchlist/{}",
            self.base_url,
            urlencoding::encode(symbol_token.as_str())
        );
        self.delete(&url, RetryPolicy::Idempotent).await
    }

    // ── Auth ─────────────────────────────────────────────────────────────
    //
    // Auth lives under its own mount (`/api/auth`), not the versioned data
    // prefix, so these build on `auth_base_url`.

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, HttpError> {
        let url = format!("{}/login", self.auth_base_url);
        self.post(&url, request, RetryPolicy::None).await
    }

    /// Register a new user. The backend answers with a plain-text message,
    /// so only the status matters here.
    pub async fn register(&self, request: &RegisterRequest) -> Result<(), HttpError> {
        let url = format!("{}/register", self.auth_base_url);
        let _ = self
            .request_with_retry(Method::POST, &url, Some(request), RetryPolicy::None)
            .await?;
        Ok(())
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str, retry: RetryPolicy) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(Method::GET, url, None::<&()>, retry)
            .await?;
        Ok(resp.json().await?)
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
        retry: RetryPolicy,
    ) -> Result<T, HttpError> {
        let resp = self
            .request_with_retry(Method::POST, url, Some(body), retry)
            .await?;
        Ok(resp.json().await?)
    }

    /// DELETE endpoints answer 204 No Content; the body is discarded.
    async fn delete(&self, url: &str, retry: RetryPolicy) -> Result<(), HttpError> {
        let _ = self
            .request_with_retry(Method::DELETE, url, None::<&()>, retry)
            .await?;
        Ok(())
    }

    async fn request_with_retry<B: Serialize>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        retry: RetryPolicy,
    ) -> Result<Response, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(&method, url, body).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c,
        };

        let mut attempt = 0;
        loop {
            let error = match self.do_request(&method, url, body).await {
                Ok(resp) => return Ok(resp),
                Err(e) => e,
            };

            let should_retry = match &error {
                HttpError::ServerError { status, .. } => {
                    config.retryable_statuses.contains(status)
                }
                HttpError::RateLimited { retry_after_ms } => {
                    if let Some(ms) = retry_after_ms {
                        futures_timer::Delay::new(Duration::from_millis(*ms)).await;
                    }
                    config.retryable_statuses.contains(&429)
                }
                HttpError::Timeout => true,
                HttpError::Reqwest(re) => re.is_connect() || re.is_timeout() || re.is_request(),
                _ => false,
            };

            if !should_retry {
                return Err(error);
            }
            if attempt >= config.max_retries {
                return Err(HttpError::MaxRetriesExceeded {
                    attempts: config.max_retries + 1,
                    last_error: error.to_string(),
                });
            }

            let delay = config.delay_for_attempt(attempt);
            tracing::debug!(
                attempt = attempt + 1,
                max = config.max_retries,
                delay_ms = delay.as_millis() as u64,
                "Retrying request to {}",
                url
            );
            futures_timer::Delay::new(delay).await;
            attempt += 1;
        }
    }

    async fn do_request<B: Serialize>(
        &self,
        method: &Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<Response, HttpError> {
        let mut req = self.client.request(method.clone(), url);

        if let Some(token) = self.session.token().await {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(HttpError::Reqwest(e)),
        };

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();

        match status_code {
            401 => {
                // Token expired or revoked: invalidate so listeners can
                // route back to a login view.
                self.session.invalidate().await;
                Err(HttpError::Unauthorized)
            }
            403 => Err(HttpError::Forbidden),
            404 => Err(HttpError::NotFound(body_text)),
            429 => Err(HttpError::RateLimited {
                retry_after_ms: None,
            }),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}

impl Clone for MonetaryHttp {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            auth_base_url: self.auth_base_url.clone(),
            client: self.client.clone(),
            session: self.session.clone(),
        }
    }
}
