//! # Monetary SDK
//!
//! A Rust client SDK for the Monetary markets-dashboard REST backend:
//! price-history charts, put-call-ratio analytics, index ticker, portfolio,
//! scrip search, and watchlist.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, the two pure transforms
//!    (chart normalization, PCR classification)
//! 2. **Auth** — `Session` with observable login/logout transitions
//! 3. **HTTP API** — `MonetaryHttp` with per-endpoint retry policies
//! 4. **Polling** — interval streams, debounce windows, stale-response guards
//! 5. **High-Level Client** — `MonetaryClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use monetary_sdk::prelude::*;
//!
//! let client = MonetaryClient::builder()
//!     .base_url("http://localhost:8080/api/v1")
//!     .build()?;
//!
//! client.auth().login("user@example.com", "hunter2").await?;
//! let sentiment = client.pcr().segregated().await?;
//! let series = client
//!     .charts()
//!     .series(Exchange::Nse, &"3045".into(), Interval::Day1,
//!             "2024-01-01 09:15", "2024-01-31 15:30")
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, transforms, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants and reference refresh periods.
pub mod network;

// ── Layer 2: Auth ────────────────────────────────────────────────────────────

/// Authentication: session object, token-change events, login/register.
pub mod auth;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
pub mod http;

// ── Layer 4: Polling ─────────────────────────────────────────────────────────

/// Polling utilities: fetch loops, debounce, stale-response sequencing.
pub mod poll;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `MonetaryClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{Exchange, Interval, Rows, SymbolToken};

    // Domain types — chart
    pub use crate::domain::chart::wire::PriceBar;
    pub use crate::domain::chart::{normalize, ChartError, ChartPoint, ChartSeriesState};

    // Domain types — PCR
    pub use crate::domain::pcr::{
        classify, clean_trading_symbol, PcrCategory, PcrRecord, PcrRow, SegregatedPcr,
        TOP_PER_BUCKET,
    };

    // Domain types — indices, portfolio, scrip, watchlist
    pub use crate::domain::indices::{IndexQuote, MarketTrend, TickerState};
    pub use crate::domain::portfolio::{AddAssetRequest, Holding, PortfolioAsset};
    pub use crate::domain::scrip::Scrip;
    pub use crate::domain::watchlist::{WatchlistEntry, WatchlistRequest};

    // Errors
    pub use crate::error::{AuthError, HttpError, SdkError};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_AUTH_URL};

    // Auth + session
    pub use crate::auth::{LoginRequest, RegisterRequest, Session, SessionEvent, User};

    // HTTP client + sub-clients
    pub use crate::client::{
        AuthClient, ChartsClient, IndicesClient, MonetaryClient, MonetaryClientBuilder,
        PcrClient, PortfolioClient, ScripsClient, WatchlistClient,
    };
    pub use crate::http::retry::{RetryConfig, RetryPolicy};

    // Polling
    pub use crate::poll::{interval_stream, Debouncer, RequestSequencer};
}
