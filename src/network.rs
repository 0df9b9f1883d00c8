//! Network URL constants for the Monetary SDK.

/// Default REST API base URL (local backend, `/api/v1` prefix included).
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api/v1";

/// Default auth base URL. The backend mounts auth at `/api/auth`, beside the
/// versioned data prefix rather than under it.
pub const DEFAULT_AUTH_URL: &str = "http://localhost:8080/api/auth";

/// Derive the auth base from a data-API base by swapping the `/api/v1`
/// segment for `/api/auth`. Bases without the versioned prefix get a plain
/// `/auth` path appended.
pub fn derive_auth_url(api_base: &str) -> String {
    let trimmed = api_base.trim_end_matches('/');
    match trimmed.strip_suffix("/api/v1") {
        Some(root) => format!("{}/api/auth", root),
        None => format!("{}/auth", trimmed),
    }
}

/// Reference refresh periods used by the original dashboard views, in seconds.
///
/// The SDK never schedules anything on its own; these are the cadences the
/// backend is known to tolerate. See [`crate::poll::interval_stream`].
pub const TICKER_REFRESH_SECS: u64 = 5;
pub const WATCHLIST_REFRESH_SECS: u64 = 30;
pub const PCR_REFRESH_SECS: u64 = 300;

/// Quiet window for search-box autocomplete, in milliseconds.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
