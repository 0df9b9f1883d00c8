//! Authentication — session object, token-change events, login/register wire types.
//!
//! ## Security model
//!
//! The bearer token lives in a [`Session`] that is injected into the HTTP
//! client at construction — there is no module-global token store. The
//! session notifies registered listeners on every login/logout transition so
//! an app can react (e.g. route to its login view) without polling.
//!
//! A 401 from any endpoint invalidates the session; see
//! [`crate::http::MonetaryHttp`].

pub mod client;

use async_lock::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

// ============================================================================
// Session
// ============================================================================

/// Token lifecycle transition, delivered to [`Session::on_change`] listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn,
    LoggedOut,
}

type SessionListener = Box<dyn Fn(SessionEvent) + Send + Sync>;

/// Holds the bearer token for one authenticated user.
///
/// Shared between the high-level client and the HTTP layer. The token is
/// never exposed outside the crate; callers observe state through
/// [`is_authenticated`](Self::is_authenticated) and change events.
#[derive(Default)]
pub struct Session {
    token: RwLock<Option<String>>,
    listeners: Mutex<Vec<SessionListener>>,
}

impl Session {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Create a session pre-seeded with a token (e.g. restored from disk).
    pub fn with_token(token: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            token: RwLock::new(Some(token.into())),
            listeners: Mutex::new(Vec::new()),
        })
    }

    /// Register a listener for login/logout transitions.
    pub fn on_change(&self, listener: impl Fn(SessionEvent) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .expect("session listener lock poisoned")
            .push(Box::new(listener));
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    pub(crate) async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    pub(crate) async fn set_token(&self, token: String) {
        *self.token.write().await = Some(token);
        self.notify(SessionEvent::LoggedIn);
    }

    /// Drop the token. Listeners are notified only on an actual transition.
    pub(crate) async fn invalidate(&self) {
        let had_token = self.token.write().await.take().is_some();
        if had_token {
            self.notify(SessionEvent::LoggedOut);
        }
    }

    fn notify(&self, event: SessionEvent) {
        let listeners = self
            .listeners
            .lock()
            .expect("session listener lock poisoned");
        for listener in listeners.iter() {
            listener(event);
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub email: String,
    pub password: String,
}

/// User profile attached to a login response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
}

/// Response from `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Older backend builds return the token alone.
    #[serde(default)]
    pub user: Option<User>,
}
