//! Auth sub-client — login, registration, logout.

use crate::auth::{LoginRequest, RegisterRequest, User};
use crate::client::MonetaryClient;
use crate::error::{AuthError, HttpError, SdkError};

/// Sub-client for authentication operations.
pub struct Auth<'a> {
    pub(crate) client: &'a MonetaryClient,
}

impl<'a> Auth<'a> {
    /// Login with email and password.
    ///
    /// On success the JWT is stored in the shared [`Session`] (listeners see
    /// `LoggedIn`) and every subsequent request carries it. Returns the user
    /// profile when the backend includes one.
    ///
    /// [`Session`]: crate::auth::Session
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, SdkError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = match self.client.http.login(&request).await {
            Ok(response) => response,
            Err(HttpError::Unauthorized) => {
                return Err(AuthError::LoginFailed("invalid credentials".to_string()).into());
            }
            Err(e) => return Err(e.into()),
        };

        self.client.session.set_token(response.token).await;
        Ok(response.user)
    }

    /// Register a new user. Does not log in; call [`login`](Self::login) after.
    pub async fn register(
        &self,
        first_name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), SdkError> {
        let request = RegisterRequest {
            first_name: first_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.client.http.register(&request).await {
            Ok(()) => Ok(()),
            // The backend answers 400 when the email is already taken.
            Err(HttpError::BadRequest(message)) => {
                Err(AuthError::RegistrationFailed(message).into())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Drop the stored token. The backend is stateless JWT, so logout is
    /// purely local; listeners see `LoggedOut`.
    pub async fn logout(&self) {
        self.client.session.invalidate().await;
        self.client.clear_all_caches().await;
    }

    /// Whether a token is currently held. Expiry only surfaces as a 401 on
    /// the next request.
    pub async fn is_authenticated(&self) -> bool {
        self.client.session.is_authenticated().await
    }
}
