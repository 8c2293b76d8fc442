//! # Authentication context
//!
//! [`AuthContext`] is the explicit object a shell constructs once and hands
//! to its views: a [`SessionStore`] over the app's durable storage, wired
//! to an [`ApiClient`] whose credential provider is a clone of that same
//! store. No module-level globals — faking the storage in tests fakes the
//! whole session.
//!
//! ## Operations
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`restore`](AuthContext::restore) | Read the persisted session on startup. Trust-on-read: no network validation, a stale credential surfaces on the next failed call. |
//! | [`login`](AuthContext::login) / [`signup`](AuthContext::signup) | POST credentials; on success persist credential + identity together and return the identity. Rejection maps to [`ApiError::Auth`] and propagates — no retry. |
//! | [`logout`](AuthContext::logout) | Purely local invalidation, idempotent, no server round-trip. |
//!
//! A 401 from a protected endpoint does **not** clear the session; callers
//! see [`ApiError::Unauthorized`] and decide what to do with it.

use store::{SessionStore, Storage, UserInfo};

use crate::client::{ApiClient, CredentialProvider};
use crate::error::ApiError;
use crate::models::{Token, UserLogin, UserSignup};

impl<P: CredentialProvider> ApiClient<P> {
    /// POST `/auth/login`. Raw endpoint; [`AuthContext::login`] also
    /// persists the session.
    pub async fn login(&self, credentials: &UserLogin) -> Result<Token, ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    /// POST `/auth/signup`. Raw endpoint; [`AuthContext::signup`] also
    /// persists the session.
    pub async fn signup(&self, registration: &UserSignup) -> Result<Token, ApiError> {
        self.post_json("/auth/signup", registration).await
    }
}

/// Session lifecycle over the remote API, backed by durable storage.
#[derive(Clone, Debug)]
pub struct AuthContext<S: Storage> {
    client: ApiClient<SessionStore<S>>,
    session: SessionStore<S>,
}

impl<S: Storage + Clone> AuthContext<S> {
    /// Wire a session store over `storage` and a client that reads its
    /// credential from that same storage at dispatch time.
    pub fn new(base_url: impl Into<String>, storage: S) -> Self {
        let session = SessionStore::new(storage);
        let client = ApiClient::new(base_url, session.clone());
        Self { client, session }
    }

    /// The client sharing this context's credentials, for catalog and
    /// favorites calls.
    pub fn client(&self) -> &ApiClient<SessionStore<S>> {
        &self.client
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    /// Restore the persisted session, as on process start.
    pub fn restore(&self) -> Option<UserInfo> {
        self.session.restore()
    }

    /// The in-memory identity, if logged in.
    pub fn current_user(&self) -> Option<UserInfo> {
        self.session.current_user()
    }

    /// Log in. On success the credential and identity are persisted
    /// together and the identity is returned.
    pub async fn login(&self, credentials: &UserLogin) -> Result<UserInfo, ApiError> {
        let token = self.client.login(credentials).await.map_err(as_auth_error)?;
        self.session.establish(&token.access_token, token.user.clone());
        Ok(token.user)
    }

    /// Create an account and log in. Same persistence as [`login`](Self::login).
    pub async fn signup(&self, registration: &UserSignup) -> Result<UserInfo, ApiError> {
        let token = self
            .client
            .signup(registration)
            .await
            .map_err(as_auth_error)?;
        self.session.establish(&token.access_token, token.user.clone());
        Ok(token.user)
    }

    /// Drop the session locally. Idempotent; no server round-trip.
    pub fn logout(&self) {
        self.session.clear();
    }
}

/// The auth endpoints reject with a spread of statuses (401 bad
/// credentials, 409 duplicate username, 400/422 validation); collapse them
/// to [`ApiError::Auth`] so callers get one display path. Transport and
/// server errors pass through untouched.
fn as_auth_error(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized => ApiError::Auth("invalid username or password".to_string()),
        ApiError::Conflict(msg) | ApiError::Validation(msg) => ApiError::Auth(msg),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_statuses_collapse_to_auth_error() {
        assert!(matches!(
            as_auth_error(ApiError::Unauthorized),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            as_auth_error(ApiError::Conflict("Username already taken".into())),
            ApiError::Auth(msg) if msg == "Username already taken"
        ));
        assert!(matches!(
            as_auth_error(ApiError::Validation("username too short".into())),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            as_auth_error(ApiError::Forbidden),
            ApiError::Forbidden
        ));
    }
}
