//! # HTTP client adapter
//!
//! [`ApiClient`] wraps every outbound call to the TechVision API. The
//! bearer credential is not baked in at construction: the client polls its
//! [`CredentialProvider`] at the moment each request is dispatched, so a
//! login or logout performed anywhere in the process is reflected on the
//! next call without reconstructing the client.
//!
//! With no credential present the request goes out without an
//! `Authorization` header — public endpoints (trending, papers) succeed
//! anonymously, identity-scoped ones come back as
//! [`ApiError::Unauthorized`].
//!
//! Endpoint methods live in the modules for their concern ([`crate::auth`],
//! [`crate::github`], [`crate::papers`], [`crate::favorites`],
//! [`crate::admin`]); this module holds the shared request plumbing and
//! status-to-error mapping.

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use store::{SessionStore, Storage};

use crate::error::{ApiError, ErrorDetail};

/// Capability polled for the current bearer credential at dispatch time.
pub trait CredentialProvider {
    /// The credential to attach right now. `None` sends the request
    /// anonymously.
    fn credential(&self) -> Option<String>;
}

/// Always-anonymous provider, for public browsing without a session.
#[derive(Clone, Copy, Debug, Default)]
pub struct Anonymous;

impl CredentialProvider for Anonymous {
    fn credential(&self) -> Option<String> {
        None
    }
}

/// A session store is a credential provider: the token is read from
/// durable storage per request, so the adapter reflects the latest
/// login/logout even when it was performed through a separate store
/// instance over the same storage.
impl<S: Storage> CredentialProvider for SessionStore<S> {
    fn credential(&self) -> Option<String> {
        self.token()
    }
}

/// HTTP client for the TechVision API.
#[derive(Clone, Debug)]
pub struct ApiClient<P> {
    http: reqwest::Client,
    base_url: String,
    credentials: P,
}

impl<P: CredentialProvider> ApiClient<P> {
    /// `base_url` includes the API prefix, e.g. `http://localhost:8000/api`.
    pub fn new(base_url: impl Into<String>, credentials: P) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request for `path`, attaching the bearer credential if one
    /// is present at this moment.
    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "dispatching request");
        let builder = self.http.request(method, url);
        match self.credentials.credential() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn get_json_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::read_json(response).await
    }

    pub(crate) async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::POST, path).send().await?;
        Self::check_status(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check_status(response).await
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::error_from(status, response).await)
        }
    }

    async fn error_from(status: StatusCode, response: reqwest::Response) -> ApiError {
        let detail = response
            .json::<ErrorDetail>()
            .await
            .ok()
            .map(|body| body.detail);
        ApiError::from_status(status.as_u16(), detail)
    }
}
