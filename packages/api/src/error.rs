//! Error taxonomy for the TechVision API client.
//!
//! The server speaks FastAPI-style error bodies (`{"detail": "..."}`); the
//! detail string is carried into the matching [`ApiError`] variant when the
//! body is present and parseable.

use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by the API client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Login or signup rejected: invalid credentials, duplicate username,
    /// or a validation failure.
    #[error("authentication failed: {0}")]
    Auth(String),
    /// Missing or invalid credential on an identity-scoped endpoint.
    /// Callers should offer a login prompt, not crash.
    #[error("not authorized")]
    Unauthorized,
    /// Authenticated, but the credential lacks the required role.
    #[error("forbidden")]
    Forbidden,
    /// The item is already in the favorites list.
    #[error("conflict: {0}")]
    Conflict(String),
    /// No such favorite (or resource) on the server.
    #[error("not found: {0}")]
    NotFound(String),
    /// The server rejected the request payload.
    #[error("invalid request: {0}")]
    Validation(String),
    /// Any other non-success response.
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Transport failure: connection refused, DNS, broken body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// FastAPI-style error body.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub detail: String,
}

impl ApiError {
    /// Map a non-success status code and its error detail to a variant.
    pub(crate) fn from_status(status: u16, detail: Option<String>) -> Self {
        let message = detail.unwrap_or_else(|| "request failed".to_string());
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound(message),
            409 => ApiError::Conflict(message),
            400 | 422 => ApiError::Validation(message),
            _ => ApiError::Server { status, message },
        }
    }

    /// Whether the caller should respond by prompting for login.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

/// Collapse a read-path failure to an empty value.
///
/// List-fetching callers never surface a blocking error: a failed fetch is
/// logged and the view falls back to its empty state. Write-path results
/// must not go through here.
pub fn empty_on_error<T: Default>(result: Result<T, ApiError>, context: &str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::error!("{context}: {err}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            ApiError::from_status(401, None),
            ApiError::Unauthorized
        ));
        assert!(matches!(
            ApiError::from_status(403, None),
            ApiError::Forbidden
        ));
        assert!(matches!(
            ApiError::from_status(404, Some("Favorite not found".into())),
            ApiError::NotFound(msg) if msg == "Favorite not found"
        ));
        assert!(matches!(
            ApiError::from_status(409, Some("Already favorited".into())),
            ApiError::Conflict(msg) if msg == "Already favorited"
        ));
        assert!(matches!(
            ApiError::from_status(422, None),
            ApiError::Validation(_)
        ));
        assert!(matches!(
            ApiError::from_status(500, Some("boom".into())),
            ApiError::Server { status: 500, message } if message == "boom"
        ));
    }

    #[test]
    fn test_empty_on_error_degrades_to_default() {
        let ok: Vec<u8> = empty_on_error(Ok(vec![1, 2]), "listing");
        assert_eq!(ok, vec![1, 2]);

        let degraded: Vec<u8> = empty_on_error(Err(ApiError::Unauthorized), "listing");
        assert!(degraded.is_empty());
    }
}
