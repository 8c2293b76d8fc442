//! Trending GitHub project listings. Public endpoints; no credential
//! required.

use serde::Serialize;

use crate::client::{ApiClient, CredentialProvider};
use crate::error::ApiError;
use crate::models::{GithubProject, PaginatedResponse};

/// Query parameters for `GET /github/trending`. `None` fields are omitted
/// from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Trending window: `daily`, `weekly`, or `monthly`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl<P: CredentialProvider> ApiClient<P> {
    /// GET `/github/trending`.
    pub async fn trending_projects(
        &self,
        query: &TrendingQuery,
    ) -> Result<PaginatedResponse<GithubProject>, ApiError> {
        self.get_json_with_query("/github/trending", query).await
    }

    /// GET `/github/{id}`.
    pub async fn project_details(&self, id: i64) -> Result<GithubProject, ApiError> {
        self.get_json(&format!("/github/{id}")).await
    }
}
