//! Research paper listings and categories. Public endpoints; no credential
//! required.

use serde::Serialize;

use crate::client::{ApiClient, CredentialProvider};
use crate::error::ApiError;
use crate::models::{Category, PaginatedResponse, Paper};

/// Query parameters for `GET /papers/latest`. `None` fields are omitted
/// from the query string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PaperQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl<P: CredentialProvider> ApiClient<P> {
    /// GET `/papers/latest`.
    pub async fn latest_papers(
        &self,
        query: &PaperQuery,
    ) -> Result<PaginatedResponse<Paper>, ApiError> {
        self.get_json_with_query("/papers/latest", query).await
    }

    /// GET `/papers/{id}`.
    pub async fn paper_details(&self, id: &str) -> Result<Paper, ApiError> {
        self.get_json(&format!("/papers/{id}")).await
    }

    /// GET `/papers/categories`.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/papers/categories").await
    }
}
