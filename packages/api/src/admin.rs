//! Admin operations.

use crate::client::{ApiClient, CredentialProvider};
use crate::error::ApiError;

impl<P: CredentialProvider> ApiClient<P> {
    /// POST `/admin/crawl` — ask the server to refresh its catalog now.
    ///
    /// Requires an admin credential: [`ApiError::Unauthorized`] without a
    /// session, [`ApiError::Forbidden`] with a non-admin one.
    pub async fn trigger_crawl(&self) -> Result<(), ApiError> {
        self.post_empty("/admin/crawl").await
    }
}
