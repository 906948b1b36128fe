//! Loan listing operations.

use crate::api::client::LendingClubClient;
use crate::api::error::ApiResult;
use crate::api::types::LoanListing;

/// Sub-client for `/loans`.
#[derive(Debug, Clone)]
pub struct LoansResource<'a> {
    client: &'a LendingClubClient,
    endpoint: String,
}

impl<'a> LoansResource<'a> {
    pub(crate) fn new(client: &'a LendingClubClient) -> Self {
        Self {
            client,
            endpoint: format!("{}/loans", client.base_url()),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Loans in the most recent listing window.
    pub async fn listed(&self) -> ApiResult<LoanListing> {
        let url = format!("{}/listing", self.endpoint);
        self.client.get(&url).await
    }

    /// Every loan currently listed, not only the latest window.
    pub async fn listed_all(&self) -> ApiResult<LoanListing> {
        let url = format!("{}/listing?showAll=true", self.endpoint);
        self.client.get(&url).await
    }
}
