//! Account operations scoped to one investor.

use rust_decimal::Decimal;

use crate::api::client::LendingClubClient;
use crate::api::error::ApiResult;
use crate::api::types::*;

/// Sub-client for `/accounts/{investorId}`.
///
/// Obtained through [`LendingClubClient::accounts`].
#[derive(Debug, Clone)]
pub struct AccountsResource<'a> {
    client: &'a LendingClubClient,
    investor_id: u64,
    endpoint: String,
}

impl<'a> AccountsResource<'a> {
    pub(crate) fn new(client: &'a LendingClubClient, investor_id: u64) -> Self {
        Self {
            client,
            investor_id,
            endpoint: format!("{}/accounts/{}", client.base_url(), investor_id),
        }
    }

    pub fn investor_id(&self) -> u64 {
        self.investor_id
    }

    /// Base URL every account operation is resolved against.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    // =========================================================================
    // Balances
    // =========================================================================

    /// Get the account summary.
    pub async fn summary(&self) -> ApiResult<Summary> {
        self.client.get(&self.url("/summary")).await
    }

    /// Get the cash available for investment.
    pub async fn available_cash(&self) -> ApiResult<AvailableCash> {
        self.client.get(&self.url("/availablecash")).await
    }

    // =========================================================================
    // Funds
    // =========================================================================

    /// Schedule a deposit from the linked bank account.
    pub async fn add_funds(&self, payload: &FundsPayload) -> ApiResult<Deposit> {
        self.client.post(&self.url("/funds/add"), payload).await
    }

    /// Withdraw cash to the linked bank account.
    pub async fn withdraw_funds(&self, amount: Decimal) -> ApiResult<Withdrawal> {
        let request = WithdrawRequest { amount };
        self.client.post(&self.url("/funds/withdraw"), &request).await
    }

    /// List pending transfers, ordered by transfer id.
    pub async fn pending_funds(&self) -> ApiResult<Vec<Transfer>> {
        let response: PendingTransfersResponse =
            self.client.get(&self.url("/funds/pending")).await?;
        Ok(response.into_transfers())
    }

    /// Cancel pending transfers by id.
    pub async fn cancel_funds(&self, transfer_ids: &[u64]) -> ApiResult<TransferCancellation> {
        let request = CancelTransfersRequest {
            transfer_ids: transfer_ids.to_vec(),
        };
        self.client.post(&self.url("/funds/cancel"), &request).await
    }

    // =========================================================================
    // Notes and portfolios
    // =========================================================================

    /// List owned notes.
    pub async fn notes(&self) -> ApiResult<Vec<Note>> {
        let response: NotesResponse = self.client.get(&self.url("/notes")).await?;
        Ok(response.my_notes.unwrap_or_default())
    }

    /// List owned notes with payment details.
    pub async fn detailed_notes(&self) -> ApiResult<Vec<DetailedNote>> {
        let response: DetailedNotesResponse =
            self.client.get(&self.url("/detailednotes")).await?;
        Ok(response.my_notes.unwrap_or_default())
    }

    pub async fn portfolios(&self) -> ApiResult<Vec<Portfolio>> {
        let response: PortfoliosResponse = self.client.get(&self.url("/portfolios")).await?;
        Ok(response.my_portfolios.unwrap_or_default())
    }

    /// Create a portfolio owned by this investor.
    pub async fn create_portfolio(
        &self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> ApiResult<Portfolio> {
        let request = CreatePortfolioRequest {
            aid: self.investor_id,
            portfolio_name: name.into(),
            portfolio_description: description,
        };
        self.client.post(&self.url("/portfolios"), &request).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Submit a batch of note orders against listed loans.
    pub async fn submit_orders(&self, orders: &[Order]) -> ApiResult<OrderSubmission> {
        let request = SubmitOrdersRequest {
            aid: self.investor_id,
            orders: orders.to_vec(),
        };
        tracing::debug!(
            investor_id = self.investor_id,
            count = orders.len(),
            "Submitting orders"
        );
        self.client.post(&self.url("/orders"), &request).await
    }
}
