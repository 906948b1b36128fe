//! # Lending Club Rust SDK
//!
//! A typed async client for the Lending Club investor REST API.
//!
//! ## Modules
//!
//! - [`api`]: REST client, resource accessors and payload types
//! - [`shared`]: exact decimal and timestamp codecs used by every payload
//! - [`network`]: default endpoint and header constants
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lendingclub::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LendingClubClient::new("my-api-token")?;
//!
//!     let cash = client.accounts(1234).available_cash().await?;
//!     println!("Available: {}", cash.available_cash);
//!
//!     let deposit = client
//!         .accounts(1234)
//!         .add_funds(&FundsPayload::new(Decimal::new(100, 0), TransferFrequency::LoadNow))
//!         .await?;
//!     println!("Deposit expected {:?}", deposit.estimated_funds_transfer_date);
//!
//!     Ok(())
//! }
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Field codecs shared by every payload.
pub mod shared;

/// Network constants (API endpoint, user agent).
pub mod network;

/// REST API client module.
pub mod api;

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use lendingclub::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccountsResource, ApiError, ApiResult, ErrorBody, LendingClubClient,
        LendingClubClientBuilder, LoansResource,
        // Payloads
        AvailableCash, Summary,
        Deposit, FundsPayload, Transfer, TransferCancellation, TransferFrequency, Withdrawal,
        DetailedNote, Note, Portfolio,
        Order, OrderConfirmation, OrderSubmission,
        Loan, LoanListing,
    };

    pub use crate::network::{DEFAULT_API_URL, USER_AGENT};

    pub use crate::shared::Timestamp;

    pub use rust_decimal::Decimal;
}
