//! REST API client module for the Lending Club investor API.
//!
//! This module provides a typed HTTP client for account balances, fund
//! transfers, notes, portfolios, orders and the loan listing.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lendingclub::api::LendingClubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = LendingClubClient::new("my-api-token")?;
//!     let account = client.accounts(1234);
//!
//!     let summary = account.summary().await?;
//!     println!("Account total: {}", summary.account_total);
//!
//!     for transfer in account.pending_funds().await? {
//!         println!("{} {} {}", transfer.transfer_id, transfer.operation, transfer.amount);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use lendingclub::api::LendingClubClient;
//! use std::time::Duration;
//!
//! let client = LendingClubClient::builder("my-api-token")
//!     .base_url("http://localhost:8080/api/investor/v1")
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`, an alias for `Result<T, ApiError>`.
//! Rejected requests (400, 403, 404) carry the response body:
//!
//! ```rust,ignore
//! use lendingclub::api::ApiError;
//!
//! match client.accounts(1234).withdraw_funds(amount).await {
//!     Ok(withdrawal) => println!("Withdrawing {}", withdrawal.amount),
//!     Err(ApiError::BadRequest(body)) => println!("Rejected: {}", body),
//!     Err(ApiError::Unauthorized) => println!("Check the API token"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod accounts;
pub mod client;
pub mod error;
pub mod loans;
pub mod types;

// Re-export main types for convenience
pub use accounts::AccountsResource;
pub use client::{LendingClubClient, LendingClubClientBuilder};
pub use error::{ApiError, ApiResult, ErrorBody, ErrorResponse, FieldError};
pub use loans::LoansResource;
pub use types::*;
