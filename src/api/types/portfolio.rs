//! Portfolio payloads.

use serde::{Deserialize, Serialize};

/// A named grouping of notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub portfolio_id: u64,
    pub portfolio_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_description: Option<String>,
}

/// Wrapper for GET /accounts/{investorId}/portfolios.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfoliosResponse {
    #[serde(default)]
    pub my_portfolios: Option<Vec<Portfolio>>,
}

/// Request for POST /accounts/{investorId}/portfolios.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePortfolioRequest {
    /// Actor id, the investor id that owns the portfolio
    pub aid: u64,
    pub portfolio_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_description: Option<String>,
}
