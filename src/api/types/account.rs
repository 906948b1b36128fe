//! Account balance payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::money;

/// Response for GET /accounts/{investorId}/availablecash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableCash {
    pub investor_id: u64,
    #[serde(with = "money")]
    pub available_cash: Decimal,
}

/// Response for GET /accounts/{investorId}/summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub investor_id: u64,
    /// Cash not committed to notes or pending orders
    #[serde(with = "money")]
    pub available_cash: Decimal,
    #[serde(with = "money")]
    pub accrued_interest: Decimal,
    #[serde(with = "money")]
    pub outstanding_principal: Decimal,
    #[serde(with = "money")]
    pub account_total: Decimal,
    pub total_notes: u32,
    pub total_portfolios: u32,
    /// Cash committed to loans that are still in funding
    #[serde(rename = "infundingBalance", alias = "inFundingBalance", with = "money")]
    pub in_funding_balance: Decimal,
    #[serde(with = "money")]
    pub received_interest: Decimal,
    #[serde(with = "money")]
    pub received_principal: Decimal,
    #[serde(with = "money")]
    pub received_late_fees: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_cash_deserialize() {
        let json = r#"{"investorId":12345,"availableCash":"100.76"}"#;
        let cash: AvailableCash = serde_json::from_str(json).unwrap();
        assert_eq!(cash.investor_id, 12345);
        assert_eq!(cash.available_cash, Decimal::new(10076, 2));
    }

    #[test]
    fn test_summary_accepts_numeric_amounts() {
        let json = r#"{
            "investorId": 1788402,
            "availableCash": 50.77,
            "accruedInterest": 0.26,
            "outstandingPrincipal": 49.38,
            "accountTotal": 100.15,
            "totalNotes": 2,
            "totalPortfolios": 3,
            "infundingBalance": 0,
            "receivedInterest": 0.16,
            "receivedPrincipal": 0.62,
            "receivedLateFees": 0
        }"#;
        let summary: Summary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.account_total, Decimal::new(10015, 2));
        assert_eq!(summary.in_funding_balance, Decimal::ZERO);
        assert_eq!(summary.total_portfolios, 3);
    }

    #[test]
    fn test_summary_missing_required_field_fails() {
        let json = r#"{"investorId": 1, "availableCash": "1.00"}"#;
        assert!(serde_json::from_str::<Summary>(json).is_err());
    }
}
