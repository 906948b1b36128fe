//! Order submission types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::money;

/// Execution status reported when the order filled completely.
pub const ORDER_FULFILLED: &str = "ORDER_FULFILLED";

/// One note purchase within an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub loan_id: u64,
    /// Amount to invest, in multiples of $25
    #[serde(with = "money")]
    pub requested_amount: Decimal,
    /// Portfolio to file the resulting note under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<u64>,
}

impl Order {
    pub fn new(loan_id: u64, requested_amount: Decimal) -> Self {
        Self {
            loan_id,
            requested_amount,
            portfolio_id: None,
        }
    }

    pub fn with_portfolio(mut self, portfolio_id: u64) -> Self {
        self.portfolio_id = Some(portfolio_id);
        self
    }
}

/// Request for POST /accounts/{investorId}/orders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitOrdersRequest {
    /// Actor id, the investor id placing the orders
    pub aid: u64,
    pub orders: Vec<Order>,
}

/// Response for POST /accounts/{investorId}/orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSubmission {
    /// Absent when no order in the batch was accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_instruct_id: Option<u64>,
    #[serde(default)]
    pub order_confirmations: Vec<OrderConfirmation>,
}

impl OrderSubmission {
    /// Total amount actually invested across every confirmation.
    pub fn invested_total(&self) -> Decimal {
        self.order_confirmations
            .iter()
            .map(|c| c.invested_amount)
            .sum()
    }
}

/// Per-loan result of an order submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub loan_id: u64,
    #[serde(with = "money")]
    pub requested_amount: Decimal,
    #[serde(with = "money")]
    pub invested_amount: Decimal,
    /// Status codes, e.g. `ORDER_FULFILLED`, `LOAN_AMNT_EXCEEDED`
    #[serde(default)]
    pub execution_status: Vec<String>,
}

impl OrderConfirmation {
    pub fn is_fulfilled(&self) -> bool {
        self.execution_status.iter().any(|s| s == ORDER_FULFILLED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_orders_request_serialize() {
        let request = SubmitOrdersRequest {
            aid: 1234,
            orders: vec![
                Order::new(111, Decimal::from(25)),
                Order::new(222, Decimal::from(50)).with_portfolio(7),
            ],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"aid":1234,"orders":[{"loanId":111,"requestedAmount":"25"},{"loanId":222,"requestedAmount":"50","portfolioId":7}]}"#
        );
    }

    #[test]
    fn test_order_submission_deserialize() {
        let json = r#"{
            "orderInstructId": 55555,
            "orderConfirmations": [
                {"loanId": 111, "requestedAmount": 25, "investedAmount": 25,
                 "executionStatus": ["ORDER_FULFILLED"]},
                {"loanId": 222, "requestedAmount": 50.0, "investedAmount": 0,
                 "executionStatus": ["LOAN_AMNT_EXCEEDED", "NOT_AN_INFUNDING_LOAN"]}
            ]
        }"#;
        let submission: OrderSubmission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.order_instruct_id, Some(55555));
        assert!(submission.order_confirmations[0].is_fulfilled());
        assert!(!submission.order_confirmations[1].is_fulfilled());
        assert_eq!(submission.invested_total(), Decimal::from(25));
    }

    #[test]
    fn test_order_submission_without_instruct_id() {
        let json = r#"{"orderConfirmations": []}"#;
        let submission: OrderSubmission = serde_json::from_str(json).unwrap();
        assert!(submission.order_instruct_id.is_none());
        assert_eq!(submission.invested_total(), Decimal::ZERO);
    }
}
