//! Owned note payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::{money, Timestamp};

/// A note held by the investor, from GET /accounts/{investorId}/notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub loan_id: u64,
    pub note_id: u64,
    pub order_id: u64,
    #[serde(with = "money")]
    pub interest_rate: Decimal,
    /// Loan term in months
    pub loan_length: u32,
    pub loan_status: String,
    pub grade: String,
    #[serde(with = "money")]
    pub loan_amount: Decimal,
    /// Amount the investor put into this note
    #[serde(with = "money")]
    pub note_amount: Decimal,
    #[serde(with = "money")]
    pub payments_received: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<Timestamp>,
    pub order_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_status_date: Option<Timestamp>,
}

/// A note with payment and portfolio details, from
/// GET /accounts/{investorId}/detailednotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedNote {
    pub loan_id: u64,
    pub note_id: u64,
    pub order_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_name: Option<String>,
    pub loan_status: String,
    pub grade: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(with = "money")]
    pub interest_rate: Decimal,
    pub loan_length: u32,
    #[serde(with = "money")]
    pub loan_amount: Decimal,
    #[serde(with = "money")]
    pub note_amount: Decimal,
    #[serde(with = "money")]
    pub accrued_interest: Decimal,
    #[serde(with = "money")]
    pub payments_received: Decimal,
    #[serde(with = "money")]
    pub principal_pending: Decimal,
    #[serde(with = "money")]
    pub interest_pending: Decimal,
    #[serde(with = "money")]
    pub principal_received: Decimal,
    #[serde(with = "money")]
    pub interest_received: Decimal,
    /// "UP", "DOWN" or "FLAT"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_trend: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_payment_status: Option<String>,
    pub can_be_traded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<Timestamp>,
    pub order_date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loan_status_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_payment_date: Option<Timestamp>,
}

/// Wrapper for GET /accounts/{investorId}/notes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesResponse {
    #[serde(default)]
    pub my_notes: Option<Vec<Note>>,
}

/// Wrapper for GET /accounts/{investorId}/detailednotes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedNotesResponse {
    #[serde(default)]
    pub my_notes: Option<Vec<DetailedNote>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_deserialize() {
        let json = r#"{"myNotes":[{
            "loanId": 11111, "noteId": 22222, "orderId": 33333,
            "interestRate": 13.57, "loanLength": 36, "loanStatus": "Current",
            "grade": "C1", "loanAmount": 10800, "noteAmount": 25,
            "paymentsReceived": 5.88,
            "issueDate": "2015-01-22T00:00:00.000-0800",
            "orderDate": "2015-01-15T09:33:27.000-0800",
            "loanStatusDate": null
        }]}"#;
        let response: NotesResponse = serde_json::from_str(json).unwrap();
        let notes = response.my_notes.unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].interest_rate, Decimal::new(1357, 2));
        assert_eq!(notes[0].payments_received, Decimal::new(588, 2));
        assert!(notes[0].loan_status_date.is_none());
        assert_eq!(notes[0].order_date.to_string(), "2015-01-15T09:33:27.000-0800");
    }

    #[test]
    fn test_notes_response_without_list() {
        let response: NotesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.my_notes.is_none());
    }

    #[test]
    fn test_detailed_note_optional_portfolio() {
        let json = r#"{
            "loanId": 1, "noteId": 2, "orderId": 3,
            "loanStatus": "Issued", "grade": "A2", "interestRate": "7.26",
            "loanLength": 60, "loanAmount": "20000", "noteAmount": "50",
            "accruedInterest": "0.12", "paymentsReceived": "0",
            "principalPending": "50", "interestPending": "0.12",
            "principalReceived": "0", "interestReceived": "0",
            "canBeTraded": false,
            "orderDate": "2015-02-01T10:00:00.000-0800"
        }"#;
        let note: DetailedNote = serde_json::from_str(json).unwrap();
        assert!(note.portfolio_id.is_none());
        assert!(note.next_payment_date.is_none());
        assert_eq!(note.principal_pending, Decimal::from(50));
    }
}
