//! Fund transfer payloads: deposits, withdrawals, pending and cancelled transfers.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{money, Timestamp};

/// How often a deposit is pulled from the linked bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferFrequency {
    /// Single transfer, executed immediately
    #[serde(rename = "LOAD_NOW")]
    LoadNow,
    /// Single transfer on `start_date`
    #[serde(rename = "LOAD_ONCE")]
    LoadOnce,
    #[serde(rename = "LOAD_WEEKLY")]
    LoadWeekly,
    #[serde(rename = "LOAD_BIWEEKLY")]
    LoadBiweekly,
    #[serde(rename = "LOAD_ON_DAY_1_AND_16")]
    LoadOnDay1And16,
    #[serde(rename = "LOAD_MONTHLY")]
    LoadMonthly,
}

impl TransferFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LoadNow => "LOAD_NOW",
            Self::LoadOnce => "LOAD_ONCE",
            Self::LoadWeekly => "LOAD_WEEKLY",
            Self::LoadBiweekly => "LOAD_BIWEEKLY",
            Self::LoadOnDay1And16 => "LOAD_ON_DAY_1_AND_16",
            Self::LoadMonthly => "LOAD_MONTHLY",
        }
    }

    /// Whether the transfer repeats until `end_date`.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, Self::LoadNow | Self::LoadOnce)
    }
}

impl fmt::Display for TransferFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned for an unknown transfer frequency name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid transfer frequency: {0}")]
pub struct InvalidTransferFrequencyError(pub String);

impl FromStr for TransferFrequency {
    type Err = InvalidTransferFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOAD_NOW" => Ok(Self::LoadNow),
            "LOAD_ONCE" => Ok(Self::LoadOnce),
            "LOAD_WEEKLY" => Ok(Self::LoadWeekly),
            "LOAD_BIWEEKLY" => Ok(Self::LoadBiweekly),
            "LOAD_ON_DAY_1_AND_16" => Ok(Self::LoadOnDay1And16),
            "LOAD_MONTHLY" => Ok(Self::LoadMonthly),
            other => Err(InvalidTransferFrequencyError(other.to_string())),
        }
    }
}

/// Request for POST /accounts/{investorId}/funds/add.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsPayload {
    #[serde(with = "money")]
    pub amount: Decimal,
    pub transfer_frequency: TransferFrequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
}

impl FundsPayload {
    pub fn new(amount: Decimal, transfer_frequency: TransferFrequency) -> Self {
        Self {
            amount,
            transfer_frequency,
            start_date: None,
            end_date: None,
        }
    }

    /// Set the first transfer date.
    pub fn with_start_date(mut self, start_date: Timestamp) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Set the last transfer date (recurring frequencies only).
    pub fn with_end_date(mut self, end_date: Timestamp) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Response for POST /accounts/{investorId}/funds/add.
///
/// Echoes the deposit instruction. The frequency is kept as the raw string
/// the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub investor_id: u64,
    #[serde(with = "money")]
    pub amount: Decimal,
    #[serde(alias = "transferFrequency")]
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_funds_transfer_date: Option<Timestamp>,
}

impl Deposit {
    /// The deposit instruction as a [`FundsPayload`].
    ///
    /// Returns `None` if the API reported a frequency this crate does not know.
    pub fn funds(&self) -> Option<FundsPayload> {
        let transfer_frequency = self.frequency.parse().ok()?;
        Some(FundsPayload {
            amount: self.amount,
            transfer_frequency,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

/// Request for POST /accounts/{investorId}/funds/withdraw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    #[serde(with = "money")]
    pub amount: Decimal,
}

/// Response for POST /accounts/{investorId}/funds/withdraw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdrawal {
    pub investor_id: u64,
    #[serde(with = "money")]
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_funds_transfer_date: Option<Timestamp>,
}

/// A pending transfer in or out of the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    pub transfer_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_date: Option<Timestamp>,
    #[serde(with = "money")]
    pub amount: Decimal,
    pub source_account: String,
    pub status: String,
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Timestamp>,
    /// "Deposit" or "Withdrawal"
    pub operation: String,
    pub cancellable: bool,
}

/// Response for GET /accounts/{investorId}/funds/pending.
///
/// The API keys transfers by id inside an object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PendingTransfersResponse {
    #[serde(default)]
    pub transfers: Option<BTreeMap<u64, Transfer>>,
}

impl PendingTransfersResponse {
    /// Flatten the keyed transfers, ordered by `transfer_id`.
    pub fn into_transfers(self) -> Vec<Transfer> {
        let mut transfers = Vec::new();
        for (_, transfer) in self.transfers.unwrap_or_default() {
            transfers.push(transfer);
        }
        transfers.sort_by_key(|t| t.transfer_id);
        transfers
    }
}

/// Request for POST /accounts/{investorId}/funds/cancel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelTransfersRequest {
    pub transfer_ids: Vec<u64>,
}

/// Response for POST /accounts/{investorId}/funds/cancel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCancellation {
    pub investor_id: u64,
    #[serde(default)]
    pub cancellation_results: Vec<CancellationResult>,
}

/// Outcome of cancelling one transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationResult {
    pub transfer_id: u64,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_frequency_serde() {
        let f: TransferFrequency = serde_json::from_str(r#""LOAD_ON_DAY_1_AND_16""#).unwrap();
        assert_eq!(f, TransferFrequency::LoadOnDay1And16);
        assert_eq!(
            serde_json::to_string(&TransferFrequency::LoadNow).unwrap(),
            r#""LOAD_NOW""#
        );
        assert!(serde_json::from_str::<TransferFrequency>(r#""LOAD_YEARLY""#).is_err());
    }

    #[test]
    fn test_transfer_frequency_from_str_matches_serde() {
        for f in [
            TransferFrequency::LoadNow,
            TransferFrequency::LoadOnce,
            TransferFrequency::LoadWeekly,
            TransferFrequency::LoadBiweekly,
            TransferFrequency::LoadOnDay1And16,
            TransferFrequency::LoadMonthly,
        ] {
            let json = serde_json::to_string(&f).unwrap();
            assert_eq!(json, format!("\"{}\"", f));
            assert_eq!(f.as_str().parse::<TransferFrequency>().unwrap(), f);
        }
        assert!(TransferFrequency::LoadMonthly.is_recurring());
        assert!(!TransferFrequency::LoadNow.is_recurring());
    }

    #[test]
    fn test_funds_payload_omits_absent_dates() {
        let payload = FundsPayload::new(Decimal::from(100), TransferFrequency::LoadNow);
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"amount":"100","transferFrequency":"LOAD_NOW"}"#
        );
    }

    #[test]
    fn test_funds_payload_with_dates() {
        let start = Timestamp::parse("2015-01-22T00:00:00.000-0800").unwrap();
        let end = Timestamp::parse("2015-12-22T00:00:00.000-0800").unwrap();
        let payload = FundsPayload::new(Decimal::new(2550, 2), TransferFrequency::LoadMonthly)
            .with_start_date(start)
            .with_end_date(end);
        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&payload).unwrap()).unwrap();
        assert_eq!(value["amount"], "25.5");
        assert_eq!(value["startDate"], "2015-01-22T00:00:00.000-0800");
        assert_eq!(value["endDate"], "2015-12-22T00:00:00.000-0800");
    }

    #[test]
    fn test_deposit_funds_view() {
        let json = r#"{
            "investorId": 12345,
            "amount": 100,
            "frequency": "LOAD_NOW",
            "startDate": "2015-01-22T00:00:00.000-0800",
            "estimatedFundsTransferDate": "2015-01-22T00:00:00.000-0800"
        }"#;
        let deposit: Deposit = serde_json::from_str(json).unwrap();
        assert!(deposit.end_date.is_none());

        let funds = deposit.funds().unwrap();
        assert_eq!(funds.transfer_frequency, TransferFrequency::LoadNow);
        assert_eq!(funds.amount, Decimal::from(100));
        assert_eq!(funds.start_date, deposit.start_date);
    }

    #[test]
    fn test_deposit_unknown_frequency_has_no_funds_view() {
        let json = r#"{"investorId": 1, "amount": "5", "frequency": "LOAD_HOURLY"}"#;
        let deposit: Deposit = serde_json::from_str(json).unwrap();
        assert!(deposit.funds().is_none());
    }

    #[test]
    fn test_pending_transfers_flatten_without_padding() {
        let json = r#"{"transfers": {
            "9": {"transferId": 9, "amount": "20", "sourceAccount": "CHK-1234",
                  "status": "PENDING", "frequency": "LOAD_NOW", "operation": "Deposit",
                  "cancellable": true},
            "3": {"transferId": 3, "transferDate": "2015-01-22T00:00:00.000-0800",
                  "amount": 10.5, "sourceAccount": "CHK-1234", "status": "PENDING",
                  "frequency": "LOAD_MONTHLY", "endDate": null, "operation": "Deposit",
                  "cancellable": false}
        }}"#;
        let response: PendingTransfersResponse = serde_json::from_str(json).unwrap();
        let transfers = response.into_transfers();
        assert_eq!(transfers.len(), 2);
        assert_eq!(transfers[0].transfer_id, 3);
        assert_eq!(transfers[1].transfer_id, 9);
        assert!(transfers[0].end_date.is_none());
        assert!(transfers[1].transfer_date.is_none());
    }

    #[test]
    fn test_pending_transfers_empty_or_null() {
        let empty: PendingTransfersResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.into_transfers().is_empty());
        let null: PendingTransfersResponse = serde_json::from_str(r#"{"transfers":null}"#).unwrap();
        assert!(null.into_transfers().is_empty());
    }

    #[test]
    fn test_cancel_request_wire_names() {
        let request = CancelTransfersRequest {
            transfer_ids: vec![3, 9],
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"transferIds":[3,9]}"#
        );
    }
}
