//! Listed loan payloads.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::shared::{money, Timestamp};

/// Response for GET /loans/listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanListing {
    /// When the listing snapshot was taken
    pub as_of_date: Timestamp,
    #[serde(default)]
    pub loans: Vec<Loan>,
}

impl LoanListing {
    /// Loans that still need funding, i.e. `funded_amount < loan_amount`.
    pub fn in_funding(&self) -> impl Iterator<Item = &Loan> {
        self.loans.iter().filter(|loan| loan.remaining_amount() > Decimal::ZERO)
    }
}

/// A loan listed on the platform.
///
/// Credit-history attributes come straight from the borrower's credit report
/// and are `None` when the bureau did not report them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    // ── Listing ──────────────────────────────────────────────────────────
    #[serde(rename = "id")]
    pub id: u64,
    #[serde(rename = "memberId")]
    pub member_id: u64,
    /// Term in months (36 or 60)
    #[serde(rename = "term")]
    pub term: u32,
    #[serde(rename = "intRate", with = "money")]
    pub interest_rate: Decimal,
    #[serde(rename = "expDefaultRate", with = "money")]
    pub expected_default_rate: Decimal,
    #[serde(rename = "serviceFeeRate", with = "money")]
    pub service_fee_rate: Decimal,
    /// Monthly payment owed by the borrower
    #[serde(rename = "installment", with = "money")]
    pub installment: Decimal,
    #[serde(rename = "grade")]
    pub grade: String,
    #[serde(rename = "subGrade")]
    pub sub_grade: String,
    /// Employment length in months
    #[serde(rename = "empLength", default, skip_serializing_if = "Option::is_none")]
    pub employment_length: Option<u32>,
    #[serde(rename = "homeOwnership")]
    pub home_ownership: String,
    #[serde(rename = "annualInc", with = "money")]
    pub annual_income: Decimal,
    #[serde(rename = "isIncV")]
    pub is_income_verified: String,
    #[serde(rename = "acceptD")]
    pub accept_date: Timestamp,
    #[serde(rename = "expD")]
    pub expire_date: Timestamp,
    #[serde(rename = "listD")]
    pub list_date: Timestamp,
    #[serde(rename = "creditPullD")]
    pub credit_pull_date: Timestamp,
    #[serde(rename = "reviewStatusD", default, skip_serializing_if = "Option::is_none")]
    pub review_status_date: Option<Timestamp>,
    #[serde(rename = "reviewStatus")]
    pub review_status: String,
    #[serde(rename = "desc", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "purpose")]
    pub purpose: String,
    /// First three digits of the borrower's zip code
    #[serde(rename = "addrZip")]
    pub address_zip: String,
    #[serde(rename = "addrState")]
    pub address_state: String,
    #[serde(rename = "investorCount", default, skip_serializing_if = "Option::is_none")]
    pub investor_count: Option<u32>,
    #[serde(rename = "ilsExpD", default, skip_serializing_if = "Option::is_none")]
    pub initial_list_status_expire_date: Option<Timestamp>,
    /// "W" (whole) or "F" (fractional)
    #[serde(rename = "initialListStatus")]
    pub initial_list_status: String,
    #[serde(rename = "empTitle", default, skip_serializing_if = "Option::is_none")]
    pub employment_title: Option<String>,

    // ── Credit history ───────────────────────────────────────────────────
    #[serde(rename = "accNowDelinq", default, skip_serializing_if = "Option::is_none")]
    pub accounts_now_delinquent: Option<u32>,
    #[serde(rename = "accOpenPast24Mths", default, skip_serializing_if = "Option::is_none")]
    pub accounts_open_past_24_months: Option<u32>,
    #[serde(rename = "bcOpenToBuy", default, skip_serializing_if = "Option::is_none")]
    pub bankcards_open_to_buy: Option<u64>,
    #[serde(rename = "percentBcGt75", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub percent_bankcards_greater_than_75: Option<Decimal>,
    #[serde(rename = "bcUtil", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub bankcards_utilization: Option<Decimal>,
    #[serde(rename = "dti", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub debt_to_income: Option<Decimal>,
    #[serde(rename = "delinq2Yrs", default, skip_serializing_if = "Option::is_none")]
    pub delinquencies_in_2_years: Option<u32>,
    #[serde(rename = "delinqAmnt", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub delinquent_amount: Option<Decimal>,
    #[serde(rename = "earliestCrLine", default, skip_serializing_if = "Option::is_none")]
    pub earliest_credit_line: Option<Timestamp>,
    #[serde(rename = "ficoRangeLow")]
    pub fico_range_low: u32,
    #[serde(rename = "ficoRangeHigh")]
    pub fico_range_high: u32,
    #[serde(rename = "inqLast6Mths", alias = "incLast6Mths", default, skip_serializing_if = "Option::is_none")]
    pub inquiries_last_6_months: Option<u32>,
    #[serde(rename = "mthsSinceLastDelinq", default, skip_serializing_if = "Option::is_none")]
    pub months_since_last_delinquency: Option<u32>,
    #[serde(rename = "mthsSinceLastRecord", default, skip_serializing_if = "Option::is_none")]
    pub months_since_last_record: Option<u32>,
    #[serde(rename = "mthsSinceRecentInq", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_inquiry: Option<u32>,
    #[serde(rename = "mthsSinceRecentRevolDelinq", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_revolving_delinquency: Option<u32>,
    #[serde(rename = "mthsSinceRecentBc", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_bankcard: Option<u32>,
    #[serde(rename = "mortAcc", default, skip_serializing_if = "Option::is_none")]
    pub mortgage_accounts: Option<u32>,
    #[serde(rename = "openAcc", default, skip_serializing_if = "Option::is_none")]
    pub open_accounts: Option<u32>,
    #[serde(rename = "pubRec", default, skip_serializing_if = "Option::is_none")]
    pub public_records: Option<u32>,
    #[serde(rename = "totalBalExMort", default, skip_serializing_if = "Option::is_none")]
    pub total_balance_excluding_mortgage: Option<u64>,
    #[serde(rename = "revolBal", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub revolving_balance: Option<Decimal>,
    #[serde(rename = "revolUtil", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub revolving_utilization: Option<Decimal>,
    #[serde(rename = "totalBcLimit", default, skip_serializing_if = "Option::is_none")]
    pub total_bankcard_limit: Option<u64>,
    #[serde(rename = "totalAcc", default, skip_serializing_if = "Option::is_none")]
    pub total_accounts: Option<u32>,
    #[serde(rename = "totalIlHighCreditLimit", alias = "totalIHighCreditLimit", default, skip_serializing_if = "Option::is_none")]
    pub total_installment_high_credit_limit: Option<u64>,
    #[serde(rename = "numRevAccts", default, skip_serializing_if = "Option::is_none")]
    pub revolving_accounts: Option<u32>,
    #[serde(rename = "mthsSinceRecentBcDlq", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_bankcard_delinquency: Option<u32>,
    #[serde(rename = "pubRecBankruptcies", default, skip_serializing_if = "Option::is_none")]
    pub public_record_bankruptcies: Option<u32>,
    #[serde(rename = "numAcctsEver120Ppd", default, skip_serializing_if = "Option::is_none")]
    pub accounts_ever_120_days_past_due: Option<u32>,
    #[serde(rename = "chargeoffWithin12Mths", default, skip_serializing_if = "Option::is_none")]
    pub chargeoff_within_12_months: Option<u32>,
    #[serde(rename = "collections12MthsExMed", default, skip_serializing_if = "Option::is_none")]
    pub collections_in_12_months_excluding_medical: Option<u32>,
    #[serde(rename = "taxLiens", default, skip_serializing_if = "Option::is_none")]
    pub tax_liens: Option<u32>,
    #[serde(rename = "mthsSinceLastMajorDerog", default, skip_serializing_if = "Option::is_none")]
    pub months_since_last_major_derogatory_mark: Option<u32>,
    #[serde(rename = "numSats", default, skip_serializing_if = "Option::is_none")]
    pub satisfactory_accounts: Option<u32>,
    #[serde(rename = "numTlOpPast12m", default, skip_serializing_if = "Option::is_none")]
    pub accounts_opened_in_past_12_months: Option<u32>,
    #[serde(rename = "moSinRcntTl", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_account_opened: Option<u32>,
    #[serde(rename = "totHiCredLim", default, skip_serializing_if = "Option::is_none")]
    pub total_high_credit_limit: Option<u64>,
    #[serde(rename = "totCurBal", default, skip_serializing_if = "Option::is_none")]
    pub total_current_balance: Option<u64>,
    #[serde(rename = "avgCurBal", default, skip_serializing_if = "Option::is_none")]
    pub average_current_balance: Option<u64>,
    #[serde(rename = "numBcTl", default, skip_serializing_if = "Option::is_none")]
    pub bankcard_accounts: Option<u32>,
    #[serde(rename = "numActvBcTl", alias = "numActvBctl", default, skip_serializing_if = "Option::is_none")]
    pub active_bankcard_accounts: Option<u32>,
    #[serde(rename = "numBcSats", default, skip_serializing_if = "Option::is_none")]
    pub satisfactory_bankcard_accounts: Option<u32>,
    #[serde(rename = "pctTlNvrDlq", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub percent_trades_never_delinquent: Option<Decimal>,
    #[serde(rename = "numTl90gDpd24m", default, skip_serializing_if = "Option::is_none")]
    pub accounts_90_days_past_due_in_24_months: Option<u32>,
    #[serde(rename = "numTl30dpd", default, skip_serializing_if = "Option::is_none")]
    pub accounts_30_days_past_due_in_2_months: Option<u32>,
    #[serde(rename = "numTl120dpd2m", default, skip_serializing_if = "Option::is_none")]
    pub accounts_120_days_past_due_in_2_months: Option<u32>,
    #[serde(rename = "numIlTl", default, skip_serializing_if = "Option::is_none")]
    pub installment_accounts: Option<u32>,
    #[serde(rename = "moSinOldIlAcct", default, skip_serializing_if = "Option::is_none")]
    pub months_since_oldest_installment_account: Option<u32>,
    #[serde(rename = "numActvRevTl", default, skip_serializing_if = "Option::is_none")]
    pub active_revolving_trades: Option<u32>,
    #[serde(rename = "moSinOldRevTlOp", default, skip_serializing_if = "Option::is_none")]
    pub months_since_oldest_revolving_account: Option<u32>,
    #[serde(rename = "moSinRcntRevTlOp", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_revolving_account: Option<u32>,
    #[serde(rename = "totalRevHiLim", default, skip_serializing_if = "Option::is_none")]
    pub total_revolving_high_credit_limit: Option<u64>,
    #[serde(rename = "numRevTlBalGt0", default, skip_serializing_if = "Option::is_none")]
    pub revolving_trades_with_positive_balance: Option<u32>,
    #[serde(rename = "numOpRevTl", default, skip_serializing_if = "Option::is_none")]
    pub open_revolving_accounts: Option<u32>,
    #[serde(rename = "totCollAmt", default, skip_serializing_if = "Option::is_none")]
    pub total_collection_amounts: Option<u64>,

    // ── Funding and joint application ────────────────────────────────────
    /// Amount already committed by investors
    #[serde(rename = "fundedAmount", with = "money")]
    pub funded_amount: Decimal,
    #[serde(rename = "loanAmount", with = "money")]
    pub loan_amount: Decimal,
    /// "INDIVIDUAL" or "JOINT"
    #[serde(rename = "applicationType", default, skip_serializing_if = "Option::is_none")]
    pub application_type: Option<String>,
    #[serde(rename = "annualIncJoint", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub joint_annual_income: Option<Decimal>,
    #[serde(rename = "dtiJoint", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub joint_debt_to_income: Option<Decimal>,
    #[serde(rename = "isIncVJoint", default, skip_serializing_if = "Option::is_none")]
    pub is_joint_income_verified: Option<String>,
    #[serde(rename = "openAcc6m", default, skip_serializing_if = "Option::is_none")]
    pub open_trades_in_last_6_months: Option<u32>,
    #[serde(rename = "openIl6m", default, skip_serializing_if = "Option::is_none")]
    pub active_installments_in_last_6_months: Option<u32>,
    #[serde(rename = "openIl12m", default, skip_serializing_if = "Option::is_none")]
    pub opened_installments_in_last_12_months: Option<u32>,
    #[serde(rename = "openIl24m", default, skip_serializing_if = "Option::is_none")]
    pub opened_installments_in_last_24_months: Option<u32>,
    #[serde(rename = "mthsSinceRcntIl", default, skip_serializing_if = "Option::is_none")]
    pub months_since_recent_installments: Option<u32>,
    #[serde(rename = "totalBalIl", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub total_installments_balance: Option<Decimal>,
    #[serde(rename = "iLUtil", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub installments_utilization: Option<Decimal>,
    #[serde(rename = "openRv12m", default, skip_serializing_if = "Option::is_none")]
    pub opened_revolving_trades_in_last_12_months: Option<u32>,
    #[serde(rename = "openRv24m", default, skip_serializing_if = "Option::is_none")]
    pub opened_revolving_trades_in_last_24_months: Option<u32>,
    #[serde(rename = "maxBalBc", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub maximum_current_balance_on_revolving_accounts: Option<Decimal>,
    #[serde(rename = "allUtil", default, with = "money::option", skip_serializing_if = "Option::is_none")]
    pub all_utilization: Option<Decimal>,
    #[serde(rename = "inqFi", default, skip_serializing_if = "Option::is_none")]
    pub personal_finance_inquiries: Option<u32>,
    #[serde(rename = "totalCuTl", default, skip_serializing_if = "Option::is_none")]
    pub credit_union_trades: Option<u32>,
    #[serde(rename = "inqLast12m", default, skip_serializing_if = "Option::is_none")]
    pub credit_inquiries_in_last_12_months: Option<u32>,
}

impl Loan {
    /// Amount still open for investment.
    pub fn remaining_amount(&self) -> Decimal {
        self.loan_amount - self.funded_amount
    }

    pub fn is_joint(&self) -> bool {
        self.application_type.as_deref() == Some("JOINT")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = include_str!("../../../tests/fixtures/loan_listing.json");

    #[test]
    fn test_listing_deserialize() {
        let listing: LoanListing = serde_json::from_str(LISTING).unwrap();
        assert_eq!(listing.as_of_date.to_string(), "2015-02-03T14:00:07.133-0800");
        assert_eq!(listing.loans.len(), 2);

        let loan = &listing.loans[0];
        assert_eq!(loan.id, 38437135);
        assert_eq!(loan.interest_rate, Decimal::new(1199, 2));
        assert_eq!(loan.installment, Decimal::new(39852, 2));
        assert_eq!(loan.employment_length, Some(120));
        assert_eq!(loan.debt_to_income, Some(Decimal::new(1653, 2)));
        assert_eq!(loan.inquiries_last_6_months, Some(1));
        assert!(loan.description.is_none());
        assert!(loan.months_since_last_delinquency.is_none());
        assert!(!loan.is_joint());
    }

    #[test]
    fn test_absent_credit_attributes_stay_none() {
        let listing: LoanListing = serde_json::from_str(LISTING).unwrap();
        let loan = &listing.loans[1];
        assert!(loan.employment_length.is_none());
        assert!(loan.review_status_date.is_none());
        assert!(loan.earliest_credit_line.is_none());
        assert!(loan.bankcards_utilization.is_none());
        assert!(loan.total_current_balance.is_none());
        assert_eq!(loan.description.as_deref(), Some("Consolidating two cards"));
    }

    #[test]
    fn test_legacy_field_names_accepted() {
        let listing: LoanListing = serde_json::from_str(LISTING).unwrap();
        let loan = &listing.loans[1];
        assert_eq!(loan.inquiries_last_6_months, Some(2));
        assert_eq!(loan.active_bankcard_accounts, Some(3));
        assert_eq!(loan.total_installment_high_credit_limit, Some(0));
    }

    #[test]
    fn test_joint_application_fields() {
        let listing: LoanListing = serde_json::from_str(LISTING).unwrap();
        let loan = &listing.loans[1];
        assert!(loan.is_joint());
        assert_eq!(loan.joint_annual_income, Some(Decimal::from(97000)));
        assert_eq!(loan.is_joint_income_verified.as_deref(), Some("SOURCE_VERIFIED"));
    }

    #[test]
    fn test_in_funding_filters_fully_funded() {
        let listing: LoanListing = serde_json::from_str(LISTING).unwrap();
        let open: Vec<u64> = listing.in_funding().map(|l| l.id).collect();
        assert_eq!(open, vec![38437135]);
        assert_eq!(listing.loans[0].remaining_amount(), Decimal::from(3625));
    }

    #[test]
    fn test_empty_listing() {
        let listing: LoanListing =
            serde_json::from_str(r#"{"asOfDate":"2015-02-03T14:00:07.133-0800"}"#).unwrap();
        assert!(listing.loans.is_empty());
    }

    #[test]
    fn test_serialize_uses_wire_names() {
        let listing: LoanListing = serde_json::from_str(LISTING).unwrap();
        let value = serde_json::to_value(&listing.loans[0]).unwrap();
        assert_eq!(value["intRate"], "11.99");
        assert_eq!(value["acceptD"], "2015-01-27T10:41:40.000-0800");
        assert!(value.get("desc").is_none());
    }
}
