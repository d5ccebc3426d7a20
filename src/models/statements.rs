//! Account statements: initialization request and the statement lifecycle.
//!
//! Statements are produced asynchronously on the bank side: `init_statement`
//! schedules one, `get_statement_info` is then polled until the status
//! reaches `Ready` (or `Error`). The statement query uses camelCase keys
//! unlike the PascalCase account resources.

use serde::{Deserialize, Serialize};

use super::Data;
use super::balances::Amount;

/// Request body payload of `init_statement`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InitStatementRequest {
    #[serde(rename = "Statement")]
    pub statement: StatementQuery,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementQuery {
    pub account_id: String,
    /// Inclusive start of the statement period, `YYYY-MM-DD`.
    pub start_date_time: String,
    /// Inclusive end of the statement period, `YYYY-MM-DD`.
    pub end_date_time: String,
}

/// Response of `get_statements_list`.
pub type StatementListResponse = Data<StatementList>;

/// Response of `init_statement` and `get_statement_info`.
pub type StatementResponse = Data<StatementList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct StatementList {
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statement {
    pub account_id: String,
    pub statement_id: String,
    pub status: StatementStatus,
    pub start_date_time: String,
    pub end_date_time: String,

    /// Present once the statement reaches `Ready`.
    #[serde(rename = "Transaction", default, skip_serializing_if = "Vec::is_empty")]
    pub transaction: Vec<Transaction>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum StatementStatus {
    Initialized,
    Processing,
    Ready,
    Error,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

/// One statement line.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,

    pub credit_debit_indicator: super::balances::CreditDebitIndicator,

    pub status: TransactionStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_process_date: Option<String>,

    #[serde(rename = "Amount")]
    pub amount: Amount,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(
        rename = "CounterParty",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub counter_party: Option<CounterParty>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TransactionStatus {
    Booked,
    Pending,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

/// Counterparty requisites attached to a statement line.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterParty {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpp: Option<String>,

    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_bic: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{StatementResponse, StatementStatus};

    #[test]
    fn parses_ready_statement_with_transactions() {
        let raw = r#"{
            "Data": {
                "Statement": [{
                    "accountId": "40702810901500000001/044525104",
                    "statementId": "2023-02-01-a1b2c3",
                    "status": "Ready",
                    "startDateTime": "2023-01-01",
                    "endDateTime": "2023-01-31",
                    "Transaction": [{
                        "transactionId": "trx-1",
                        "paymentId": "pay-1",
                        "creditDebitIndicator": "Debit",
                        "status": "Booked",
                        "documentNumber": "102",
                        "Amount": {"Amount": "500.00", "Currency": "RUB"},
                        "description": "Оплата по счету 12 от 30.01.2023",
                        "CounterParty": {
                            "inn": "7706428569",
                            "name": "ООО Ромашка",
                            "bankBic": "044525104"
                        }
                    }]
                }]
            }
        }"#;
        let parsed: StatementResponse = serde_json::from_str(raw).expect("parses");
        let statement = &parsed.data.statement[0];
        assert_eq!(statement.status, StatementStatus::Ready);
        assert_eq!(statement.transaction.len(), 1);
        let counter_party = statement.transaction[0]
            .counter_party
            .as_ref()
            .expect("counterparty");
        assert_eq!(counter_party.inn.as_deref(), Some("7706428569"));
    }

    #[test]
    fn pending_statement_defaults_to_no_transactions() {
        let raw = r#"{
            "Data": {
                "Statement": [{
                    "accountId": "40702810901500000001/044525104",
                    "statementId": "2023-02-01-a1b2c3",
                    "status": "Processing",
                    "startDateTime": "2023-01-01",
                    "endDateTime": "2023-01-31"
                }]
            }
        }"#;
        let parsed: StatementResponse = serde_json::from_str(raw).expect("parses");
        assert!(parsed.data.statement[0].transaction.is_empty());
    }

    #[test]
    fn vendor_added_statement_status_does_not_reject_payload() {
        let raw = r#"{
            "Data": {
                "Statement": [{
                    "accountId": "40702810901500000001/044525104",
                    "statementId": "2023-02-01-a1b2c3",
                    "status": "Archived",
                    "startDateTime": "2023-01-01",
                    "endDateTime": "2023-01-31"
                }]
            }
        }"#;
        let parsed: StatementResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.data.statement[0].status, StatementStatus::Unknown);
    }
}
