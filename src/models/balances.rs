//! Balance resources of the open-banking area.

use serde::{Deserialize, Serialize};

use super::Data;

/// Response of `get_balances_list` and `get_balance_info`.
pub type BalanceListResponse = Data<BalanceList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct BalanceList {
    #[serde(rename = "Balance")]
    pub balance: Vec<Balance>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Balance {
    pub account_id: String,

    pub credit_debit_indicator: CreditDebitIndicator,

    #[serde(rename = "Type")]
    pub balance_type: BalanceType,

    /// RFC 3339 timestamp the balance was computed at.
    pub date_time: String,

    pub amount: Amount,
}

/// Monetary amount as the bank transmits it: a decimal string plus an
/// ISO 4217 currency code. Kept as strings to avoid float rounding.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Amount {
    pub amount: String,
    pub currency: String,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CreditDebitIndicator {
    Credit,
    Debit,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum BalanceType {
    ClosingAvailable,
    ClosingBooked,
    Expected,
    OpeningAvailable,
    OpeningBooked,
}

#[cfg(test)]
mod tests {
    use super::{BalanceListResponse, BalanceType, CreditDebitIndicator};

    #[test]
    fn parses_balance_payload() {
        let raw = r#"{
            "Data": {
                "Balance": [{
                    "AccountId": "40702810901500000001/044525104",
                    "CreditDebitIndicator": "Credit",
                    "Type": "ClosingAvailable",
                    "DateTime": "2023-02-01T10:22:00+03:00",
                    "Amount": {"Amount": "1234.56", "Currency": "RUB"}
                }]
            }
        }"#;
        let parsed: BalanceListResponse = serde_json::from_str(raw).expect("parses");
        let balance = &parsed.data.balance[0];
        assert_eq!(balance.credit_debit_indicator, CreditDebitIndicator::Credit);
        assert_eq!(balance.balance_type, BalanceType::ClosingAvailable);
        assert_eq!(balance.amount.amount, "1234.56");
    }
}
