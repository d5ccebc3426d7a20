//! Account resources of the open-banking area.

use serde::{Deserialize, Serialize};

use super::Data;

/// Response of `get_accounts_list`.
pub type AccountListResponse = Data<AccountList>;

/// Response of `get_account_info`.
pub type AccountResponse = Data<AccountList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccountList {
    #[serde(rename = "Account")]
    pub account: Vec<Account>,
}

/// One settlement or transit account of the customer.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Account {
    /// Account number and BIC joined with `/`, e.g.
    /// `40702810901500000001/044525104`.
    pub account_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transit_account: Option<String>,

    pub customer_code: String,

    pub status: AccountStatus,

    /// RFC 3339 timestamp of the last status change.
    pub status_update_date_time: String,

    /// ISO 4217 currency code, e.g. `RUB`.
    pub currency: String,

    pub account_type: AccountType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_sub_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_details: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AccountStatus {
    Enabled,
    Disabled,
    Deleted,
    ProForma,
    Pending,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum AccountType {
    Business,
    Personal,
}

#[cfg(test)]
mod tests {
    use super::{AccountListResponse, AccountStatus, AccountType};

    #[test]
    fn parses_account_list_payload() {
        let raw = r#"{
            "Data": {
                "Account": [{
                    "AccountId": "40702810901500000001/044525104",
                    "CustomerCode": "300000092",
                    "Status": "Enabled",
                    "StatusUpdateDateTime": "2023-02-01T10:22:00+03:00",
                    "Currency": "RUB",
                    "AccountType": "Business",
                    "AccountSubType": "CurrentAccount",
                    "RegistrationDate": "2020-11-19"
                }]
            },
            "Links": {"Self": "https://enter.tochka.com/uapi/open-banking/v1.0/accounts"},
            "Meta": {"TotalPages": 1}
        }"#;
        let parsed: AccountListResponse = serde_json::from_str(raw).expect("parses");
        let account = &parsed.data.account[0];
        assert_eq!(account.account_id, "40702810901500000001/044525104");
        assert_eq!(account.status, AccountStatus::Enabled);
        assert_eq!(account.account_type, AccountType::Business);
        assert!(account.transit_account.is_none());
    }
}
