//! Ruble payment orders: creation for signing, direct creation, status.

use serde::{Deserialize, Serialize};

use super::Data;

/// Request body payload of `create_payment_for_sign` and
/// `create_payment_order`.
///
/// `create_payment_for_sign` places a draft in the customer's online bank for
/// manual signing; `create_payment_order` executes directly and requires the
/// corresponding consent.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    /// Payer account number.
    pub account_code: String,

    /// Payer bank BIC.
    pub bank_code: String,

    pub counterparty_account_number: String,

    pub counterparty_bank_bic: String,

    #[serde(rename = "counterpartyINN", default, skip_serializing_if = "Option::is_none")]
    pub counterparty_inn: Option<String>,

    #[serde(rename = "counterpartyKPP", default, skip_serializing_if = "Option::is_none")]
    pub counterparty_kpp: Option<String>,

    pub counterparty_name: String,

    /// Decimal string, e.g. `"100.50"`.
    pub payment_amount: String,

    /// `YYYY-MM-DD`.
    pub payment_date: String,

    pub payment_number: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_priority: Option<String>,

    pub payment_purpose: String,

    /// Budget payment requisites; absent for ordinary transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_info: Option<TaxInfo>,
}

/// Budget payment fields (поля 104-110 платежного поручения).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kbk: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub oktmo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_status: Option<String>,
}

/// Response of `create_payment_for_sign` and `create_payment_order`.
pub type PaymentCreatedResponse = Data<PaymentCreated>;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentCreated {
    pub request_id: String,
}

/// Response of `get_payment_status`.
pub type PaymentStatusResponse = Data<PaymentStatus>;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatus {
    pub request_id: String,

    pub status: PaymentStatusCode,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<super::ErrorDetail>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum PaymentStatusCode {
    Initiated,
    WaitingForSign,
    SentToBank,
    Executed,
    Rejected,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::{PaymentOrder, PaymentStatusCode, PaymentStatusResponse};
    use crate::models::Data;
    use serde_json::json;

    #[test]
    fn payment_order_serializes_with_vendor_field_names() {
        let order = PaymentOrder {
            account_code: "40702810901500000001".to_owned(),
            bank_code: "044525104".to_owned(),
            counterparty_account_number: "40702810123450101230".to_owned(),
            counterparty_bank_bic: "044525225".to_owned(),
            counterparty_inn: Some("7706428569".to_owned()),
            counterparty_kpp: None,
            counterparty_name: "ООО Ромашка".to_owned(),
            payment_amount: "100.50".to_owned(),
            payment_date: "2023-02-06".to_owned(),
            payment_number: 1,
            payment_priority: Some("5".to_owned()),
            payment_purpose: "Оплата по договору 12-Н".to_owned(),
            tax_info: None,
        };
        let encoded = serde_json::to_value(Data::new(order)).expect("encodes");
        let data = &encoded["Data"];
        assert_eq!(data["counterpartyINN"], json!("7706428569"));
        assert_eq!(data["paymentAmount"], json!("100.50"));
        assert!(data.get("counterpartyKPP").is_none());
        assert!(data.get("taxInfo").is_none());
    }

    #[test]
    fn unknown_payment_status_falls_back() {
        let raw = r#"{"Data": {"requestId": "openapi-deadbeef", "status": "OnHold"}}"#;
        let parsed: PaymentStatusResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.data.status, PaymentStatusCode::Unknown);
        assert!(parsed.data.errors.is_empty());
    }
}
