//! Invoices (bills) issued to counterparties.

use serde::{Deserialize, Serialize};

use super::Data;

/// Request body payload of `send_invoice`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendInvoice {
    pub customer_code: String,

    /// Issuer account number.
    pub account_code: String,

    /// Issuer bank BIC.
    pub bank_code: String,

    /// `YYYY-MM-DD`.
    pub payment_date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    pub second_side: InvoiceCounterparty,

    pub positions: Vec<InvoicePosition>,

    /// When set, the bank emails the rendered invoice to the counterparty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counterparty_email: Option<String>,
}

/// Counterparty the invoice is billed to.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCounterparty {
    pub legal_entity_name: String,

    pub inn: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kpp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_bic: Option<String>,
}

/// One invoice line item.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePosition {
    pub position_name: String,

    /// OKEI unit code, e.g. `796` for pieces.
    pub unit_code: String,

    /// Decimal string.
    pub quantity: String,

    /// Unit price, decimal string.
    pub price: String,

    pub vat_type: VatType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum VatType {
    None,
    Vat0,
    Vat10,
    Vat20,
}

/// Response of `send_invoice`.
pub type InvoiceCreatedResponse = Data<InvoiceCreated>;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceCreated {
    pub document_id: String,
}

/// Response of `get_invoice_payment_status`.
pub type InvoicePaymentStatusResponse = Data<InvoicePaymentStatus>;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoicePaymentStatus {
    pub payment_status: InvoicePaymentStatusCode,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoicePaymentStatusCode {
    PaymentWaiting,
    PaymentPaid,
    PaymentCancelled,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::{InvoicePaymentStatusCode, InvoicePaymentStatusResponse, VatType};

    #[test]
    fn parses_invoice_payment_status() {
        let raw = r#"{"Data": {"paymentStatus": "payment_paid"}}"#;
        let parsed: InvoicePaymentStatusResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(
            parsed.data.payment_status,
            InvoicePaymentStatusCode::PaymentPaid
        );
    }

    #[test]
    fn vat_type_uses_wire_spelling() {
        assert_eq!(
            serde_json::to_string(&VatType::Vat20).expect("encodes"),
            r#""vat20""#
        );
    }
}
