//! SBP (Faster Payments System): legal entities, merchants, QR codes,
//! incoming payments and refunds.

use serde::{Deserialize, Serialize};

use super::Data;

/// Response of `get_sbp_legal_entity` and `register_sbp_legal_entity`.
pub type LegalEntityResponse = Data<LegalEntity>;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEntity {
    pub legal_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    pub status: SbpRegistrationStatus,
}

/// Registration status shared by legal entities and merchants.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SbpRegistrationStatus {
    Active,
    Suspended,
    OnVerification,
    Rejected,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

/// Request body payload of `register_sbp_merchant`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMerchant {
    pub brand_name: String,

    /// Merchant category code, four digits.
    pub mcc: String,

    pub address: MerchantAddress,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_phone_number: Option<String>,

    #[serde(default)]
    pub capabilities: MerchantCapabilities,
}

/// QR acceptance modes enabled for a merchant: `001` static only, `002`
/// dynamic only, `011` both.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub enum MerchantCapabilities {
    #[serde(rename = "001")]
    StaticQr,
    #[serde(rename = "002")]
    DynamicQr,
    #[default]
    #[serde(rename = "011")]
    Both,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantAddress {
    pub country_code: String,
    pub region_code: String,
    pub city: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Response of `get_sbp_merchants_list`.
pub type MerchantListResponse = Data<MerchantList>;

/// Response of `register_sbp_merchant`.
pub type MerchantRegisteredResponse = Data<MerchantRegistered>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MerchantList {
    #[serde(rename = "MerchantList")]
    pub merchant_list: Vec<Merchant>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    pub merchant_id: String,
    pub brand_name: String,
    pub mcc: String,
    pub status: SbpRegistrationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<MerchantAddress>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantRegistered {
    pub merchant_id: String,
}

/// Request body payload of `register_qr_code`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterQrCode {
    /// Amount in kopecks. Required for dynamic codes, absent for static ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    pub payment_purpose: String,

    pub qrc_type: QrType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_params: Option<QrImageParams>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,

    /// Lifetime of a dynamic code in minutes; `0` means unlimited.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

/// QR code kind as the wire encodes it: `01` static, `02` dynamic.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QrType {
    #[serde(rename = "01")]
    Static,
    #[serde(rename = "02")]
    Dynamic,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrImageParams {
    /// `image/png` or `image/svg+xml`.
    pub media_type: String,
    pub width: u32,
    pub height: u32,
}

/// Response of `register_qr_code` and `get_qr_code_info`.
pub type QrCodeResponse = Data<QrCode>;

/// Response of `get_qr_codes_list`.
pub type QrCodeListResponse = Data<QrCodeList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QrCodeList {
    #[serde(rename = "qrCodeList")]
    pub qr_code_list: Vec<QrCode>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrCode {
    pub qrc_id: String,

    /// `https://qr.nspk.ru/...` link encoded in the code.
    pub payload: String,

    pub qrc_type: QrType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_purpose: Option<String>,

    /// Base64 image, present when `image_params` was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<QrImage>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrImage {
    pub media_type: String,
    pub content: String,
}

/// Response of `get_qr_code_payment_status`.
pub type QrPaymentStatusResponse = Data<QrPaymentStatusList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct QrPaymentStatusList {
    #[serde(rename = "paymentList")]
    pub payment_list: Vec<QrPaymentStatus>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrPaymentStatus {
    pub qrc_id: String,

    /// NSPK operation result code, e.g. `RQ00000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub status: QrPaymentStatusCode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trx_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum QrPaymentStatusCode {
    NotStarted,
    Received,
    InProgress,
    Accepted,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Response of `get_sbp_payments`.
pub type SbpPaymentListResponse = Data<SbpPaymentList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SbpPaymentList {
    #[serde(rename = "Payments")]
    pub payments: Vec<SbpPayment>,
}

/// One incoming SBP payment.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SbpPayment {
    pub trx_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qrc_id: Option<String>,

    /// Decimal string in rubles.
    pub amount: String,

    pub currency: String,

    pub status: QrPaymentStatusCode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merchant_id: Option<String>,
}

/// Request body payload of `start_sbp_refund`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundRequest {
    pub account_code: String,
    pub bank_code: String,

    /// Decimal string in rubles.
    pub amount: String,

    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qrc_id: Option<String>,

    pub purpose: String,

    /// Transaction being refunded.
    pub ref_transaction_id: String,
}

/// Response of `start_sbp_refund` and `get_sbp_refund_data`.
pub type RefundStatusResponse = Data<RefundStatus>;

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundStatus {
    pub request_id: String,
    pub status: RefundStatusCode,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum RefundStatusCode {
    Initiated,
    Completed,
    Rejected,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::{QrCodeResponse, QrType, RegisterQrCode};
    use crate::models::Data;
    use serde_json::json;

    #[test]
    fn static_qr_registration_omits_dynamic_fields() {
        let request = RegisterQrCode {
            amount: None,
            currency: None,
            payment_purpose: "Оплата заказа".to_owned(),
            qrc_type: QrType::Static,
            image_params: None,
            source_name: None,
            ttl: None,
        };
        let encoded = serde_json::to_value(Data::new(request)).expect("encodes");
        assert_eq!(
            encoded,
            json!({"Data": {"paymentPurpose": "Оплата заказа", "qrcType": "01"}})
        );
    }

    #[test]
    fn parses_registered_qr_code_with_image() {
        let raw = r#"{
            "Data": {
                "qrcId": "AS10006GO57LP9B59HI0E9EMGG77BPR2",
                "payload": "https://qr.nspk.ru/AS10006GO57LP9B59HI0E9EMGG77BPR2",
                "qrcType": "02",
                "merchantId": "MA0000000001",
                "amount": 10050,
                "currency": "RUB",
                "image": {"mediaType": "image/png", "content": "iVBORw0KGgo="}
            }
        }"#;
        let parsed: QrCodeResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.data.qrc_type, QrType::Dynamic);
        assert_eq!(parsed.data.amount, Some(10050));
        assert_eq!(
            parsed.data.image.as_ref().expect("image").media_type,
            "image/png"
        );
    }
}
