//! Customer consents gating access to the other API areas.

use serde::{Deserialize, Serialize};

use super::Data;

/// Request body payload of `create_consent`.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateConsent {
    #[serde(rename = "permissions")]
    pub permissions: Vec<Permission>,

    /// RFC 3339 timestamp; absent means indefinite.
    #[serde(
        rename = "expirationDateTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date_time: Option<String>,
}

/// Permission scopes a consent can grant.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Permission {
    ReadAccountsBasic,
    ReadAccountsDetail,
    ReadBalances,
    ReadStatements,
    ReadCustomerData,
    CreatePaymentForSign,
    CreatePaymentOrder,
    #[serde(rename = "ReadSBPData")]
    ReadSbpData,
    #[serde(rename = "EditSBPData")]
    EditSbpData,
    ManageWebhookData,
    ManageInvoiceData,
}

/// Response of `create_consent` and `get_consent_info`.
pub type ConsentResponse = Data<Consent>;

/// Response of `get_consents_list`.
pub type ConsentListResponse = Data<ConsentList>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ConsentList {
    #[serde(rename = "Consent")]
    pub consent: Vec<Consent>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Consent {
    pub consent_id: String,

    pub status: ConsentStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_update_date_time: Option<String>,

    pub permissions: Vec<Permission>,

    /// Application the consent was granted to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date_time: Option<String>,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConsentStatus {
    AwaitingAuthorisation,
    Authorised,
    Rejected,
    Revoked,
    /// Statuses added by the bank after this registry revision.
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::{ConsentResponse, ConsentStatus, CreateConsent, Permission};
    use crate::models::Data;
    use serde_json::json;

    #[test]
    fn consent_request_keeps_vendor_permission_names() {
        let request = CreateConsent {
            permissions: vec![Permission::ReadBalances, Permission::ReadSbpData],
            expiration_date_time: None,
        };
        let encoded = serde_json::to_value(Data::new(request)).expect("encodes");
        assert_eq!(
            encoded["Data"]["permissions"],
            json!(["ReadBalances", "ReadSBPData"])
        );
    }

    #[test]
    fn parses_awaiting_consent() {
        let raw = r#"{
            "Data": {
                "consentId": "consent-123",
                "status": "AwaitingAuthorisation",
                "creationDateTime": "2023-02-01T10:22:00+03:00",
                "permissions": ["ReadAccountsBasic", "ReadStatements"]
            }
        }"#;
        let parsed: ConsentResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.data.status, ConsentStatus::AwaitingAuthorisation);
        assert_eq!(parsed.data.permissions.len(), 2);
    }

    #[test]
    fn vendor_added_consent_status_does_not_reject_payload() {
        let raw = r#"{
            "Data": {
                "consentId": "consent-123",
                "status": "Expired",
                "permissions": ["ReadBalances"]
            }
        }"#;
        let parsed: ConsentResponse = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.data.status, ConsentStatus::Unknown);
        assert_eq!(parsed.data.consent_id, "consent-123");
    }
}
