//! Webhook subscription settings and notification payloads.

use serde::{Deserialize, Serialize};

use super::Data;

/// Request body payload of `create_webhook` and `edit_webhook`, and the
/// `Data` payload of `get_webhooks`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookSettings {
    pub webhooks_list: Vec<WebhookEvent>,

    /// HTTPS endpoint notifications are delivered to.
    pub url: String,
}

/// Response of `get_webhooks`, `create_webhook` and `edit_webhook`.
pub type WebhookSettingsResponse = Data<WebhookSettings>;

/// Event kinds a webhook can subscribe to.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookEvent {
    IncomingPayment,
    OutgoingPayment,
    IncomingSbpPayment,
    AcquiringInternetPayment,
}

/// Request body payload of `send_webhook_test`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookTest {
    pub webhook_type: WebhookEvent,
}

/// Response of `send_webhook_test` and `delete_webhook`.
pub type WebhookAckResponse = Data<WebhookAck>;

#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookAck {
    pub result: bool,
}

/// Notification delivered to the subscribed endpoint.
///
/// The bank signs notifications as JWT; after verification the payload
/// decodes into this shape. Event-specific fields beyond the common ones are
/// kept in `extra`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookNotification {
    pub webhook_type: WebhookEvent,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_code: Option<String>,

    /// Decimal string in rubles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::{WebhookEvent, WebhookNotification, WebhookSettings};
    use serde_json::json;

    #[test]
    fn settings_use_camel_case_event_names() {
        let settings = WebhookSettings {
            webhooks_list: vec![WebhookEvent::IncomingPayment, WebhookEvent::IncomingSbpPayment],
            url: "https://shop.example.ru/hooks/tochka".to_owned(),
        };
        let encoded = serde_json::to_value(&settings).expect("encodes");
        assert_eq!(
            encoded["webhooksList"],
            json!(["incomingPayment", "incomingSbpPayment"])
        );
    }

    #[test]
    fn notification_keeps_event_specific_fields() {
        let raw = r#"{
            "webhookType": "incomingSbpPayment",
            "customerCode": "300000092",
            "amount": "100.50",
            "currency": "RUB",
            "qrcId": "AS10006GO57LP9B59HI0E9EMGG77BPR2"
        }"#;
        let parsed: WebhookNotification = serde_json::from_str(raw).expect("parses");
        assert_eq!(parsed.webhook_type, WebhookEvent::IncomingSbpPayment);
        assert_eq!(
            parsed.extra.get("qrcId").and_then(|v| v.as_str()),
            Some("AS10006GO57LP9B59HI0E9EMGG77BPR2")
        );
    }
}
