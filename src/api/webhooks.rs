use crate::models::Data;
use crate::models::webhooks::{
    WebhookAckResponse, WebhookSettings, WebhookSettingsResponse, WebhookTest,
};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Fetches the webhook settings of an application.
    pub async fn get_webhooks(
        &self,
        client_id: &str,
    ) -> Result<WebhookSettingsResponse, ClientError> {
        self.call_typed("get_webhooks", &[("clientId", client_id)], &[], None)
            .await
    }

    /// Creates the webhook subscription of an application.
    pub async fn create_webhook(
        &self,
        client_id: &str,
        settings: WebhookSettings,
    ) -> Result<WebhookSettingsResponse, ClientError> {
        let body = serde_json::to_value(Data::new(settings))?;
        self.call_typed("create_webhook", &[("clientId", client_id)], &[], Some(body))
            .await
    }

    /// Replaces the webhook subscription of an application.
    pub async fn edit_webhook(
        &self,
        client_id: &str,
        settings: WebhookSettings,
    ) -> Result<WebhookSettingsResponse, ClientError> {
        let body = serde_json::to_value(Data::new(settings))?;
        self.call_typed("edit_webhook", &[("clientId", client_id)], &[], Some(body))
            .await
    }

    /// Removes the webhook subscription of an application.
    pub async fn delete_webhook(
        &self,
        client_id: &str,
    ) -> Result<WebhookAckResponse, ClientError> {
        self.call_typed("delete_webhook", &[("clientId", client_id)], &[], None)
            .await
    }

    /// Asks the bank to deliver a test notification of the given kind.
    pub async fn send_webhook_test(
        &self,
        client_id: &str,
        test: WebhookTest,
    ) -> Result<WebhookAckResponse, ClientError> {
        let body = serde_json::to_value(Data::new(test))?;
        self.call_typed(
            "send_webhook_test",
            &[("clientId", client_id)],
            &[],
            Some(body),
        )
        .await
    }
}
