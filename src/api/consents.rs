use crate::models::Data;
use crate::models::consents::{ConsentListResponse, ConsentResponse, CreateConsent};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Creates a consent request; the customer authorizes it in the online
    /// bank before the granted permissions take effect.
    pub async fn create_consent(
        &self,
        request: CreateConsent,
    ) -> Result<ConsentResponse, ClientError> {
        let body = serde_json::to_value(Data::new(request))?;
        self.call_typed("create_consent", &[], &[], Some(body)).await
    }

    /// Lists consents granted to the authorized application.
    pub async fn get_consents(&self) -> Result<ConsentListResponse, ClientError> {
        self.call_typed("get_consents_list", &[], &[], None).await
    }

    /// Fetches one consent by identifier.
    pub async fn get_consent(&self, consent_id: &str) -> Result<ConsentResponse, ClientError> {
        self.call_typed("get_consent_info", &[("consentId", consent_id)], &[], None)
            .await
    }

    /// Revokes a consent.
    pub async fn delete_consent(&self, consent_id: &str) -> Result<(), ClientError> {
        self.call_operation("delete_consent", &[("consentId", consent_id)], &[], None)
            .await?;
        Ok(())
    }
}
