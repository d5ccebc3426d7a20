use crate::models::Data;
use crate::models::payments::{PaymentCreatedResponse, PaymentOrder, PaymentStatusResponse};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Places a payment draft in the customer's online bank for signing.
    pub async fn create_payment_for_sign(
        &self,
        order: PaymentOrder,
    ) -> Result<PaymentCreatedResponse, ClientError> {
        let body = serde_json::to_value(Data::new(order))?;
        self.call_typed("create_payment_for_sign", &[], &[], Some(body))
            .await
    }

    /// Creates and executes a payment order directly.
    ///
    /// Requires a consent with the `CreatePaymentOrder` permission.
    pub async fn create_payment_order(
        &self,
        order: PaymentOrder,
    ) -> Result<PaymentCreatedResponse, ClientError> {
        let body = serde_json::to_value(Data::new(order))?;
        self.call_typed("create_payment_order", &[], &[], Some(body))
            .await
    }

    /// Fetches the processing status of a previously created payment.
    pub async fn get_payment_status(
        &self,
        request_id: &str,
    ) -> Result<PaymentStatusResponse, ClientError> {
        self.call_typed("get_payment_status", &[("requestId", request_id)], &[], None)
            .await
    }
}
