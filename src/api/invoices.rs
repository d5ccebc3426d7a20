use crate::models::Data;
use crate::models::invoices::{
    InvoiceCreatedResponse, InvoicePaymentStatusResponse, SendInvoice,
};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Issues an invoice (bill) to a counterparty.
    pub async fn send_invoice(
        &self,
        invoice: SendInvoice,
    ) -> Result<InvoiceCreatedResponse, ClientError> {
        let body = serde_json::to_value(Data::new(invoice))?;
        self.call_typed("send_invoice", &[], &[], Some(body)).await
    }

    /// Fetches the payment status of an issued invoice.
    pub async fn get_invoice_payment_status(
        &self,
        customer_code: &str,
        document_id: &str,
    ) -> Result<InvoicePaymentStatusResponse, ClientError> {
        self.call_typed(
            "get_invoice_payment_status",
            &[("customerCode", customer_code), ("documentId", document_id)],
            &[],
            None,
        )
        .await
    }

    /// Deletes an issued invoice.
    pub async fn delete_invoice(
        &self,
        customer_code: &str,
        document_id: &str,
    ) -> Result<(), ClientError> {
        self.call_operation(
            "delete_invoice",
            &[("customerCode", customer_code), ("documentId", document_id)],
            &[],
            None,
        )
        .await?;
        Ok(())
    }
}
