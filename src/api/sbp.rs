use crate::models::Data;
use crate::models::sbp::{
    LegalEntityResponse, MerchantListResponse, MerchantRegisteredResponse, QrCodeListResponse,
    QrCodeResponse, QrPaymentStatusResponse, RefundRequest, RefundStatusResponse, RegisterMerchant,
    RegisterQrCode, SbpPaymentListResponse,
};
use crate::{ClientError, TochkaClient};

impl TochkaClient {
    /// Fetches the SBP legal entity bound to an account.
    pub async fn get_sbp_legal_entity(
        &self,
        account_id: &str,
    ) -> Result<LegalEntityResponse, ClientError> {
        self.call_typed(
            "get_sbp_legal_entity",
            &[("accountId", account_id)],
            &[],
            None,
        )
        .await
    }

    /// Registers the customer as an SBP legal entity.
    pub async fn register_sbp_legal_entity(&self) -> Result<LegalEntityResponse, ClientError> {
        self.call_typed("register_sbp_legal_entity", &[], &[], None)
            .await
    }

    /// Lists merchants registered under a legal entity.
    pub async fn get_sbp_merchants(
        &self,
        legal_id: &str,
    ) -> Result<MerchantListResponse, ClientError> {
        self.call_typed("get_sbp_merchants_list", &[("legalId", legal_id)], &[], None)
            .await
    }

    /// Registers a new merchant (retail point) under a legal entity.
    pub async fn register_sbp_merchant(
        &self,
        legal_id: &str,
        merchant: RegisterMerchant,
    ) -> Result<MerchantRegisteredResponse, ClientError> {
        let body = serde_json::to_value(Data::new(merchant))?;
        self.call_typed(
            "register_sbp_merchant",
            &[("legalId", legal_id)],
            &[],
            Some(body),
        )
        .await
    }

    /// Registers a QR code for a merchant and crediting account.
    pub async fn register_qr_code(
        &self,
        merchant_id: &str,
        account_id: &str,
        request: RegisterQrCode,
    ) -> Result<QrCodeResponse, ClientError> {
        let body = serde_json::to_value(Data::new(request))?;
        self.call_typed(
            "register_qr_code",
            &[("merchantId", merchant_id), ("accountId", account_id)],
            &[],
            Some(body),
        )
        .await
    }

    /// Lists QR codes registered under a legal entity.
    pub async fn get_qr_codes(&self, legal_id: &str) -> Result<QrCodeListResponse, ClientError> {
        self.call_typed("get_qr_codes_list", &[("legalId", legal_id)], &[], None)
            .await
    }

    /// Fetches one QR code by NSPK identifier.
    pub async fn get_qr_code(&self, qrc_id: &str) -> Result<QrCodeResponse, ClientError> {
        self.call_typed("get_qr_code_info", &[("qrcId", qrc_id)], &[], None)
            .await
    }

    /// Fetches the status of the latest payment attempt against a QR code.
    pub async fn get_qr_code_payment_status(
        &self,
        qrc_id: &str,
    ) -> Result<QrPaymentStatusResponse, ClientError> {
        self.call_typed(
            "get_qr_code_payment_status",
            &[("qrcId", qrc_id)],
            &[],
            None,
        )
        .await
    }

    /// Lists incoming SBP payments, optionally bounded by `YYYY-MM-DD` dates.
    pub async fn get_sbp_payments(
        &self,
        from_date: Option<&str>,
        to_date: Option<&str>,
    ) -> Result<SbpPaymentListResponse, ClientError> {
        let mut query = Vec::new();
        if let Some(from) = from_date {
            query.push(("fromDate", from));
        }
        if let Some(to) = to_date {
            query.push(("toDate", to));
        }
        self.call_typed("get_sbp_payments", &[], &query, None).await
    }

    /// Starts a refund of an incoming SBP payment.
    pub async fn start_sbp_refund(
        &self,
        request: RefundRequest,
    ) -> Result<RefundStatusResponse, ClientError> {
        let body = serde_json::to_value(Data::new(request))?;
        self.call_typed("start_sbp_refund", &[], &[], Some(body))
            .await
    }

    /// Fetches the status of a previously started refund.
    pub async fn get_sbp_refund(
        &self,
        request_id: &str,
    ) -> Result<RefundStatusResponse, ClientError> {
        self.call_typed("get_sbp_refund_data", &[("requestId", request_id)], &[], None)
            .await
    }
}
