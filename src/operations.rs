//! Static registry of Tochka Open Banking operations.
//!
//! One entry per operation of the published vendor OpenAPI document,
//! mirroring its paths dictionary. The table is hand-maintained against the
//! document revision named in [`API_VERSION`]; the vendor owns the protocol,
//! this crate only declares its surface.

/// Metadata for one API operation.
#[derive(Clone, Copy, Debug)]
pub struct OperationDefinition {
    /// Stable operation identifier from the vendor document.
    pub operation_id: &'static str,
    /// Uppercase HTTP method (for example `GET`, `POST`).
    pub method: &'static str,
    /// Path template, potentially containing `{param}` placeholders.
    pub path_template: &'static str,
    /// Required path parameter names extracted from `path_template`.
    pub path_params: &'static [&'static str],
}

/// Default base URL (`servers[0].url` of the vendor document).
pub const DEFAULT_SERVER_URL: &str = "https://enter.tochka.com/uapi";

/// API document revision this registry was transcribed from.
pub const API_VERSION: &str = "v1.0";

/// All operations declared by the vendor document.
pub const OPERATIONS: &[OperationDefinition] = &[
    // Accounts
    OperationDefinition {
        operation_id: "get_accounts_list",
        method: "GET",
        path_template: "/open-banking/v1.0/accounts",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_account_info",
        method: "GET",
        path_template: "/open-banking/v1.0/accounts/{accountId}",
        path_params: &["accountId"],
    },
    // Balances
    OperationDefinition {
        operation_id: "get_balances_list",
        method: "GET",
        path_template: "/open-banking/v1.0/balances",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_balance_info",
        method: "GET",
        path_template: "/open-banking/v1.0/accounts/{accountId}/balances",
        path_params: &["accountId"],
    },
    // Statements
    OperationDefinition {
        operation_id: "get_statements_list",
        method: "GET",
        path_template: "/open-banking/v1.0/accounts/{accountId}/statements",
        path_params: &["accountId"],
    },
    OperationDefinition {
        operation_id: "get_statement_info",
        method: "GET",
        path_template: "/open-banking/v1.0/accounts/{accountId}/statements/{statementId}",
        path_params: &["accountId", "statementId"],
    },
    OperationDefinition {
        operation_id: "init_statement",
        method: "POST",
        path_template: "/open-banking/v1.0/statements",
        path_params: &[],
    },
    // Customers
    OperationDefinition {
        operation_id: "get_customers_list",
        method: "GET",
        path_template: "/open-banking/v1.0/customers",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_customer_info",
        method: "GET",
        path_template: "/open-banking/v1.0/customers/{customerCode}",
        path_params: &["customerCode"],
    },
    // Payments
    OperationDefinition {
        operation_id: "create_payment_for_sign",
        method: "POST",
        path_template: "/payment/v1.0/for-sign",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "create_payment_order",
        method: "POST",
        path_template: "/payment/v1.0/order",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_payment_status",
        method: "GET",
        path_template: "/payment/v1.0/status/{requestId}",
        path_params: &["requestId"],
    },
    // SBP: merchants and legal entities
    OperationDefinition {
        operation_id: "get_sbp_legal_entity",
        method: "GET",
        path_template: "/sbp/v1.0/account/{accountId}",
        path_params: &["accountId"],
    },
    OperationDefinition {
        operation_id: "register_sbp_legal_entity",
        method: "POST",
        path_template: "/sbp/v1.0/register-sbp-legal-entity",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_sbp_merchants_list",
        method: "GET",
        path_template: "/sbp/v1.0/merchant/legal-entity/{legalId}",
        path_params: &["legalId"],
    },
    OperationDefinition {
        operation_id: "register_sbp_merchant",
        method: "POST",
        path_template: "/sbp/v1.0/merchant/legal-entity/{legalId}",
        path_params: &["legalId"],
    },
    // SBP: QR codes
    OperationDefinition {
        operation_id: "register_qr_code",
        method: "POST",
        path_template: "/sbp/v1.0/qr-code/merchant/{merchantId}/{accountId}",
        path_params: &["merchantId", "accountId"],
    },
    OperationDefinition {
        operation_id: "get_qr_codes_list",
        method: "GET",
        path_template: "/sbp/v1.0/qr-code/legal-entity/{legalId}",
        path_params: &["legalId"],
    },
    OperationDefinition {
        operation_id: "get_qr_code_info",
        method: "GET",
        path_template: "/sbp/v1.0/qr-code/{qrcId}",
        path_params: &["qrcId"],
    },
    OperationDefinition {
        operation_id: "get_qr_code_payment_status",
        method: "GET",
        path_template: "/sbp/v1.0/qr-codes/{qrcId}/payment-status",
        path_params: &["qrcId"],
    },
    // SBP: payments and refunds
    OperationDefinition {
        operation_id: "get_sbp_payments",
        method: "GET",
        path_template: "/sbp/v1.0/get-sbp-payments",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "start_sbp_refund",
        method: "POST",
        path_template: "/sbp/v1.0/refund",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_sbp_refund_data",
        method: "GET",
        path_template: "/sbp/v1.0/refund/{requestId}",
        path_params: &["requestId"],
    },
    // Invoices
    OperationDefinition {
        operation_id: "send_invoice",
        method: "POST",
        path_template: "/invoice/v1.0/bills",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_invoice_payment_status",
        method: "GET",
        path_template: "/invoice/v1.0/bills/{customerCode}/{documentId}/payment-status",
        path_params: &["customerCode", "documentId"],
    },
    OperationDefinition {
        operation_id: "delete_invoice",
        method: "DELETE",
        path_template: "/invoice/v1.0/bills/{customerCode}/{documentId}",
        path_params: &["customerCode", "documentId"],
    },
    // Webhooks
    OperationDefinition {
        operation_id: "get_webhooks",
        method: "GET",
        path_template: "/webhook/v1.0/{clientId}",
        path_params: &["clientId"],
    },
    OperationDefinition {
        operation_id: "create_webhook",
        method: "PUT",
        path_template: "/webhook/v1.0/{clientId}",
        path_params: &["clientId"],
    },
    OperationDefinition {
        operation_id: "edit_webhook",
        method: "POST",
        path_template: "/webhook/v1.0/{clientId}",
        path_params: &["clientId"],
    },
    OperationDefinition {
        operation_id: "delete_webhook",
        method: "DELETE",
        path_template: "/webhook/v1.0/{clientId}",
        path_params: &["clientId"],
    },
    OperationDefinition {
        operation_id: "send_webhook_test",
        method: "POST",
        path_template: "/webhook/v1.0/{clientId}/test_send",
        path_params: &["clientId"],
    },
    // Consents
    OperationDefinition {
        operation_id: "create_consent",
        method: "POST",
        path_template: "/consent/v1.0/consents",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_consents_list",
        method: "GET",
        path_template: "/consent/v1.0/consents",
        path_params: &[],
    },
    OperationDefinition {
        operation_id: "get_consent_info",
        method: "GET",
        path_template: "/consent/v1.0/consents/{consentId}",
        path_params: &["consentId"],
    },
    OperationDefinition {
        operation_id: "delete_consent",
        method: "DELETE",
        path_template: "/consent/v1.0/consents/{consentId}",
        path_params: &["consentId"],
    },
];

#[cfg(test)]
mod tests {
    use super::{DEFAULT_SERVER_URL, OPERATIONS};
    use std::collections::HashSet;

    #[test]
    fn operation_ids_are_unique() {
        let mut seen = HashSet::new();
        for operation in OPERATIONS {
            assert!(
                seen.insert(operation.operation_id),
                "duplicate operation id {}",
                operation.operation_id
            );
        }
    }

    #[test]
    fn path_params_match_template_placeholders() {
        for operation in OPERATIONS {
            for param in operation.path_params {
                let placeholder = format!("{{{param}}}");
                assert!(
                    operation.path_template.contains(&placeholder),
                    "{}: parameter {param} not in template {}",
                    operation.operation_id,
                    operation.path_template
                );
            }
            let placeholders = operation.path_template.matches('{').count();
            assert_eq!(
                placeholders,
                operation.path_params.len(),
                "{}: template placeholders not covered by path_params",
                operation.operation_id
            );
        }
    }

    #[test]
    fn default_server_url_is_absolute() {
        assert!(DEFAULT_SERVER_URL.starts_with("https://"));
    }
}
