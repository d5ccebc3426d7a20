use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::operations::{DEFAULT_SERVER_URL, OPERATIONS, OperationDefinition};
use crate::{ApiClient, BlockingApiClient, ClientError};

/// Async Tochka API client backed by the operation registry.
///
/// Endpoints are addressed by `operation_id` rather than hard-coded URL
/// paths; the typed per-area methods in [`crate::api`] build on
/// [`Self::call_operation`].
#[derive(Clone, Debug)]
pub struct TochkaClient {
    inner: ApiClient,
}

impl TochkaClient {
    /// Creates a client with an explicit base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Ok(Self {
            inner: ApiClient::new(base_url)?,
        })
    }

    /// Creates a client pointed at the bank's production server URL.
    pub fn from_default_server() -> Result<Self, ClientError> {
        Self::new(default_server_url())
    }

    /// Returns a new client sending `Authorization: Bearer <token>` on every
    /// request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.with_bearer_token(token);
        self
    }

    /// Returns all operations declared in the registry.
    pub fn operations() -> &'static [OperationDefinition] {
        OPERATIONS
    }

    /// Sends a request using a raw path and method.
    ///
    /// This bypasses operation-id lookup but keeps client configuration.
    pub async fn request_json_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        self.inner
            .request_json_with_query(method, path, query, body)
            .await
    }

    /// Calls an endpoint by `operation_id`.
    ///
    /// `path_params` replaces `{param}` segments in the operation path
    /// template. Missing required parameters return
    /// [`ClientError::MissingPathParameter`].
    pub async fn call_operation(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let operation = find_operation(operation_id)?;
        let rendered_path = render_path(operation, path_params)?;
        let method = parse_method(operation)?;
        self.inner
            .request_json_with_query(method, &rendered_path, query, body)
            .await
    }

    /// Calls an operation and deserializes the response into `T`.
    ///
    /// Used by the typed per-area methods; the declared model types match the
    /// bank's wire shapes.
    pub(crate) async fn call_typed<T: DeserializeOwned>(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let value = self
            .call_operation(operation_id, path_params, query, body)
            .await?;
        Ok(serde_json::from_value(value)?)
    }
}

/// Blocking Tochka API client backed by the operation registry.
///
/// This is the synchronous counterpart of [`TochkaClient`].
#[derive(Debug)]
pub struct BlockingTochkaClient {
    inner: BlockingApiClient,
}

impl BlockingTochkaClient {
    /// Creates a client with an explicit base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Ok(Self {
            inner: BlockingApiClient::new(base_url)?,
        })
    }

    /// Creates a client pointed at the bank's production server URL.
    pub fn from_default_server() -> Result<Self, ClientError> {
        Self::new(default_server_url())
    }

    /// Returns a new client sending `Authorization: Bearer <token>` on every
    /// request.
    #[must_use]
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.inner = self.inner.with_bearer_token(token);
        self
    }

    /// Returns all operations declared in the registry.
    pub fn operations() -> &'static [OperationDefinition] {
        OPERATIONS
    }

    /// Sends a request using a raw path and method.
    ///
    /// This bypasses operation-id lookup but keeps client configuration.
    pub fn request_json_with_query(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        self.inner
            .request_json_with_query(method, path, query, body)
    }

    /// Calls an endpoint by `operation_id`.
    ///
    /// `path_params` replaces `{param}` segments in the operation path
    /// template. Missing required parameters return
    /// [`ClientError::MissingPathParameter`].
    pub fn call_operation(
        &self,
        operation_id: &str,
        path_params: &[(&str, &str)],
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, ClientError> {
        let operation = find_operation(operation_id)?;
        let rendered_path = render_path(operation, path_params)?;
        let method = parse_method(operation)?;
        self.inner
            .request_json_with_query(method, &rendered_path, query, body)
    }
}

/// Returns the default server URL declared by the vendor document.
pub fn default_server_url() -> &'static str {
    DEFAULT_SERVER_URL
}

fn find_operation(operation_id: &str) -> Result<&'static OperationDefinition, ClientError> {
    OPERATIONS
        .iter()
        .find(|op| op.operation_id == operation_id)
        .ok_or_else(|| ClientError::UnknownOperation(operation_id.to_owned()))
}

fn parse_method(operation: &OperationDefinition) -> Result<Method, ClientError> {
    Method::from_bytes(operation.method.as_bytes())
        .map_err(|_| ClientError::UnknownOperation(operation.operation_id.to_owned()))
}

fn render_path(
    operation: &OperationDefinition,
    path_params: &[(&str, &str)],
) -> Result<String, ClientError> {
    let mut rendered = operation.path_template.to_owned();

    for required_param in operation.path_params {
        let value = path_params
            .iter()
            .find(|(name, _)| name == required_param)
            .map(|(_, value)| *value)
            .ok_or_else(|| ClientError::MissingPathParameter {
                operation_id: operation.operation_id.to_owned(),
                parameter: (*required_param).to_owned(),
            })?;

        let placeholder = format!("{{{required_param}}}");
        rendered = rendered.replace(&placeholder, &encode_path_segment(value));
    }

    Ok(rendered)
}

// RFC 3986 path segment set, extended with `%` and `/` so parameter values
// cannot escape or split the segment they are substituted into. Account ids
// carry a `/` between number and BIC.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/')
    .add(b'\\')
    .add(b'^')
    .add(b'|');

fn encode_path_segment(value: &str) -> String {
    utf8_percent_encode(value, PATH_SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::{TochkaClient, find_operation, render_path};
    use crate::ClientError;

    #[test]
    fn operation_registry_is_non_empty() {
        assert!(!TochkaClient::operations().is_empty());
    }

    #[test]
    fn render_path_replaces_required_path_params() {
        let op = find_operation("get_account_info").expect("operation exists");
        let path = render_path(op, &[("accountId", "40817810802000000008/044525104")])
            .expect("path renders");
        assert_eq!(
            path,
            "/open-banking/v1.0/accounts/40817810802000000008%2F044525104"
        );
    }

    #[test]
    fn render_path_percent_encodes_spaces() {
        let op = find_operation("get_customer_info").expect("operation exists");
        let path = render_path(op, &[("customerCode", "300 000")]).expect("path renders");
        assert_eq!(path, "/open-banking/v1.0/customers/300%20000");
    }

    #[test]
    fn render_path_handles_multiple_params() {
        let op = find_operation("register_qr_code").expect("operation exists");
        let path = render_path(op, &[("merchantId", "MA0000000001"), ("accountId", "acc-1")])
            .expect("path renders");
        assert_eq!(path, "/sbp/v1.0/qr-code/merchant/MA0000000001/acc-1");
    }

    #[test]
    fn render_path_reports_missing_parameter() {
        let op = find_operation("get_qr_code_info").expect("operation exists");
        let error = render_path(op, &[]).expect_err("missing parameter should error");
        match error {
            ClientError::MissingPathParameter {
                operation_id,
                parameter,
            } => {
                assert_eq!(operation_id, "get_qr_code_info");
                assert_eq!(parameter, "qrcId");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_operation_is_reported() {
        let error = find_operation("get_vault_codes").expect_err("should not exist");
        match error {
            ClientError::UnknownOperation(id) => assert_eq!(id, "get_vault_codes"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
