use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors returned by Tochka client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL is not a valid absolute URL.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),

    /// Endpoint path could not be joined to the base URL.
    #[error("invalid endpoint path '{0}'")]
    InvalidPath(String),

    /// The requested operation id is not present in the registry.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),

    /// A required path template parameter was not provided.
    #[error("missing required path parameter '{parameter}' for operation '{operation_id}'")]
    MissingPathParameter {
        operation_id: String,
        parameter: String,
    },

    /// HTTP transport-layer request failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status with a bank error envelope in the body.
    ///
    /// Tochka reports failures as `{"code", "id", "message", "Errors": [...]}`;
    /// when the body matches that shape it is surfaced here instead of
    /// [`ClientError::HttpStatus`].
    #[error("bank returned status {status}: {}", .error.message)]
    Api {
        status: reqwest::StatusCode,
        error: ErrorResponse,
    },

    /// Non-success HTTP status with an unrecognized response payload.
    #[error("server returned status {status}: {body}")]
    HttpStatus {
        status: reqwest::StatusCode,
        body: String,
    },
}

impl ClientError {
    /// Builds the error for a non-2xx response, preferring the bank envelope.
    pub(crate) fn from_response(status: reqwest::StatusCode, body: String) -> Self {
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => Self::Api { status, error },
            Err(_) => Self::HttpStatus { status, body },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ClientError;

    #[test]
    fn non_success_body_with_bank_envelope_becomes_api_error() {
        let body = r#"{
            "code": "400",
            "id": "c397b21a-d998-4c4d-9471-e60eaf816b87",
            "message": "Something went wrong",
            "Errors": [
                {"errorCode": "invalid_date", "message": "Bad date", "url": "\"dateFrom\""}
            ]
        }"#;
        let error = ClientError::from_response(reqwest::StatusCode::BAD_REQUEST, body.to_owned());
        match error {
            ClientError::Api { status, error } => {
                assert_eq!(status, reqwest::StatusCode::BAD_REQUEST);
                assert_eq!(error.code, "400");
                assert_eq!(error.errors.len(), 1);
                assert_eq!(error.errors[0].error_code, "invalid_date");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_success_body_without_envelope_keeps_raw_payload() {
        let error = ClientError::from_response(
            reqwest::StatusCode::BAD_GATEWAY,
            "upstream down".to_owned(),
        );
        match error {
            ClientError::HttpStatus { status, body } => {
                assert_eq!(status, reqwest::StatusCode::BAD_GATEWAY);
                assert_eq!(body, "upstream down");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
