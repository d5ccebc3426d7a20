use serde::{Deserialize, Serialize};

/// `Data` envelope wrapping every request and response payload.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Data<T> {
    #[serde(rename = "Data")]
    pub data: T,

    #[serde(rename = "Links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,

    #[serde(rename = "Meta", default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
}

impl<T> Data<T> {
    /// Wraps a request payload in the envelope, without pagination metadata.
    pub fn new(data: T) -> Self {
        Self {
            data,
            links: None,
            meta: None,
        }
    }
}

/// Pagination links attached to list responses.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Links {
    #[serde(rename = "Self")]
    pub self_link: String,

    #[serde(rename = "First", default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,

    #[serde(rename = "Prev", default, skip_serializing_if = "Option::is_none")]
    pub prev: Option<String>,

    #[serde(rename = "Next", default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,

    #[serde(rename = "Last", default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

/// Pagination metadata attached to list responses.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Meta {
    #[serde(rename = "TotalPages")]
    pub total_pages: u32,
}

/// Top-level error envelope returned for non-2xx responses.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub id: String,
    pub message: String,

    #[serde(rename = "Errors", default)]
    pub errors: Vec<ErrorDetail>,
}

/// One entry of the `Errors` detail list.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "errorCode")]
    pub error_code: String,

    pub message: String,

    /// Pointer to the offending request field, when the bank reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::Data;
    use serde_json::json;

    #[test]
    fn envelope_round_trips_pagination_metadata() {
        let raw = json!({
            "Data": {"Account": []},
            "Links": {"Self": "https://enter.tochka.com/uapi/open-banking/v1.0/accounts"},
            "Meta": {"TotalPages": 3}
        });
        let parsed: Data<serde_json::Value> = serde_json::from_value(raw).expect("parses");
        assert_eq!(parsed.meta.expect("meta").total_pages, 3);
        assert!(parsed.links.expect("links").next.is_none());
    }

    #[test]
    fn request_envelope_omits_absent_metadata() {
        let encoded = serde_json::to_value(Data::new(json!({"accountId": "a-1"}))).expect("encodes");
        assert_eq!(encoded, json!({"Data": {"accountId": "a-1"}}));
    }
}
