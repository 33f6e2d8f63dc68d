//! HTTP response type and response classification.
//!
//! [`HttpResponse`] is what a [`Transport`](crate::clients::Transport) hands
//! back: a status code, headers and the raw body text. [`HttpResponse::classify`]
//! turns it into the caller-facing outcome.
//!
//! # Classification
//!
//! The API reports failures in more than one way. A non-2xx status code is the
//! obvious one, but a `200 OK` can also carry `{"status": "nok", "reason": ...}`.
//! Classification therefore always looks inside a JSON envelope, even when the
//! status code says the request succeeded:
//!
//! | content type | status | body | outcome |
//! |---|---|---|---|
//! | not JSON | >= 300 | any | [`ApiError::HttpStatus`] |
//! | not JSON | < 300 | any | [`ApiError::UnsupportedContentType`] |
//! | JSON | any | unparseable | [`ApiError::Decode`] |
//! | JSON | >= 300 | non-empty `reason` | [`ApiError::Api`] |
//! | JSON | >= 300 | no `reason`, or empty | [`ApiError::HttpStatus`] |
//! | JSON | < 300 | `status` is `"nok"` | [`ApiError::Api`] |
//! | JSON | < 300 | otherwise | `Ok(payload)` |

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::ApiError;

/// The JSON content type, without parameters.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A raw HTTP response as returned by a transport.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response. Header names are lowercased.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let headers = headers
            .into_iter()
            .fold(HashMap::new(), |mut acc: HashMap<String, Vec<String>>, (k, v)| {
                acc.entry(k.to_lowercase()).or_default().extend(v);
                acc
            });

        Self {
            code,
            headers,
            body: body.into(),
        }
    }

    /// Adds a header value, returning the updated response.
    #[must_use]
    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into());
        self
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the content type without parameters such as `charset`.
    ///
    /// A missing header is returned as an empty string.
    #[must_use]
    pub fn content_type(&self) -> &str {
        let raw = self.header("content-type").unwrap_or_default();
        raw.split(';').next().unwrap_or_default().trim()
    }

    /// Returns `true` if the status code is below 300.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code < 300
    }

    /// Classifies the response into a decoded payload or an [`ApiError`].
    ///
    /// # Errors
    ///
    /// See the module documentation for the full decision table.
    pub fn classify(self) -> Result<Value, ApiError> {
        let content_type = self.content_type();

        if content_type != JSON_CONTENT_TYPE {
            if !self.is_ok() {
                return Err(ApiError::HttpStatus { code: self.code });
            }
            return Err(ApiError::UnsupportedContentType {
                content_type: content_type.to_string(),
            });
        }

        let payload: Value = serde_json::from_str(&self.body).map_err(|e| {
            tracing::warn!(
                "Response with status {} claimed JSON but failed to parse: {}",
                self.code,
                e
            );
            ApiError::Decode {
                message: e.to_string(),
            }
        })?;

        if !self.is_ok() {
            return match envelope_reason(&payload) {
                Some(reason) => Err(ApiError::Api {
                    code: self.code,
                    reason,
                }),
                None => Err(ApiError::HttpStatus { code: self.code }),
            };
        }

        if payload.get("status").and_then(Value::as_str) == Some("nok") {
            return Err(ApiError::Api {
                code: self.code,
                reason: envelope_reason(&payload).unwrap_or_default(),
            });
        }

        Ok(payload)
    }
}

/// Extracts the non-empty `reason` from an error envelope.
fn envelope_reason(payload: &Value) -> Option<String> {
    payload
        .get("reason")
        .and_then(Value::as_str)
        .filter(|reason| !reason.is_empty())
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::errors::ErrorKind;
    use serde_json::json;

    fn json_response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body)
            .with_header("Content-Type", "application/json; charset=utf-8")
    }

    #[test]
    fn test_content_type_strips_parameters() {
        let response = json_response(200, "{}");
        assert_eq!(response.content_type(), "application/json");
    }

    #[test]
    fn test_missing_content_type_is_empty() {
        let response = HttpResponse::new(200, HashMap::new(), "");
        assert_eq!(response.content_type(), "");
    }

    #[test]
    fn test_header_names_are_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("X-Custom".to_string(), vec!["a".to_string()]);
        let response = HttpResponse::new(200, headers, "");

        assert_eq!(response.header("x-custom"), Some("a"));
        assert_eq!(response.header("X-CUSTOM"), Some("a"));
    }

    #[test]
    fn test_success_returns_payload() {
        let payload = json_response(200, r#"{"id": 2144, "title": "What a Long, Strange Trip It's Been"}"#)
            .classify()
            .unwrap();
        assert_eq!(payload["id"], 2144);
    }

    #[test]
    fn test_nok_envelope_in_200_is_api_error() {
        let error = json_response(200, r#"{"status":"nok","reason":"account not active"}"#)
            .classify()
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Api);
        assert_eq!(error.to_string(), "account not active");
        assert_eq!(error.status_code(), Some(200));
    }

    #[test]
    fn test_nok_without_reason_is_api_error_with_empty_message() {
        let error = json_response(200, r#"{"status":"nok"}"#)
            .classify()
            .unwrap_err();
        assert!(matches!(error, ApiError::Api { code: 200, ref reason } if reason.is_empty()));
    }

    #[test]
    fn test_other_status_values_are_success() {
        let payload = json_response(200, r#"{"status":"ok","realms":[]}"#)
            .classify()
            .unwrap();
        assert_eq!(payload["status"], "ok");
    }

    #[test]
    fn test_error_status_with_reason_is_api_error() {
        let error = json_response(404, r#"{"status":"nok","reason":"realm not found"}"#)
            .classify()
            .unwrap_err();

        assert!(matches!(
            error,
            ApiError::Api { code: 404, ref reason } if reason == "realm not found"
        ));
    }

    #[test]
    fn test_reason_alone_is_recognized_on_error_status() {
        let error = json_response(404, r#"{"reason":"realm not found"}"#)
            .classify()
            .unwrap_err();
        assert_eq!(error.message(), "realm not found");
        assert_eq!(error.status_code(), Some(404));
    }

    #[test]
    fn test_detail_without_reason_is_http_status() {
        let error = json_response(403, r#"{"code":403,"type":"Forbidden","detail":"Account Inactive"}"#)
            .classify()
            .unwrap_err();
        assert!(matches!(error, ApiError::HttpStatus { code: 403 }));
        assert_eq!(error.to_string(), "bad status code: 403");
    }

    #[test]
    fn test_empty_reason_on_error_status_is_http_status() {
        let error = json_response(404, r#"{"status":"nok","reason":""}"#)
            .classify()
            .unwrap_err();
        assert!(matches!(error, ApiError::HttpStatus { code: 404 }));
    }

    #[test]
    fn test_error_status_without_reason_is_http_status() {
        let error = json_response(500, r#"{"code":500}"#).classify().unwrap_err();
        assert!(matches!(error, ApiError::HttpStatus { code: 500 }));
        assert_eq!(error.to_string(), "bad status code: 500");
    }

    #[test]
    fn test_non_json_error_status_is_http_status() {
        let error = HttpResponse::new(502, HashMap::new(), "<html>Bad Gateway</html>")
            .with_header("content-type", "text/html")
            .classify()
            .unwrap_err();
        assert!(matches!(error, ApiError::HttpStatus { code: 502 }));
    }

    #[test]
    fn test_non_json_success_is_unsupported_content_type() {
        let error = HttpResponse::new(200, HashMap::new(), "<html></html>")
            .with_header("content-type", "text/html; charset=UTF-8")
            .classify()
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::UnsupportedContentType);
        assert!(error.to_string().contains("content type not supported"));
        assert_eq!(error.to_string(), "text/html: content type not supported");
    }

    #[test]
    fn test_malformed_json_is_decode_error() {
        let error = json_response(200, "{not json").classify().unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Decode);
        let expected = serde_json::from_str::<Value>("{not json").unwrap_err().to_string();
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_malformed_json_on_error_status_is_still_decode_error() {
        let error = json_response(500, "").classify().unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Decode);
    }

    #[test]
    fn test_non_object_payload_is_success() {
        let payload = json_response(200, "[1,2,3]").classify().unwrap();
        assert_eq!(payload, json!([1, 2, 3]));
    }
}
