//! Response value handed back by the executor.

use bytes::Bytes;
use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;

use crate::error::{NetworkError, Result};

/// Raw response bytes plus HTTP status metadata.
///
/// The executor returns this untouched for any recognized HTTP response,
/// whatever the status code. Whether a non-2xx status is a failure is
/// the caller's decision: [`require_success`](Self::require_success)
/// enforces the cutoff for callers that want one, while callers that
/// need error-response bodies can read them freely.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub bytes: Bytes,
    pub status: u16,
    pub headers: HeaderMap,
}

impl RawResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Opt-in status cutoff: fail with
    /// [`NetworkError::Status`] for any non-2xx response.
    pub fn require_success(&self) -> Result<&Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(NetworkError::Status(self.status))
        }
    }

    /// Decode the body as JSON into `T`.
    ///
    /// An empty body where content was expected maps to
    /// [`NetworkError::InvalidData`]; bytes that do not match the
    /// expected shape map to [`NetworkError::Json`].
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        if self.bytes.is_empty() {
            return Err(NetworkError::InvalidData);
        }
        Ok(serde_json::from_slice(&self.bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Employee {
        id: u32,
        name: String,
    }

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            bytes: Bytes::copy_from_slice(body.as_bytes()),
            status,
            headers: HeaderMap::new(),
        }
    }

    #[test]
    fn decode_parses_expected_shape() {
        let employee: Employee = response(200, r#"{"id": 3, "name": "Marta"}"#)
            .decode()
            .unwrap();
        assert_eq!(
            employee,
            Employee {
                id: 3,
                name: "Marta".into()
            }
        );
    }

    #[test]
    fn decode_rejects_empty_body_as_invalid_data() {
        let result = response(200, "").decode::<Employee>();
        assert!(matches!(result, Err(NetworkError::InvalidData)));
    }

    #[test]
    fn decode_rejects_mismatched_shape_as_json_error() {
        let result = response(200, r#"{"id": "not-a-number"}"#).decode::<Employee>();
        assert!(matches!(result, Err(NetworkError::Json(_))));
    }

    #[test]
    fn require_success_passes_2xx_and_rejects_the_rest() {
        assert!(response(204, "").require_success().is_ok());
        let err = response(404, "missing").require_success().unwrap_err();
        assert_eq!(err.to_string(), "HTTP status code: 404");
    }
}
