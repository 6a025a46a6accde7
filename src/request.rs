//! Request builder.
//!
//! Produces immutable [`RequestDescriptor`] values ready for a transport:
//! fixed JSON headers, the crate-default timeout, and an optional
//! JSON-encoded body. Builders are pure and deterministic; encoding
//! failures surface as [`NetworkError::Json`](crate::NetworkError::Json)
//! rather than being swallowed.

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;
use std::time::Duration;

use crate::defaults;
use crate::error::Result;

/// Fully-specified, immutable representation of an outbound HTTP request
/// before it is sent.
///
/// A descriptor is created fresh per call and never mutated after
/// construction; it is owned solely by the caller until handed to the
/// executor.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub url: Url,
    pub method: Method,
    pub headers: HeaderMap,
    pub timeout: Duration,
    pub body: Option<Bytes>,
}

impl RequestDescriptor {
    /// Build a GET descriptor: no body, JSON headers, default timeout.
    pub fn get(url: Url) -> Self {
        Self {
            url,
            method: Method::GET,
            headers: json_headers(),
            timeout: defaults::http::REQUEST_TIMEOUT,
            body: None,
        }
    }

    /// Build a POST descriptor whose body is the JSON encoding of
    /// `payload`.
    pub fn post<T: Serialize + ?Sized>(url: Url, payload: &T) -> Result<Self> {
        Self::with_method(Method::POST, url, payload)
    }

    /// Build a body-carrying descriptor with an explicit method, for
    /// call sites that need PUT, PATCH, or similar instead of POST.
    pub fn with_method<T: Serialize + ?Sized>(
        method: Method,
        url: Url,
        payload: &T,
    ) -> Result<Self> {
        let body = serde_json::to_vec(payload)?;
        Ok(Self {
            url,
            method,
            headers: json_headers(),
            timeout: defaults::http::REQUEST_TIMEOUT,
            body: Some(Bytes::from(body)),
        })
    }
}

fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::with_capacity(2);
    headers.insert(ACCEPT, HeaderValue::from_static(defaults::http::ACCEPT_JSON));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(defaults::http::CONTENT_TYPE_JSON),
    );
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn url() -> Url {
        Url::parse("https://api.example.com/v1/employees").unwrap()
    }

    #[derive(Serialize)]
    struct NewEmployee {
        name: String,
        department: String,
    }

    #[test]
    fn get_sets_method_headers_and_timeout() {
        let descriptor = RequestDescriptor::get(url());
        assert_eq!(descriptor.method, Method::GET);
        assert_eq!(descriptor.timeout, Duration::from_secs(60));
        assert_eq!(
            descriptor.headers.get(ACCEPT).unwrap(),
            "application/json"
        );
        assert_eq!(
            descriptor.headers.get(CONTENT_TYPE).unwrap(),
            "application/json; charset=utf-8"
        );
        assert_eq!(descriptor.headers.len(), 2);
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn get_is_deterministic() {
        assert_eq!(RequestDescriptor::get(url()), RequestDescriptor::get(url()));
    }

    #[test]
    fn post_body_is_canonical_json() {
        let payload = NewEmployee {
            name: "Ana".into(),
            department: "QA".into(),
        };
        let descriptor = RequestDescriptor::post(url(), &payload).unwrap();
        assert_eq!(descriptor.method, Method::POST);
        assert_eq!(
            descriptor.body.as_deref().unwrap(),
            serde_json::to_vec(&payload).unwrap().as_slice()
        );
        assert_eq!(descriptor.headers, RequestDescriptor::get(url()).headers);
    }

    #[test]
    fn with_method_overrides_post() {
        let descriptor =
            RequestDescriptor::with_method(Method::PUT, url(), &serde_json::json!({"id": 7}))
                .unwrap();
        assert_eq!(descriptor.method, Method::PUT);
        assert!(descriptor.body.is_some());
    }

    #[test]
    fn unencodable_payload_is_an_error_not_an_empty_body() {
        // JSON object keys must be strings; a unit key cannot encode.
        let payload: HashMap<(), i32> = HashMap::from([((), 1)]);
        let result = RequestDescriptor::post(url(), &payload);
        assert!(matches!(result, Err(crate::NetworkError::Json(_))));
    }
}
