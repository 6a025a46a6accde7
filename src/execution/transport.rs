//! HTTP transport abstraction.
//!
//! The executor depends only on this narrow seam: give the transport a
//! descriptor, get back either a raw HTTP response or a lower-level
//! error. Any HTTP client can sit behind it; tests inject synthetic
//! transports without touching the network.

use async_trait::async_trait;

use crate::error::BoxError;
use crate::request::RequestDescriptor;
use crate::response::RawResponse;

/// Raw outcome of one round trip, before the executor classifies it.
#[derive(Debug)]
pub enum TransportReply {
    /// A recognized HTTP response (status line and headers present).
    Http(RawResponse),
    /// The transport resolved with something that carries no HTTP
    /// envelope. Real HTTP clients never produce this, but the executor
    /// defends against transports that can.
    NonHttp,
}

/// Collaborator that performs the actual network I/O for one request.
///
/// Implementations must honor the descriptor's method, URL, headers,
/// timeout, and body, and must not retry on their own.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn roundtrip(&self, request: &RequestDescriptor) -> Result<TransportReply, BoxError>;
}

/// Production transport over a shared [`reqwest::Client`].
///
/// The client is injected so connection pooling stays the caller's
/// concern; this layer keeps no state of its own.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn roundtrip(&self, request: &RequestDescriptor) -> Result<TransportReply, BoxError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone())
            .timeout(request.timeout);
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let bytes = response.bytes().await?;

        // reqwest only ever yields well-formed HTTP responses, so this
        // transport never constructs `TransportReply::NonHttp`.
        Ok(TransportReply::Http(RawResponse {
            bytes,
            status,
            headers,
        }))
    }
}
