//! Request executor.

use std::sync::Arc;

use crate::error::{NetworkError, Result};
use crate::execution::transport::{HttpTransport, ReqwestTransport, TransportReply};
use crate::request::RequestDescriptor;
use crate::response::RawResponse;

/// Executes request descriptors against an injected transport.
///
/// One call is one logical operation: the caller suspends at the
/// transport await and resumes exactly once with a terminal outcome.
/// The executor recovers nothing locally: no retries, no redirects
/// beyond what the transport does natively, and no status-code cutoff
/// (see [`RawResponse::require_success`] for the caller-side cutoff).
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn HttpTransport>,
}

impl RequestExecutor {
    /// Create an executor over an explicit transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Convenience constructor for the common case: a
    /// [`ReqwestTransport`] over the given client.
    pub fn over_reqwest(client: reqwest::Client) -> Self {
        Self::new(Arc::new(ReqwestTransport::new(client)))
    }

    /// Send `request` and classify the outcome.
    ///
    /// Failure before any response arrived maps to
    /// [`NetworkError::Transport`]; a reply without an HTTP envelope
    /// maps to [`NetworkError::NonHttpResponse`]; any recognized HTTP
    /// response is returned untouched, whatever its status code.
    pub async fn execute(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "sending request");

        // 1. One suspension point: hand the descriptor to the transport.
        let reply = match self.transport.roundtrip(request).await {
            Ok(reply) => reply,
            Err(cause) => {
                tracing::warn!(url = %request.url, error = %cause, "transport failure");
                return Err(NetworkError::Transport(cause));
            }
        };

        // 2. Classify the reply.
        match reply {
            TransportReply::Http(response) => {
                tracing::debug!(status = response.status, "response received");
                Ok(response)
            }
            TransportReply::NonHttp => {
                tracing::warn!(url = %request.url, "reply carries no HTTP envelope");
                Err(NetworkError::NonHttpResponse)
            }
        }
    }
}
