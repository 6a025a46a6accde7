//! Request execution.
//!
//! The executor sends a [`RequestDescriptor`](crate::RequestDescriptor)
//! through an injected [`HttpTransport`] and classifies every outcome:
//! transport failure, protocol mismatch, or a raw HTTP response handed
//! back untouched.

mod executor;
mod transport;

pub use executor::RequestExecutor;
pub use transport::{HttpTransport, ReqwestTransport, TransportReply};
