//! jsonfetch
//!
//! Client-side JSON networking conveniences: build typed HTTP request
//! descriptors, execute them over an injectable transport, and classify
//! every failure into a closed [`NetworkError`] taxonomy. A small
//! [`imaging`] module covers proportional width-fit scaling of fetched
//! images for display.
#![deny(unsafe_code)]

pub mod defaults;
pub mod error;
pub mod execution;
pub mod imaging;
pub mod request;
pub mod response;

pub use error::{NetworkError, Result};
pub use execution::{HttpTransport, RequestExecutor, ReqwestTransport, TransportReply};
pub use request::RequestDescriptor;
pub use response::RawResponse;
