//! Crate-wide default values.

/// HTTP defaults applied by the request builder.
pub mod http {
    use std::time::Duration;

    /// Per-request timeout applied to every descriptor.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Value of the `Accept` header on every descriptor.
    pub const ACCEPT_JSON: &str = "application/json";

    /// Value of the `Content-Type` header on every descriptor.
    pub const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";
}
