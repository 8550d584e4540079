//! Payment client trait definitions
//!
//! Defines the seams the OPay client depends on: the HTTP transport that carries
//! each request and the generator that tags mutating requests with a reference.

use crate::error::OpayResult;
use crate::payments::types::RequestHeaders;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for HTTP transports used by the OPay client
///
/// One call is one POST round trip. Implementations decode the response body as
/// JSON and return it unchanged, whatever the HTTP status. Connectivity
/// failures, timeouts and non-JSON bodies are reported as
/// [`OpayError::Transport`](crate::error::OpayError::Transport) and are not
/// retried.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issue a POST request
    ///
    /// # Arguments
    /// * `url` - Absolute endpoint URL
    /// * `headers` - The client's fixed header set
    /// * `body` - JSON body, or `None` for operations that send no body
    ///
    /// # Returns
    /// * `Value` - The decoded response body
    async fn post(&self, url: &str, headers: &RequestHeaders, body: Option<&Value>)
        -> OpayResult<Value>;
}

/// Source of transaction references for mutating operations
///
/// Each call must return a fresh value. Generation never fails.
pub trait ReferenceGenerator: Send + Sync {
    fn generate(&self) -> String;
}
