//! OPay cashier API client
//!
//! Every operation builds a JSON body from its request, attaches the client's
//! fixed headers, sends one POST and returns the decoded body unchanged. Vendor
//! failures come back as ordinary data; see [`crate::payments::response`].

mod account;
mod collections;
pub mod endpoints;
mod inquiry;
mod transfers;

pub use endpoints::Endpoint;

use crate::config::OpayConfig;
use crate::error::OpayResult;
use crate::payments::reference::TimestampReferenceGenerator;
use crate::payments::traits::{HttpTransport, ReferenceGenerator};
use crate::payments::transport::ReqwestTransport;
use crate::payments::types::{Credentials, RequestHeaders};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// OPay API client
///
/// Cheap to clone; clones share the transport and reference generator.
#[derive(Clone)]
pub struct OpayClient {
    credentials: Credentials,
    headers: RequestHeaders,
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    references: Arc<dyn ReferenceGenerator>,
}

impl OpayClient {
    /// Create a client that talks to OPay over reqwest
    pub fn new(config: OpayConfig) -> OpayResult<Self> {
        config.validate()?;

        let transport = ReqwestTransport::new(Duration::from_secs(config.timeout_secs))?;
        let credentials = Credentials::new(config.public_key, config.merchant_id);

        info!(
            "OPay client initialized: merchant_id={}, base_url={}",
            credentials.merchant_id(),
            config.base_url
        );

        Ok(Self::with_transport(
            credentials,
            config.base_url,
            Arc::new(transport),
        ))
    }

    /// Create client from `OPAY_*` environment variables
    pub fn from_env() -> OpayResult<Self> {
        let config = OpayConfig::from_env()?;
        Self::new(config)
    }

    /// Create a client over a caller-supplied transport
    pub fn with_transport(
        credentials: Credentials,
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        let headers = RequestHeaders::from_credentials(&credentials);
        Self {
            credentials,
            headers,
            base_url: base_url.into(),
            transport,
            references: Arc::new(TimestampReferenceGenerator),
        }
    }

    /// Replace the reference generator used by mutating operations
    pub fn with_reference_generator(mut self, references: Arc<dyn ReferenceGenerator>) -> Self {
        self.references = references;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn headers(&self) -> &RequestHeaders {
        &self.headers
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn next_reference(&self) -> String {
        self.references.generate()
    }

    async fn dispatch<P>(&self, endpoint: Endpoint, payload: &P) -> OpayResult<Value>
    where
        P: Serialize,
    {
        let body = serde_json::to_value(payload)?;
        self.send(endpoint, Some(&body)).await
    }

    async fn send(&self, endpoint: Endpoint, body: Option<&Value>) -> OpayResult<Value> {
        let url = endpoint.url(&self.base_url);
        debug!("Dispatching OPay request: endpoint={}", endpoint);
        self.transport.post(&url, &self.headers, body).await
    }
}

impl fmt::Debug for OpayClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpayClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = OpayConfig::new("", "256612345678901");
        assert!(OpayClient::new(config).is_err());
    }

    #[test]
    fn test_new_builds_fixed_headers() {
        let client = OpayClient::new(OpayConfig::new("OPAYPUB_test", "256612345678901")).unwrap();
        assert_eq!(client.headers().authorization(), "Bearer OPAYPUB_test");
        assert_eq!(client.headers().merchant_id(), "256612345678901");
        assert_eq!(client.base_url(), crate::config::DEFAULT_BASE_URL);
        assert!(!format!("{:?}", client).contains("OPAYPUB_test"));
    }
}
