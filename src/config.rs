use serde::Deserialize;

use crate::error::{OpayError, OpayResult};

/// Production cashier API base URL.
pub const DEFAULT_BASE_URL: &str = "https://cashierapi.opayweb.com/api/v3";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// OPay client configuration
#[derive(Clone, Deserialize)]
pub struct OpayConfig {
    /// Merchant public key, sent as the bearer token
    pub public_key: String,
    /// Merchant identifier, sent in the `MerchantId` header
    pub merchant_id: String,
    /// API base URL (defaults to the production cashier API)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for OpayConfig {
    fn default() -> Self {
        Self {
            public_key: String::new(),
            merchant_id: String::new(),
            base_url: default_base_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl std::fmt::Debug for OpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpayConfig")
            .field("public_key", &"[REDACTED]")
            .field("merchant_id", &self.merchant_id)
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl OpayConfig {
    /// Create a config for the given credentials with default base URL and timeout.
    pub fn new(public_key: impl Into<String>, merchant_id: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            merchant_id: merchant_id.into(),
            ..Default::default()
        }
    }

    /// Load config from `OPAY_*` environment variables
    ///
    /// Reads `OPAY_PUBLIC_KEY`, `OPAY_MERCHANT_ID`, `OPAY_BASE_URL` and
    /// `OPAY_TIMEOUT_SECS`. The first two are required.
    pub fn from_env() -> OpayResult<Self> {
        Self::from_environment(config::Environment::with_prefix("OPAY"))
    }

    /// Load config from an explicit environment source.
    pub fn from_environment(environment: config::Environment) -> OpayResult<Self> {
        let settings = config::Config::builder()
            .set_default("base_url", DEFAULT_BASE_URL)?
            .set_default("timeout_secs", DEFAULT_TIMEOUT_SECS as i64)?
            .add_source(environment)
            .build()?;

        let config: OpayConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> OpayResult<()> {
        if self.public_key.trim().is_empty() {
            return Err(OpayError::configuration("OPAY_PUBLIC_KEY cannot be empty"));
        }

        if self.merchant_id.trim().is_empty() {
            return Err(OpayError::configuration("OPAY_MERCHANT_ID cannot be empty"));
        }

        if !(self.base_url.starts_with("https://") || self.base_url.starts_with("http://")) {
            return Err(OpayError::configuration(format!(
                "OPAY_BASE_URL must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(OpayError::configuration(
                "OPAY_TIMEOUT_SECS must be greater than 0",
            ));
        }

        Ok(())
    }
}
