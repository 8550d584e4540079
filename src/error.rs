use thiserror::Error;

pub type OpayResult<T> = Result<T, OpayError>;

/// Errors raised by the OPay client.
///
/// A well-formed vendor failure body is not an error: it is returned to the
/// caller as ordinary data.
#[derive(Debug, Error)]
pub enum OpayError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Transport error: {message}")]
    Transport { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl OpayError {
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Name of the missing field, if this is a `MissingField` error.
    pub fn missing_field_name(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } => Some(field),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OpayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            OpayError::transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            OpayError::transport(format!("Connection failed: {}", err))
        } else {
            OpayError::transport(format!("Request error: {}", err))
        }
    }
}

impl From<serde_json::Error> for OpayError {
    fn from(err: serde_json::Error) -> Self {
        OpayError::serialization(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for OpayError {
    fn from(err: config::ConfigError) -> Self {
        OpayError::configuration(err.to_string())
    }
}

/// Returns the trimmed value of a required field, or `MissingField` when it
/// is absent or blank.
pub(crate) fn require(value: Option<String>, field: &'static str) -> OpayResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(OpayError::missing_field(field)),
    }
}

/// Borrowed variant of [`require`] for single-field operations.
pub(crate) fn require_str<'a>(value: &'a str, field: &'static str) -> OpayResult<&'a str> {
    if value.trim().is_empty() {
        Err(OpayError::missing_field(field))
    } else {
        Ok(value)
    }
}
