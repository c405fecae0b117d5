//! Error types for the integration crate.
//!
//! Errors are reported through rootcause:
//! - `CipherError`: Failures raised by the encrypt/decrypt collaborators
//! - `ConfigError`: Errors from encoding or decoding a configuration record

use std::fmt;

/// A failure raised by a caller-supplied encrypt or decrypt function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherError {
    /// Why the cipher failed.
    pub reason: String,
}

impl CipherError {
    /// Creates a new cipher error.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reason)
    }
}

impl std::error::Error for CipherError {}

/// Which direction of the cipher failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoOperation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for CryptoOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encrypt"),
            Self::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Errors from encoding or decoding an integration configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The persisted mapping is missing a key or carries the wrong type.
    MalformedEnvelope { reason: String },
    /// The payload is not a JSON object of the expected shape.
    MalformedPayload { config_type: String, reason: String },
    /// The encrypt or decrypt collaborator failed.
    CryptoFailure {
        operation: CryptoOperation,
        reason: String,
    },
    /// The tag does not name a known integration type.
    UnknownConfigType { config_type: String },
    /// The envelope belongs to a different integration type.
    ConfigTypeMismatch { expected: String, found: String },
    /// The payload names a field the integration type does not have.
    UnknownField { config_type: String, field: String },
}

impl ConfigError {
    pub(crate) fn encrypt_failed(err: &CipherError) -> Self {
        Self::CryptoFailure {
            operation: CryptoOperation::Encrypt,
            reason: err.reason.clone(),
        }
    }

    pub(crate) fn decrypt_failed(err: &CipherError) -> Self {
        Self::CryptoFailure {
            operation: CryptoOperation::Decrypt,
            reason: err.reason.clone(),
        }
    }

    pub(crate) fn malformed_payload(config_type: &str, reason: impl fmt::Display) -> Self {
        Self::MalformedPayload {
            config_type: config_type.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedEnvelope { reason } => {
                write!(f, "malformed config envelope: {reason}")
            }
            Self::MalformedPayload {
                config_type,
                reason,
            } => {
                write!(f, "malformed '{config_type}' config payload: {reason}")
            }
            Self::CryptoFailure { operation, reason } => {
                write!(f, "failed to {operation} config payload: {reason}")
            }
            Self::UnknownConfigType { config_type } => {
                write!(f, "unknown config type: {config_type}")
            }
            Self::ConfigTypeMismatch { expected, found } => {
                write!(
                    f,
                    "config type mismatch: expected '{expected}', found '{found}'"
                )
            }
            Self::UnknownField { config_type, field } => {
                write!(f, "unknown field '{field}' for '{config_type}' config")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_payload_display() {
        let err = ConfigError::malformed_payload("web", "expected value at line 1 column 1");
        assert!(err.to_string().contains("'web'"));
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn crypto_failure_names_operation() {
        let err = ConfigError::decrypt_failed(&CipherError::new("bad key"));
        assert_eq!(err.to_string(), "failed to decrypt config payload: bad key");

        let err = ConfigError::encrypt_failed(&CipherError::new("hsm offline"));
        assert!(err.to_string().starts_with("failed to encrypt"));
    }

    #[test]
    fn mismatch_display() {
        let err = ConfigError::ConfigTypeMismatch {
            expected: "slack".to_string(),
            found: "discord".to_string(),
        };
        assert!(err.to_string().contains("expected 'slack'"));
        assert!(err.to_string().contains("found 'discord'"));
    }
}
