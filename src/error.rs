//! Error types
//!
//! This module defines the error taxonomy shared by every component:
//! - `Validation`: malformed attributes or hex/decimal encodings
//! - `Witness`: circuit constraints unsatisfiable for the given inputs
//! - `Configuration`: missing or mismatched key/circuit artifacts
//! - `Authentication`: proof verification failed
//!
//! Validation and witness failures are client errors and must not be
//! retried with the same inputs. Configuration failures are fatal at
//! startup. Authentication intentionally carries no diagnostic detail:
//! the caller learns only that verification failed, never which of the
//! cryptographic or binding checks rejected the proof.

use thiserror::Error;

/// Errors produced by the commitment/proof protocol
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed attributes or malformed hex/decimal encodings
    #[error("validation error: {0}")]
    Validation(String),

    /// Circuit constraints unsatisfiable: the claimed secret does not
    /// hash to the claimed commitment
    #[error("witness error: {0}")]
    Witness(String),

    /// Missing or mismatched circuit/key artifacts at startup
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Proof verification failed (cryptographic check, commitment
    /// binding check, or both)
    #[error("unauthorized")]
    Authentication,

    /// JSON serialization/deserialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O failure while reading or writing artifacts
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for errors the caller can fix by correcting its input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::Witness(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_message_is_opaque() {
        // The unauthorized outcome must not leak which check failed
        let err = Error::Authentication;
        assert_eq!(err.to_string(), "unauthorized");
    }

    #[test]
    fn test_validation_display() {
        let err = Error::Validation("bad hex".to_string());
        assert!(err.to_string().contains("bad hex"));
        assert!(err.is_client_error());
    }

    #[test]
    fn test_witness_is_client_error() {
        let err = Error::Witness("unsatisfiable".to_string());
        assert!(err.is_client_error());
    }

    #[test]
    fn test_configuration_is_not_client_error() {
        let err = Error::Configuration("missing verification key".to_string());
        assert!(!err.is_client_error());
        assert!(!Error::Authentication.is_client_error());
    }
}
