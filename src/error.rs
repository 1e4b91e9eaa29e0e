//! Errors raised while provisioning CVV/PIN keys
//!
//! `CvvPinError` splits failures by origin: the processing center, domain
//! validation, backend configuration, and out-of-order orchestrator calls.
//! Every type is `Clone + PartialEq` so an error can travel through the
//! orchestration unchanged and be compared on the other side.

use thiserror::Error;

/// Result type alias for cvvpin operations
///
/// This is a convenience alias for `Result<T, CvvPinError>`.
pub type CvvPinResult<T> = Result<T, CvvPinError>;

/// Top-level error type for all cvvpin operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CvvPinError {
    /// Processing center (collaborator) errors
    #[error("Processing service error: {0}")]
    Service(#[from] ServiceError),

    /// Domain validation errors
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// Rejected backend configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Caller contract violations
    #[error("Orchestration error: {0}")]
    Orchestration(#[from] OrchestrationError),
}

/// Errors reported by the session code provider, key exchanger or confirmer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// No processing session code could be obtained
    #[error("Processing session code unavailable: {reason}")]
    SessionCodeUnavailable { reason: String },

    /// Key exchange was refused or failed
    #[error("Key exchange failed: {reason}")]
    KeyExchangeFailed { reason: String },

    /// Confirmation was refused for a reason other than a wrong code
    #[error("Exchange confirmation rejected: {reason}")]
    ConfirmationRejected { reason: String },

    /// Wrong one-time code
    #[error("Invalid one-time code: attempts remaining: {attempts_remaining}")]
    InvalidOneTimeCode { attempts_remaining: u8 },

    /// Too many wrong one-time codes
    #[error("Provisioning is locked - too many failed one-time code attempts")]
    Locked,

    /// Transport to the processing center failed
    #[error("Failed to reach processing center: {reason}")]
    Connection { reason: String },
}

/// Domain validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Session code error
    #[error("Session code error: {0}")]
    SessionCode(#[from] crate::model::SessionCodeError),

    /// Key exchange error
    #[error("Key exchange error: {0}")]
    KeyExchange(#[from] crate::model::KeyExchangeError),

    /// One-time code error
    #[error("One-time code error: {0}")]
    OneTimeCode(#[from] crate::model::OneTimeCodeError),
}

/// Backend configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Random tokens too short to stay unique
    #[error("{field} must be at least {min} bytes, got {actual}")]
    TokenTooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },

    /// Confirmation would be locked from the start
    #[error("At least one one-time code attempt must be allowed")]
    NoOtpAttempts,
}

/// Errors caused by calling the orchestrator out of order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrchestrationError {
    /// `confirm_exchange` called without a successful `begin_exchange` first
    #[error("No pending key exchange - begin an exchange before confirming it")]
    NoPendingExchange,
}

/// Convert model errors to CvvPinError (via DomainError)
impl From<crate::model::SessionCodeError> for CvvPinError {
    fn from(err: crate::model::SessionCodeError) -> Self {
        CvvPinError::Domain(DomainError::SessionCode(err))
    }
}

impl From<crate::model::KeyExchangeError> for CvvPinError {
    fn from(err: crate::model::KeyExchangeError) -> Self {
        CvvPinError::Domain(DomainError::KeyExchange(err))
    }
}

impl From<crate::model::OneTimeCodeError> for CvvPinError {
    fn from(err: crate::model::OneTimeCodeError) -> Self {
        CvvPinError::Domain(DomainError::OneTimeCode(err))
    }
}
