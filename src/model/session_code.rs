//! Processing session code
//!
//! An opaque token that identifies one provisioning session. The provider
//! issues it and the key exchanger consumes it, so it is moved rather than
//! cloned between the two steps.

use std::fmt;

use thiserror::Error;

/// Opaque processing session code
#[derive(PartialEq, Eq, Hash)]
pub struct SessionCode(String);

impl SessionCode {
    /// Create a session code
    ///
    /// # Errors
    ///
    /// Returns an error if the code is empty or contains whitespace
    pub fn new(code: impl Into<String>) -> Result<Self, SessionCodeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(SessionCodeError::Empty);
        }
        if code.chars().any(char::is_whitespace) {
            return Err(SessionCodeError::ContainsWhitespace);
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionCode([REDACTED])")
    }
}

/// Errors that can occur when creating a session code
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCodeError {
    #[error("Session code must not be empty")]
    Empty,

    #[error("Session code must not contain whitespace")]
    ContainsWhitespace,
}
