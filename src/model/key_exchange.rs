//! Key exchange artifact
//!
//! The opaque result of a key exchange. The confirmer receives it as-is:
//! no mapping to a separate confirmation payload is performed.

use std::fmt;

use thiserror::Error;

/// Opaque key exchange result
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct KeyExchange(Vec<u8>);

impl KeyExchange {
    /// Create a key exchange from its raw payload
    ///
    /// # Errors
    ///
    /// Returns an error if the payload is empty
    pub fn from_bytes(payload: Vec<u8>) -> Result<Self, KeyExchangeError> {
        if payload.is_empty() {
            return Err(KeyExchangeError::EmptyPayload);
        }
        Ok(Self(payload))
    }

    /// Parse a key exchange from its hex encoding
    pub fn from_hex(payload: &str) -> Result<Self, KeyExchangeError> {
        let bytes = hex::decode(payload).map_err(|e| KeyExchangeError::InvalidHex {
            reason: e.to_string(),
        })?;
        Self::from_bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for KeyExchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyExchange([REDACTED; {} bytes])", self.0.len())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyExchangeError {
    #[error("Key exchange payload must not be empty")]
    EmptyPayload,

    #[error("Key exchange payload is not valid hex: {reason}")]
    InvalidHex { reason: String },
}
