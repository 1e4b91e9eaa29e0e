//! In-process processing center
//!
//! This adapter simulates the processing center side of the handshake so the
//! orchestrator can run without a network transport. It issues random session
//! codes and key exchange payloads, accepts each exactly once, and locks
//! confirmation after too many wrong one-time codes.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, CvvPinResult, ServiceError};
use crate::logic::{issue_unique, random_bytes, random_hex_token};
use crate::model::{KeyExchange, OneTimeCode, SessionCode};
use crate::ports::{ExchangeConfirmer, KeyExchanger, SessionCodeProvider};

/// Configuration for the local processing center
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalBackendConfig {
    /// Random bytes per session code (hex encoded on issue)
    pub session_code_bytes: usize,
    /// Random bytes per key exchange payload
    pub exchange_bytes: usize,
    /// One-time code the backend expects on confirmation
    pub otp: OneTimeCode,
    /// Wrong one-time codes tolerated before confirmation locks
    pub max_otp_attempts: u8,
}

impl LocalBackendConfig {
    /// Shortest random token, in bytes, the backend will issue
    pub const MIN_TOKEN_BYTES: usize = 8;

    /// Check the configuration before a backend is built from it
    ///
    /// # Errors
    ///
    /// Returns an error if a token length is below [`Self::MIN_TOKEN_BYTES`]
    /// or no one-time code attempt is allowed
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("session_code_bytes", self.session_code_bytes),
            ("exchange_bytes", self.exchange_bytes),
        ];
        for (field, actual) in lengths {
            if actual < Self::MIN_TOKEN_BYTES {
                return Err(ConfigError::TokenTooShort {
                    field,
                    min: Self::MIN_TOKEN_BYTES,
                    actual,
                });
            }
        }
        if self.max_otp_attempts == 0 {
            return Err(ConfigError::NoOtpAttempts);
        }
        Ok(())
    }
}

impl Default for LocalBackendConfig {
    fn default() -> Self {
        Self {
            session_code_bytes: 16,
            exchange_bytes: 32,
            otp: OneTimeCode::default(),
            max_otp_attempts: 3,
        }
    }
}

#[derive(Debug)]
struct LocalState {
    issued_codes: HashSet<String>,
    open_exchanges: HashSet<Vec<u8>>,
    attempts_remaining: u8,
}

/// Simulated processing center implementing every provisioning port
#[derive(Debug)]
pub struct LocalBackend {
    config: LocalBackendConfig,
    state: Mutex<LocalState>,
}

impl LocalBackend {
    /// Build a backend from a validated configuration
    ///
    /// # Errors
    ///
    /// Returns `CvvPinError::Config` if [`LocalBackendConfig::validate`] fails
    pub fn new(config: LocalBackendConfig) -> CvvPinResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: LocalBackendConfig) -> Self {
        let state = LocalState {
            issued_codes: HashSet::new(),
            open_exchanges: HashSet::new(),
            attempts_remaining: config.max_otp_attempts,
        };
        Self {
            config,
            state: Mutex::new(state),
        }
    }

    pub fn config(&self) -> &LocalBackendConfig {
        &self.config
    }

    /// Wrong one-time codes still tolerated before lockout
    pub async fn attempts_remaining(&self) -> u8 {
        self.state.lock().await.attempts_remaining
    }
}

impl Default for LocalBackend {
    fn default() -> Self {
        Self::with_config(LocalBackendConfig::default())
    }
}

#[async_trait]
impl SessionCodeProvider for LocalBackend {
    async fn get(&self) -> CvvPinResult<SessionCode> {
        let mut state = self.state.lock().await;
        let token = issue_unique(&mut state.issued_codes, || {
            random_hex_token(self.config.session_code_bytes)
        });
        debug!("Issued processing session code");

        Ok(SessionCode::new(token)?)
    }
}

#[async_trait]
impl KeyExchanger for LocalBackend {
    async fn exchange(&self, code: SessionCode) -> CvvPinResult<KeyExchange> {
        let mut state = self.state.lock().await;

        if !state.issued_codes.remove(code.as_str()) {
            return Err(ServiceError::KeyExchangeFailed {
                reason: "unknown or already used session code".to_string(),
            }
            .into());
        }

        let payload = issue_unique(&mut state.open_exchanges, || {
            random_bytes(self.config.exchange_bytes)
        });
        let exchange = KeyExchange::from_bytes(payload)?;
        debug!("Key exchange issued: {:?}", exchange);

        Ok(exchange)
    }
}

#[async_trait]
impl ExchangeConfirmer for LocalBackend {
    async fn confirm(&self, exchange: KeyExchange, otp: &OneTimeCode) -> CvvPinResult<()> {
        let mut state = self.state.lock().await;

        let known = state.open_exchanges.remove(exchange.as_bytes());

        if state.attempts_remaining == 0 {
            warn!("Confirmation refused: provisioning is locked");
            return Err(ServiceError::Locked.into());
        }

        if !known {
            return Err(ServiceError::ConfirmationRejected {
                reason: "unknown or already confirmed key exchange".to_string(),
            }
            .into());
        }

        if otp != &self.config.otp {
            state.attempts_remaining = state.attempts_remaining.saturating_sub(1);
            if state.attempts_remaining == 0 {
                warn!("Too many wrong one-time codes, locking provisioning");
            }
            return Err(ServiceError::InvalidOneTimeCode {
                attempts_remaining: state.attempts_remaining,
            }
            .into());
        }

        state.attempts_remaining = self.config.max_otp_attempts;
        info!("Key exchange confirmed");

        Ok(())
    }
}
