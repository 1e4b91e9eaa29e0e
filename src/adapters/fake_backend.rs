use crate::error::{CvvPinError, CvvPinResult, ServiceError};
use crate::model::{KeyExchange, OneTimeCode, SessionCode};
use crate::ports::{ExchangeConfirmer, KeyExchanger, SessionCodeProvider};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Deterministic in-memory backend with call counters and failure injection
#[derive(Debug, Default)]
pub struct FakeBackend {
    pub otp: OneTimeCode,
    pub session_code_failure: Option<CvvPinError>,
    pub exchange_failure: Option<CvvPinError>,
    pub confirm_failure: Option<CvvPinError>,
    issued_codes: Mutex<HashSet<String>>,
    open_exchanges: Mutex<HashSet<Vec<u8>>>,
    get_calls: AtomicUsize,
    exchange_calls: AtomicUsize,
    confirm_calls: AtomicUsize,
}

impl FakeBackend {
    /// Reported with every wrong one-time code; the fake does not count attempts
    pub const ATTEMPTS_REMAINING: u8 = 2;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_session_code(error: impl Into<CvvPinError>) -> Self {
        Self {
            session_code_failure: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn failing_exchange(error: impl Into<CvvPinError>) -> Self {
        Self {
            exchange_failure: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn failing_confirm(error: impl Into<CvvPinError>) -> Self {
        Self {
            confirm_failure: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    pub fn exchange_calls(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn confirm_calls(&self) -> usize {
        self.confirm_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SessionCodeProvider for FakeBackend {
    async fn get(&self) -> CvvPinResult<SessionCode> {
        let n = self.get_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.session_code_failure {
            return Err(err.clone());
        }

        let code = format!("session-{n}");
        self.issued_codes.lock().unwrap().insert(code.clone());
        Ok(SessionCode::new(code)?)
    }
}

#[async_trait]
impl KeyExchanger for FakeBackend {
    async fn exchange(&self, code: SessionCode) -> CvvPinResult<KeyExchange> {
        let n = self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.exchange_failure {
            return Err(err.clone());
        }

        if !self.issued_codes.lock().unwrap().remove(code.as_str()) {
            return Err(ServiceError::KeyExchangeFailed {
                reason: "Unknown session code".to_string(),
            }
            .into());
        }

        let payload = format!("exchange-{n}-{}", code.as_str()).into_bytes();
        self.open_exchanges.lock().unwrap().insert(payload.clone());
        Ok(KeyExchange::from_bytes(payload)?)
    }
}

#[async_trait]
impl ExchangeConfirmer for FakeBackend {
    async fn confirm(&self, exchange: KeyExchange, otp: &OneTimeCode) -> CvvPinResult<()> {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = &self.confirm_failure {
            return Err(err.clone());
        }

        if !self.open_exchanges.lock().unwrap().remove(exchange.as_bytes()) {
            return Err(ServiceError::ConfirmationRejected {
                reason: "Unknown key exchange".to_string(),
            }
            .into());
        }

        if otp != &self.otp {
            return Err(ServiceError::InvalidOneTimeCode {
                attempts_remaining: Self::ATTEMPTS_REMAINING,
            }
            .into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::backend_contract;

    contract_tests_for!(
        fake_backend_contract,
        make = FakeBackend::new,
        tests = {
            test_session_code_issued => backend_contract::test_session_code_issued,
            test_session_codes_are_unique => backend_contract::test_session_codes_are_unique,
            test_exchange_issued_code => backend_contract::test_exchange_issued_code,
            test_exchange_unknown_code_fails => backend_contract::test_exchange_unknown_code_fails,
            test_exchange_code_used_twice_fails => backend_contract::test_exchange_code_used_twice_fails,
            test_confirm_success => backend_contract::test_confirm_success,
            test_confirm_wrong_otp => backend_contract::test_confirm_wrong_otp,
            test_confirm_unknown_exchange_fails => backend_contract::test_confirm_unknown_exchange_fails,
            test_confirm_exchange_only_once => backend_contract::test_confirm_exchange_only_once,
        }
    );

    #[tokio::test]
    async fn test_wrong_otp_reports_fixed_attempts() {
        let backend = FakeBackend::new();
        let wrong = OneTimeCode::try_from("000000").unwrap();

        for _ in 0..3 {
            let code = backend.get().await.unwrap();
            let exchange = backend.exchange(code).await.unwrap();
            assert_eq!(
                backend.confirm(exchange, &wrong).await.unwrap_err(),
                CvvPinError::Service(ServiceError::InvalidOneTimeCode {
                    attempts_remaining: FakeBackend::ATTEMPTS_REMAINING
                })
            );
        }
    }

    #[tokio::test]
    async fn test_injected_failure_is_returned_and_counted() {
        let backend = FakeBackend::failing_session_code(ServiceError::Connection {
            reason: "offline".to_string(),
        });

        let result = backend.get().await;

        assert_eq!(
            result.unwrap_err(),
            CvvPinError::Service(ServiceError::Connection {
                reason: "offline".to_string()
            })
        );
        assert_eq!(backend.get_calls(), 1);
    }
}
