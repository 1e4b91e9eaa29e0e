//! CVV/PIN provisioning orchestrator
//!
//! `CvvPinService` sequences the three provisioning steps over its ports and
//! holds the key exchange between `begin_exchange` and `confirm_exchange`.
//! Both operations take `&mut self`, so one instance runs at most one chain
//! at a time.

use tracing::{debug, info};

use crate::error::{CvvPinResult, OrchestrationError};
use crate::model::{KeyExchange, OneTimeCode};
use crate::ports::{ExchangeConfirmer, KeyExchanger, SessionCodeProvider};
use crate::use_cases::{confirm_exchange, exchange_key};

/// Orchestrates session code retrieval, key exchange and confirmation
pub struct CvvPinService<P, K, C> {
    provider: P,
    exchanger: K,
    confirmer: C,
    pending: Option<KeyExchange>,
}

impl<P, K, C> CvvPinService<P, K, C>
where
    P: SessionCodeProvider,
    K: KeyExchanger,
    C: ExchangeConfirmer,
{
    pub fn new(provider: P, exchanger: K, confirmer: C) -> Self {
        Self {
            provider,
            exchanger,
            confirmer,
            pending: None,
        }
    }

    /// Obtain a session code and exchange keys with it
    ///
    /// On success the key exchange is returned and kept for
    /// [`confirm_exchange`](Self::confirm_exchange). Any exchange left over
    /// from an earlier run is discarded first.
    ///
    /// # Errors
    ///
    /// Returns the provider's or the exchanger's error unchanged.
    pub async fn begin_exchange(&mut self) -> CvvPinResult<KeyExchange> {
        if self.pending.take().is_some() {
            debug!("Discarding unconfirmed key exchange");
        }

        let exchange = exchange_key(&self.provider, &self.exchanger).await?;
        self.pending = Some(exchange.clone());

        info!("Key exchange awaiting confirmation");
        Ok(exchange)
    }

    /// Confirm the pending key exchange with the user's one-time code
    ///
    /// The pending exchange is handed to the confirmer and is gone afterwards,
    /// whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns `OrchestrationError::NoPendingExchange` if no exchange is
    /// pending, otherwise the confirmer's error unchanged.
    pub async fn confirm_exchange(&mut self, otp: &OneTimeCode) -> CvvPinResult<()> {
        let exchange = self
            .pending
            .take()
            .ok_or(OrchestrationError::NoPendingExchange)?;

        confirm_exchange(&self.confirmer, exchange, otp).await?;

        info!("CVV/PIN key exchange confirmed");
        Ok(())
    }

    pub fn has_pending_exchange(&self) -> bool {
        self.pending.is_some()
    }
}
