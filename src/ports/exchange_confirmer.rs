use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CvvPinResult;
use crate::model::{KeyExchange, OneTimeCode};

#[async_trait]
pub trait ExchangeConfirmer: Send + Sync {
    /// Confirm a key exchange with the user's one-time code
    ///
    /// The exchange is consumed whether or not confirmation succeeds.
    async fn confirm(&self, exchange: KeyExchange, otp: &OneTimeCode) -> CvvPinResult<()>;
}

#[async_trait]
impl<T> ExchangeConfirmer for Arc<T>
where
    T: ExchangeConfirmer + ?Sized,
{
    async fn confirm(&self, exchange: KeyExchange, otp: &OneTimeCode) -> CvvPinResult<()> {
        (**self).confirm(exchange, otp).await
    }
}
