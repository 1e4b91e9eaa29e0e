//! Exchange key use case
//!
//! Obtains a processing session code and spends it on a key exchange.

use crate::error::CvvPinResult;
use crate::model::KeyExchange;
use crate::ports::{KeyExchanger, SessionCodeProvider};
use tracing::debug;

/// Run the first two steps of the provisioning handshake
///
/// This function orchestrates:
/// 1. Requesting a processing session code from `provider`
/// 2. Passing that code to `exchanger`
///
/// # Returns
///
/// The key exchange produced by `exchanger`, unchanged
///
/// # Errors
///
/// Returns the first error raised by either collaborator, unchanged.
/// If the provider fails, the exchanger is never called.
pub async fn exchange_key<P, K>(provider: &P, exchanger: &K) -> CvvPinResult<KeyExchange>
where
    P: SessionCodeProvider + ?Sized,
    K: KeyExchanger + ?Sized,
{
    debug!("Requesting processing session code");
    let code = provider.get().await?;

    debug!("Exchanging key for session code");
    let exchange = exchanger.exchange(code).await?;

    debug!("Key exchange received: {:?}", exchange);
    Ok(exchange)
}
