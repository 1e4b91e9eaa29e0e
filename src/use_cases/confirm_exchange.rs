use crate::error::CvvPinResult;
use crate::model::{KeyExchange, OneTimeCode};
use crate::ports::ExchangeConfirmer;
use tracing::debug;

/// Confirm a key exchange with the user's one-time code
///
/// The exchange is handed to `confirmer` as-is and its outcome is returned unchanged.
pub async fn confirm_exchange<C>(
    confirmer: &C,
    exchange: KeyExchange,
    otp: &OneTimeCode,
) -> CvvPinResult<()>
where
    C: ExchangeConfirmer + ?Sized,
{
    debug!("Confirming key exchange");
    confirmer.confirm(exchange, otp).await?;

    debug!("Key exchange confirmed");
    Ok(())
}
