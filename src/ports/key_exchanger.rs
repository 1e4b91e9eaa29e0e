//! KeyExchanger trait - capability to exchange keys for a session

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CvvPinResult;
use crate::model::{KeyExchange, SessionCode};

/// Capability to perform a key exchange
///
/// The session code is taken by value: each code is spent on exactly one
/// exchange.
#[async_trait]
pub trait KeyExchanger: Send + Sync {
    /// Exchange keys for the session identified by `code`
    ///
    /// # Arguments
    ///
    /// * `code` - Processing session code obtained from a [`SessionCodeProvider`]
    ///
    /// # Returns
    ///
    /// The opaque key exchange artifact
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - The session code is unknown or already used
    /// - The processing center refuses the exchange
    /// - The processing center cannot be reached
    ///
    /// [`SessionCodeProvider`]: super::SessionCodeProvider
    async fn exchange(&self, code: SessionCode) -> CvvPinResult<KeyExchange>;
}

#[async_trait]
impl<T> KeyExchanger for Arc<T>
where
    T: KeyExchanger + ?Sized,
{
    async fn exchange(&self, code: SessionCode) -> CvvPinResult<KeyExchange> {
        (**self).exchange(code).await
    }
}
