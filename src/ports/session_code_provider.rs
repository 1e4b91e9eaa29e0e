//! SessionCodeProvider trait - capability to obtain a processing session code

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::CvvPinResult;
use crate::model::SessionCode;

/// Capability to obtain a processing session code
#[async_trait]
pub trait SessionCodeProvider: Send + Sync {
    /// Request a fresh processing session code
    ///
    /// # Errors
    ///
    /// Returns errors if the processing center cannot issue a code
    async fn get(&self) -> CvvPinResult<SessionCode>;
}

#[async_trait]
impl<T> SessionCodeProvider for Arc<T>
where
    T: SessionCodeProvider + ?Sized,
{
    async fn get(&self) -> CvvPinResult<SessionCode> {
        (**self).get().await
    }
}
