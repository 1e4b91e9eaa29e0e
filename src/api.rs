use std::sync::Arc;

use crate::adapters::{LocalBackend, LocalBackendConfig};
use crate::error::CvvPinResult;
use crate::service::CvvPinService;

pub use crate::model::*;

/// Service whose three ports share one [`LocalBackend`]
pub type LocalCvvPinService =
    CvvPinService<Arc<LocalBackend>, Arc<LocalBackend>, Arc<LocalBackend>>;

/// Build a service over a fresh [`LocalBackend`]
///
/// # Errors
///
/// Returns `CvvPinError::Config` if `config` does not validate
pub fn local_service(config: LocalBackendConfig) -> CvvPinResult<LocalCvvPinService> {
    let backend = Arc::new(LocalBackend::new(config)?);
    Ok(CvvPinService::new(backend.clone(), backend.clone(), backend))
}

/// Run a complete exchange against a fresh local backend
///
/// Returns the confirmed key exchange.
pub async fn provision(config: LocalBackendConfig, otp: &OneTimeCode) -> CvvPinResult<KeyExchange> {
    let mut service = local_service(config)?;
    let exchange = service.begin_exchange().await?;
    service.confirm_exchange(otp).await?;
    Ok(exchange)
}
