//! Ports (traits) for the provisioning handshake
//!
//! One trait per processing center step. `CvvPinService` and the use cases
//! are generic over them, so a simulated backend, a test fake or a real
//! network client can be plugged in without touching the orchestration.

mod exchange_confirmer;
mod key_exchanger;
mod session_code_provider;

pub use exchange_confirmer::ExchangeConfirmer;
pub use key_exchanger::KeyExchanger;
pub use session_code_provider::SessionCodeProvider;

/// Combined trait for all processing center operations
///
/// A single backend object typically implements all three steps.
pub trait ProvisioningBackend: SessionCodeProvider + KeyExchanger + ExchangeConfirmer {}

// Blanket implementation for types that implement all operation traits
impl<T> ProvisioningBackend for T where T: SessionCodeProvider + KeyExchanger + ExchangeConfirmer {}
