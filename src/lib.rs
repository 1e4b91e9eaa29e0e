//! CVV/PIN provisioning key exchange client
//!
//! The provisioning handshake runs in three strictly sequential steps against
//! a processing center:
//!
//! 1. obtain a processing session code ([`ports::SessionCodeProvider`]),
//! 2. exchange keys for that session ([`ports::KeyExchanger`]),
//! 3. confirm the exchange with the user's one-time code
//!    ([`ports::ExchangeConfirmer`]).
//!
//! [`CvvPinService`] drives the steps and stops at the first error, returning
//! it unchanged. [`api`] wires the service to the in-process
//! [`LocalBackend`].

mod adapters;
pub mod api;
pub mod error;
mod logic;
pub mod model;
pub mod ports;
mod service;
pub mod use_cases;

// Re-export commonly used types
pub use error::{CvvPinError, CvvPinResult};
pub use model::{KeyExchange, OneTimeCode, SessionCode};
pub use service::CvvPinService;

// Re-export public API
pub use adapters::{LocalBackend, LocalBackendConfig};
pub use api::{local_service, provision, LocalCvvPinService};
