//! Domain types for the provisioning handshake
//!
//! Each type wraps a primitive, enforces its invariants at construction
//! and redacts its contents in `Debug` output.

mod key_exchange;
mod one_time_code;
mod session_code;

pub use key_exchange::{KeyExchange, KeyExchangeError};
pub use one_time_code::{OneTimeCode, OneTimeCodeError};
pub use session_code::{SessionCode, SessionCodeError};
