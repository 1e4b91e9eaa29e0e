//! Use cases (orchestration)
//!
//! This module contains use cases that orchestrate operations across multiple ports.
//! Each step awaits its collaborator before the next one starts.

mod confirm_exchange;
mod exchange_key;

pub use confirm_exchange::confirm_exchange;
pub use exchange_key::exchange_key;
