//! Adapters - concrete implementations of ports (traits)

mod local_backend;

#[cfg(test)]
pub mod fake_backend;

pub use local_backend::{LocalBackend, LocalBackendConfig};
