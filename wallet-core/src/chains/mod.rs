// src/chains/mod.rs
pub mod bitcoin;

pub use bitcoin::{derive_credentials, KeyCredentials, NetworkParams};
