// wallet-core/src/crypto/mod.rs

//! Core Cryptography Module
//!
//! Các primitive của pipeline derivation:
//!
//! - **Scalar Validation**: private key phải nằm trong `[1, n)` via [`PrivateScalar`].
//! - **Public Key**: `Q = k·G`, serialize compressed / uncompressed via [`PublicKeyDeriver`].
//! - **Hashing**: `hash256` (SHA-256d) và `hash160` (RIPEMD-160 ∘ SHA-256).

pub mod hash;
pub mod public_key;
pub mod scalar;

// Re-exports for cleaner API access
pub use hash::{hash160, hash256};
pub use public_key::{PublicKeyDeriver, SerializedPublicKey};
pub use scalar::{Curve, PrivateScalar, SECP256K1_ORDER};
