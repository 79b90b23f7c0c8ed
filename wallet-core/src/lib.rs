// wallet-core/src/lib.rs

//! WIF Wallet Core
//!
//! Derive export key (WIF) và P2PKH address từ raw secp256k1 private key:
//!
//! ```text
//! hex (64 chars) → PrivateScalar → SerializedPublicKey ─→ hash160 → Base58Check → address
//!                         └──────────────────────────────────────→ Base58Check → WIF
//! ```
//!
//! - [`crypto`]: scalar validation, public key, hash primitives
//! - [`encoding`]: Base58Check codec, hex key decoder
//! - [`chains::bitcoin`]: network params, address, WIF
//! - [`batch`]: per-item isolated batch processing

pub mod batch;
pub mod chains;
pub mod crypto;
pub mod encoding;
pub mod error;

pub use batch::{BatchProcessor, BatchRecord, BatchSummary, RecordOutcome};
pub use chains::bitcoin::{
    derive_credentials, DecodedWif, KeyCredentials, NetworkParams, P2pkhAddress, WifKey,
};
pub use crypto::{Curve, PrivateScalar, PublicKeyDeriver, SerializedPublicKey};
pub use encoding::Base58Check;
pub use error::{EncodingError, ErrorKind, KeyError, WalletError, WalletResult};
