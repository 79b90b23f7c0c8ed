// wallet-core/src/chains/bitcoin/mod.rs

//! Bitcoin-style Single-Signature Credentials
//!
//! Từ một private key hex, derive:
//! - **Export Key**: WIF string via [`WifKey`].
//! - **Address**: P2PKH Base58Check address via [`P2pkhAddress`].
//! - **Network Params**: version bytes + compression default via [`NetworkParams`].

pub mod address;
pub mod params;
pub mod wif;

// Re-exports for cleaner API access
pub use address::P2pkhAddress;
pub use params::NetworkParams;
pub use wif::{DecodedWif, WifKey};

use crate::crypto::public_key::{PublicKeyDeriver, SerializedPublicKey};
use crate::crypto::scalar::PrivateScalar;
use crate::encoding::hex_key::decode_key_hex;
use crate::error::WalletResult;

/// Kết quả derivation cho một private key
#[derive(Clone, PartialEq, Eq)]
pub struct KeyCredentials {
    /// WIF export key (chứa private key — cẩn thận khi log!)
    pub export_key: String,
    pub address: String,
    pub public_key: SerializedPublicKey,
    pub compressed: bool,
}

impl std::fmt::Debug for KeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyCredentials")
            .field("export_key", &"[REDACTED]")
            .field("address", &self.address)
            .field("public_key", &self.public_key)
            .field("compressed", &self.compressed)
            .finish()
    }
}

/// Pipeline đầy đủ cho một key: hex → scalar → public key → (address, WIF)
///
/// # Arguments
/// * `key_hex` - 64 ký tự hex
/// * `params` - Network params (version bytes, curve)
/// * `compressed` - Compression mode cho cả WIF lẫn address
pub fn derive_credentials(
    key_hex: &str,
    params: &NetworkParams,
    compressed: bool,
) -> WalletResult<KeyCredentials> {
    let key_bytes = decode_key_hex(key_hex)?;
    let scalar = PrivateScalar::validate_for(params.curve, &key_bytes)?;
    Ok(credentials_from_scalar(&scalar, params, compressed))
}

/// Derive credentials từ scalar đã validate (không thể fail)
pub fn credentials_from_scalar(
    scalar: &PrivateScalar,
    params: &NetworkParams,
    compressed: bool,
) -> KeyCredentials {
    let public_key = PublicKeyDeriver::derive(scalar, compressed);
    let address = P2pkhAddress::for_network(&public_key, params);
    let export_key = WifKey::for_network(scalar, params, compressed);

    tracing::debug!(network = %params.name, compressed, %address, "derived credentials");

    KeyCredentials {
        export_key,
        address,
        public_key,
        compressed,
    }
}
