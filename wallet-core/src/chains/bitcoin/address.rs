// wallet-core/src/chains/bitcoin/address.rs
//
// P2PKH Address Module
// HASH160 (SHA-256 → RIPEMD-160) + Base58Check

use crate::chains::bitcoin::params::NetworkParams;
use crate::crypto::hash::hash160;
use crate::crypto::public_key::SerializedPublicKey;
use crate::encoding::base58check::Base58Check;
use crate::error::{EncodingError, WalletResult};

pub const ADDRESS_HASH_LEN: usize = 20;

/// P2PKH Address Generator
///
/// # Flow:  Public Key (33B | 65B) → HASH160 → Address Hash (20B) → Base58Check
///
/// Compressed và uncompressed public key của cùng một private key cho ra
/// hai address khác nhau, cả hai đều hợp lệ.
pub struct P2pkhAddress;

impl P2pkhAddress {
    /// Hash 20 bytes của public key
    #[inline]
    pub fn hash(pubkey: &SerializedPublicKey) -> [u8; ADDRESS_HASH_LEN] {
        hash160(pubkey.as_bytes())
    }

    /// Build address string với version byte chỉ định
    pub fn build(pubkey: &SerializedPublicKey, address_version: u8) -> String {
        Base58Check::encode(address_version, &Self::hash(pubkey))
    }

    /// Build address theo network params
    #[inline]
    pub fn for_network(pubkey: &SerializedPublicKey, params: &NetworkParams) -> String {
        Self::build(pubkey, params.address_version)
    }

    // =========================================================================
    // UTILITIES
    // =========================================================================

    /// Decode address → 20 bytes hash
    ///
    /// Kiểm tra: alphabet, checksum, version byte, payload length.
    pub fn decode(address: &str, params: &NetworkParams) -> WalletResult<[u8; ADDRESS_HASH_LEN]> {
        let (version, payload) = Base58Check::decode(address)?;
        if version != params.address_version {
            return Err(EncodingError::UnexpectedVersion {
                expected: params.address_version,
                found: version,
            }
            .into());
        }

        let hash: [u8; ADDRESS_HASH_LEN] = payload
            .as_slice()
            .try_into()
            .map_err(|_| EncodingError::InvalidPayloadLength(payload.len()))?;
        Ok(hash)
    }

    #[inline]
    pub fn is_valid(address: &str, params: &NetworkParams) -> bool {
        Self::decode(address, params).is_ok()
    }

    /// Kiểm tra address có thuộc về public key này không
    pub fn matches(address: &str, pubkey: &SerializedPublicKey, params: &NetworkParams) -> bool {
        Self::decode(address, params)
            .map(|hash| hash == Self::hash(pubkey))
            .unwrap_or(false)
    }
}
