// wallet-core/src/crypto/hash.rs
//
// Hash Engine — SHA-256d + HASH160
//
// hash256 = SHA256(SHA256(data))   → checksum Base58Check
// hash160 = RIPEMD160(SHA256(data)) → address payload (20 bytes)

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Double SHA-256
#[inline]
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    Sha256::digest(first).into()
}

/// RIPEMD-160 của SHA-256 (HASH160)
#[inline]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}
