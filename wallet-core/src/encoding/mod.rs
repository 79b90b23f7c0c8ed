// wallet-core/src/encoding/mod.rs

//! Text encodings cho key material: Base58Check (WIF / address) và hex input.

pub mod base58check;
pub mod hex_key;

pub use base58check::Base58Check;
pub use hex_key::decode_key_hex;
