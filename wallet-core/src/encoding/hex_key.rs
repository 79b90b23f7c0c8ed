// wallet-core/src/encoding/hex_key.rs
//
// Hex → 32-byte private key material
// Input phải đúng 64 ký tự hex (không phân biệt hoa/thường), không prefix "0x".

use crate::error::{KeyError, WalletResult};
use zeroize::Zeroizing;

pub const KEY_HEX_LEN: usize = 64;

/// Decode private key hex, auto-zeroize on drop
///
/// # Errors
/// `KeyError::InvalidHexFormat` nếu sai length hoặc có ký tự không phải hex.
pub fn decode_key_hex(input: &str) -> WalletResult<Zeroizing<[u8; 32]>> {
    if input.len() != KEY_HEX_LEN {
        return Err(KeyError::InvalidHexFormat(format!(
            "expected {} hex characters, got {}",
            KEY_HEX_LEN,
            input.len()
        ))
        .into());
    }

    let mut bytes = Zeroizing::new([0u8; 32]);
    hex::decode_to_slice(input, &mut bytes[..])
        .map_err(|e| KeyError::InvalidHexFormat(e.to_string()))?;
    Ok(bytes)
}
