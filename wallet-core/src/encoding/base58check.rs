// wallet-core/src/encoding/base58check.rs
//
// Base58Check Codec
//
// Layout: base58( version (1B) || payload || checksum (4B) )
// checksum = hash256(version || payload)[..4]
// Alphabet Bitcoin (không có 0, O, I, l); mỗi byte 0x00 ở đầu → một ký tự '1'.

use crate::crypto::hash::hash256;
use crate::error::{EncodingError, WalletResult};
use zeroize::Zeroizing;

const CHECKSUM_LEN: usize = 4;

/// Base58Check Codec, dùng chung cho WIF và address
pub struct Base58Check;

impl Base58Check {
    /// Encode `version || payload` kèm checksum 4 bytes
    ///
    /// Buffer trung gian được zeroize khi drop (payload có thể là private key).
    pub fn encode(version: u8, payload: &[u8]) -> String {
        let mut data = Zeroizing::new(Vec::with_capacity(1 + payload.len() + CHECKSUM_LEN));
        data.push(version);
        data.extend_from_slice(payload);

        let checksum = hash256(&data);
        data.extend_from_slice(&checksum[..CHECKSUM_LEN]);

        bs58::encode(data.as_slice()).into_string()
    }

    /// Decode và verify checksum
    ///
    /// # Returns
    /// `(version, payload)`
    ///
    /// # Errors
    /// - `InvalidCharacter` nếu có ký tự ngoài alphabet
    /// - `TooShort` nếu không đủ chỗ cho version + checksum
    /// - `ChecksumMismatch` nếu 4 bytes cuối không khớp
    pub fn decode(text: &str) -> WalletResult<(u8, Vec<u8>)> {
        let mut data = bs58::decode(text)
            .into_vec()
            .map_err(|e| Self::map_decode_error(text, e))?;

        if data.len() < 1 + CHECKSUM_LEN {
            return Err(EncodingError::TooShort(data.len()).into());
        }

        let body_len = data.len() - CHECKSUM_LEN;
        let expected = hash256(&data[..body_len]);
        if data[body_len..] != expected[..CHECKSUM_LEN] {
            return Err(EncodingError::ChecksumMismatch.into());
        }

        data.truncate(body_len);
        let payload = data.split_off(1);
        Ok((data[0], payload))
    }

    fn map_decode_error(text: &str, err: bs58::decode::Error) -> EncodingError {
        match err {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                EncodingError::InvalidCharacter { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => EncodingError::InvalidCharacter {
                character: text
                    .get(index..)
                    .and_then(|rest| rest.chars().next())
                    .unwrap_or(char::REPLACEMENT_CHARACTER),
                index,
            },
            other => EncodingError::Malformed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalletError;
    use proptest::prelude::*;

    #[test]
    fn test_encode_known_address() {
        // HASH160 của compressed G, version 0x00
        let payload = hex::decode("751e76e8199196d454941c45d1b3a323f1433bd6").unwrap();
        assert_eq!(
            Base58Check::encode(0x00, &payload),
            "1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMH"
        );
    }

    #[test]
    fn test_leading_zero_bytes_map_to_ones() {
        // version 0x00 + payload bắt đầu bằng 2 bytes 0x00 → "111..."
        let encoded = Base58Check::encode(0x00, &[0x00, 0x00, 0x01]);
        assert!(encoded.starts_with("111"));
        assert!(!encoded.starts_with("1111"));
        assert_eq!(Base58Check::decode(&encoded).unwrap(), (0x00, vec![0x00, 0x00, 0x01]));
    }

    #[test]
    fn test_decode_known_wif() {
        let (version, payload) =
            Base58Check::decode("5HpHagT65TZzG1PH3CSu63k8DbpvD8s5ip4nEB3kEsreAnchuDf").unwrap();
        assert_eq!(version, 0x80);
        let mut expected = [0u8; 32];
        expected[31] = 1;
        assert_eq!(payload, expected.to_vec());
    }

    #[test]
    fn test_empty_payload() {
        let encoded = Base58Check::encode(0x05, &[]);
        assert_eq!(Base58Check::decode(&encoded).unwrap(), (0x05, vec![]));
    }

    #[test]
    fn test_checksum_mismatch() {
        // Đổi ký tự cuối của address hợp lệ
        let result = Base58Check::decode("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAMJ");
        assert_eq!(
            result,
            Err(WalletError::Encoding(EncodingError::ChecksumMismatch))
        );
    }

    #[test]
    fn test_invalid_character() {
        let result = Base58Check::decode("1BgGZ9tcN4rm9KBzDn7KprQz87SZ26SAM0");
        assert_eq!(
            result,
            Err(WalletError::Encoding(EncodingError::InvalidCharacter {
                character: '0',
                index: 33,
            }))
        );

        for bad in ["O", "I", "l"] {
            let text = format!("1BgGZ9tc{}", bad);
            assert!(matches!(
                Base58Check::decode(&text),
                Err(WalletError::Encoding(EncodingError::InvalidCharacter { .. }))
            ));
        }
    }

    #[test]
    fn test_non_ascii_is_invalid_character() {
        assert!(matches!(
            Base58Check::decode("1Bg€"),
            Err(WalletError::Encoding(EncodingError::InvalidCharacter { index: 3, .. }))
        ));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(
            Base58Check::decode("1111"),
            Err(WalletError::Encoding(EncodingError::TooShort(4)))
        );
        assert_eq!(
            Base58Check::decode(""),
            Err(WalletError::Encoding(EncodingError::TooShort(0)))
        );
    }

    #[test]
    fn test_map_decode_error_fallback() {
        let err = Base58Check::map_decode_error("", bs58::decode::Error::BufferTooSmall);
        assert!(matches!(err, EncodingError::Malformed(_)));
        assert_eq!(
            WalletError::from(err).kind(),
            crate::error::ErrorKind::InvalidEncoding
        );
    }

    proptest! {
        #[test]
        fn prop_roundtrip(version in any::<u8>(), payload in proptest::collection::vec(any::<u8>(), 0..80)) {
            let encoded = Base58Check::encode(version, &payload);
            prop_assert_eq!(Base58Check::decode(&encoded).unwrap(), (version, payload));
        }
    }
}
