// wallet-core/src/crypto/public_key.rs
//
// Public Key Derivation — Q = k·G trên secp256k1
//
// Serialization (SEC1):
// - Compressed   (33B): [0x02 | 0x03] || x   (prefix theo parity của y)
// - Uncompressed (65B): 0x04 || x || y

use crate::crypto::scalar::PrivateScalar;
use crate::error::{KeyError, WalletResult};
use k256::{elliptic_curve::sec1::ToEncodedPoint, EncodedPoint, PublicKey};

pub const COMPRESSED_LEN: usize = 33;
pub const UNCOMPRESSED_LEN: usize = 65;

/// Public key đã serialize theo SEC1
///
/// Length + prefix byte xác định compression mode, không cần flag riêng.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedPublicKey {
    point: EncodedPoint,
}

impl SerializedPublicKey {
    /// Parse SEC1 bytes (33 hoặc 65 bytes), kiểm tra điểm nằm trên curve
    pub fn from_bytes(bytes: &[u8]) -> WalletResult<Self> {
        // Chỉ nhận 02/03 (33B) và 04 (65B); SEC1 compact tag 0x05 bị loại
        match (bytes.first(), bytes.len()) {
            (Some(0x02 | 0x03), COMPRESSED_LEN) | (Some(0x04), UNCOMPRESSED_LEN) => {}
            (prefix, len) => {
                return Err(KeyError::InvalidPublicKey(format!(
                    "unsupported prefix {:02x?} for {} bytes",
                    prefix, len
                ))
                .into())
            }
        }
        let public_key = PublicKey::from_sec1_bytes(bytes)
            .map_err(|e| KeyError::InvalidPublicKey(format!("{} ({} bytes)", e, bytes.len())))?;
        let compressed = bytes.len() == COMPRESSED_LEN;
        Ok(Self {
            point: public_key.to_encoded_point(compressed),
        })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.point.as_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.point.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.point.as_bytes().is_empty()
    }

    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.point.is_compressed()
    }

    /// x-coordinate (32 bytes, big-endian)
    pub fn x(&self) -> Option<&[u8]> {
        self.point.x().map(|x| x.as_slice())
    }

    /// y-coordinate, chỉ có với dạng uncompressed
    pub fn y(&self) -> Option<&[u8]> {
        self.point.y().map(|y| y.as_slice())
    }

    /// Chuyển sang dạng compressed (33B)
    pub fn to_compressed(&self) -> WalletResult<Self> {
        self.reencode(true)
    }

    /// Chuyển sang dạng uncompressed (65B), y được khôi phục từ parity
    pub fn to_uncompressed(&self) -> WalletResult<Self> {
        self.reencode(false)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    fn reencode(&self, compressed: bool) -> WalletResult<Self> {
        if self.is_compressed() == compressed {
            return Ok(self.clone());
        }
        let public_key = PublicKey::from_sec1_bytes(self.as_bytes())
            .map_err(|e| KeyError::InvalidPublicKey(e.to_string()))?;
        Ok(Self {
            point: public_key.to_encoded_point(compressed),
        })
    }
}

impl std::fmt::Display for SerializedPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for SerializedPublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Public Key Deriver
///
/// # Security
/// Scalar multiplication dùng k256 `ProjectivePoint` (constant-time,
/// không branch trên bits của private key).
pub struct PublicKeyDeriver;

impl PublicKeyDeriver {
    /// Derive public key từ private scalar đã validate
    ///
    /// Không thể fail: scalar nằm trong [1, n) nên k·G không bao giờ là
    /// point at infinity.
    pub fn derive(scalar: &PrivateScalar, compressed: bool) -> SerializedPublicKey {
        let public_key = scalar.secret_key().public_key();
        SerializedPublicKey {
            point: public_key.to_encoded_point(compressed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::scalar::SECP256K1_ORDER;

    const G_X: &str = "79be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_Y: &str = "483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    fn scalar_one() -> PrivateScalar {
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        PrivateScalar::validate(&bytes).unwrap()
    }

    #[test]
    fn test_generator_uncompressed() {
        let pubkey = PublicKeyDeriver::derive(&scalar_one(), false);
        assert_eq!(pubkey.len(), UNCOMPRESSED_LEN);
        assert!(!pubkey.is_compressed());
        assert_eq!(pubkey.to_hex(), format!("04{}{}", G_X, G_Y));
        assert_eq!(hex::encode(pubkey.x().unwrap()), G_X);
        assert_eq!(hex::encode(pubkey.y().unwrap()), G_Y);
    }

    #[test]
    fn test_generator_compressed() {
        let pubkey = PublicKeyDeriver::derive(&scalar_one(), true);
        assert_eq!(pubkey.len(), COMPRESSED_LEN);
        assert!(pubkey.is_compressed());
        // y của G là số chẵn → prefix 0x02
        assert_eq!(pubkey.to_hex(), format!("02{}", G_X));
        assert!(pubkey.y().is_none());
    }

    #[test]
    fn test_negated_generator_has_odd_prefix() {
        // (n - 1)·G = -G: cùng x, y lẻ
        let mut bytes = SECP256K1_ORDER;
        bytes[31] -= 1;
        let scalar = PrivateScalar::validate(&bytes).unwrap();
        let pubkey = PublicKeyDeriver::derive(&scalar, true);
        assert_eq!(pubkey.to_hex(), format!("03{}", G_X));
    }

    #[test]
    fn test_compression_conversion() {
        let compressed = PublicKeyDeriver::derive(&scalar_one(), true);
        let uncompressed = PublicKeyDeriver::derive(&scalar_one(), false);

        assert_eq!(compressed.to_uncompressed().unwrap(), uncompressed);
        assert_eq!(uncompressed.to_compressed().unwrap(), compressed);
        assert_eq!(compressed.to_compressed().unwrap(), compressed);
    }

    #[test]
    fn test_from_bytes_roundtrip() {
        let pubkey = PublicKeyDeriver::derive(&scalar_one(), false);
        let parsed = SerializedPublicKey::from_bytes(pubkey.as_bytes()).unwrap();
        assert_eq!(parsed, pubkey);
        assert_eq!(parsed.to_string(), pubkey.to_hex());
    }

    #[test]
    fn test_from_bytes_rejects_invalid() {
        // Sai length
        assert!(SerializedPublicKey::from_bytes(&[0x02; 20]).is_err());
        // Prefix không hợp lệ
        let mut bad_prefix = hex::decode(format!("05{}", G_X)).unwrap();
        assert!(SerializedPublicKey::from_bytes(&bad_prefix).is_err());
        // Điểm không nằm trên curve (y sai)
        bad_prefix = hex::decode(format!("04{}{}", G_X, G_X)).unwrap();
        assert!(SerializedPublicKey::from_bytes(&bad_prefix).is_err());
    }

    #[test]
    fn test_from_bytes_prefix_must_match_length() {
        // 0x05 compact tag với x của G
        let compact = hex::decode(format!("05{}", G_X)).unwrap();
        assert!(matches!(
            SerializedPublicKey::from_bytes(&compact),
            Err(crate::error::WalletError::Key(KeyError::InvalidPublicKey(_)))
        ));
        // 0x04 nhưng chỉ 33 bytes
        let short = hex::decode(format!("04{}", G_X)).unwrap();
        assert!(SerializedPublicKey::from_bytes(&short).is_err());
        // 0x02 nhưng 65 bytes
        let long = hex::decode(format!("02{}{}", G_X, G_Y)).unwrap();
        assert!(SerializedPublicKey::from_bytes(&long).is_err());
        // Prefix hợp lệ vẫn parse được, giữ nguyên compression mode
        let compressed = hex::decode(format!("02{}", G_X)).unwrap();
        let parsed = SerializedPublicKey::from_bytes(&compressed).unwrap();
        assert!(parsed.is_compressed());
        assert_eq!(parsed.as_bytes(), compressed.as_slice());
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = PublicKeyDeriver::derive(&scalar_one(), true);
        let b = PublicKeyDeriver::derive(&scalar_one(), true);
        assert_eq!(a, b);
    }
}
