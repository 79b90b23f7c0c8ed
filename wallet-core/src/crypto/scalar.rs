// wallet-core/src/crypto/scalar.rs
//
// Private Scalar Validation — secp256k1
//
// Private key hợp lệ: 1 <= k < n (n = order của subgroup sinh bởi G).
// k = 0 hoặc k >= n → InvalidKeyRange.

use crate::error::{KeyError, WalletResult};
use k256::SecretKey;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Order n của secp256k1 (big-endian)
pub const SECP256K1_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, //
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, //
    0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, //
    0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
];

/// Curve dùng cho key derivation
///
/// Hiện tại chỉ có secp256k1, nhưng curve được truyền như data
/// (qua `NetworkParams`) thay vì hard-code trong pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Curve {
    /// secp256k1 — Bitcoin và các fork
    #[default]
    Secp256k1,
}

impl Curve {
    /// Order n của base point (32 bytes, big-endian)
    #[inline]
    pub const fn order(self) -> &'static [u8; 32] {
        match self {
            Curve::Secp256k1 => &SECP256K1_ORDER,
        }
    }
}

/// Private scalar đã validate (1 <= k < n)
///
/// # Security
/// - `SecretKey` bên trong tự động zeroize khi drop
/// - Custom Debug KHÔNG hiển thị key
/// - Range check constant-time (không branch trên giá trị secret)
#[derive(Clone)]
pub struct PrivateScalar {
    secret: SecretKey,
    curve: Curve,
}

impl std::fmt::Debug for PrivateScalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrivateScalar")
            .field("curve", &self.curve)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl PrivateScalar {
    /// Validate 32 bytes big-endian thành private scalar trên secp256k1
    pub fn validate(bytes: &[u8; 32]) -> WalletResult<Self> {
        Self::validate_for(Curve::Secp256k1, bytes)
    }

    /// Validate theo curve được chọn
    ///
    /// # Errors
    /// `KeyError::InvalidKeyRange` nếu `k == 0` hoặc `k >= n`.
    pub fn validate_for(curve: Curve, bytes: &[u8; 32]) -> WalletResult<Self> {
        let secret = match curve {
            // NonZeroScalar::from_repr: constant-time, reject 0 và >= n
            Curve::Secp256k1 => {
                SecretKey::from_bytes(bytes.into()).map_err(|_| KeyError::InvalidKeyRange)?
            }
        };
        Ok(Self { secret, curve })
    }

    /// Tạo private key ngẫu nhiên (OS CSPRNG)
    pub fn random() -> Self {
        Self {
            secret: SecretKey::random(&mut OsRng),
            curve: Curve::Secp256k1,
        }
    }

    /// Raw 32 bytes big-endian, auto-zeroize on drop
    pub fn to_bytes(&self) -> Zeroizing<[u8; 32]> {
        Zeroizing::new(self.secret.to_bytes().into())
    }

    #[inline]
    pub fn curve(&self) -> Curve {
        self.curve
    }

    #[inline]
    pub(crate) fn secret_key(&self) -> &SecretKey {
        &self.secret
    }
}
