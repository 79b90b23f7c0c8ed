// wallet-core/src/chains/bitcoin/wif.rs
//
// WIF (Wallet Import Format) — export key string
//
// payload = scalar (32B)            → uncompressed (mainnet: "5...")
// payload = scalar || 0x01 (33B)    → compressed   (mainnet: "K..." / "L...")
// result  = Base58Check(wif_version, payload)

use crate::chains::bitcoin::params::NetworkParams;
use crate::crypto::scalar::PrivateScalar;
use crate::encoding::base58check::Base58Check;
use crate::error::{EncodingError, WalletResult};
use zeroize::{Zeroize, Zeroizing};

/// Marker byte đánh dấu public key dạng compressed
pub const COMPRESSION_MARKER: u8 = 0x01;

/// WIF decode result
#[derive(Debug)]
pub struct DecodedWif {
    pub scalar: PrivateScalar,
    /// Compression marker có trong payload hay không
    pub compressed: bool,
}

/// WIF Export Key Builder
///
/// # Security
/// - Payload buffer (chứa private key) và buffer trung gian của Base58Check
///   đều được zeroize khi drop; WIF string trả về thì không
/// - Compression marker chỉ mang tính thông tin, không đổi giá trị scalar
pub struct WifKey;

impl WifKey {
    /// Build WIF từ raw scalar bytes
    ///
    /// # Arguments
    /// * `scalar_bytes` - 32 bytes big-endian
    /// * `export_version` - WIF version byte (0x80 mainnet)
    /// * `compressed` - Append marker 0x01 hay không
    pub fn build(scalar_bytes: &[u8; 32], export_version: u8, compressed: bool) -> String {
        let mut payload = Zeroizing::new(Vec::with_capacity(33));
        payload.extend_from_slice(scalar_bytes);
        if compressed {
            payload.push(COMPRESSION_MARKER);
        }
        Base58Check::encode(export_version, &payload)
    }

    /// Build WIF từ scalar đã validate, theo network params
    pub fn for_network(scalar: &PrivateScalar, params: &NetworkParams, compressed: bool) -> String {
        Self::build(&scalar.to_bytes(), params.wif_version, compressed)
    }

    /// Import WIF → scalar + compression flag
    ///
    /// # Validation
    /// - Checksum + alphabet (Base58Check)
    /// - Version byte phải khớp `params.wif_version`
    /// - Payload 32 bytes, hoặc 33 bytes kết thúc bằng 0x01
    /// - Scalar trong range [1, n)
    pub fn decode(wif: &str, params: &NetworkParams) -> WalletResult<DecodedWif> {
        let (version, mut payload) = Base58Check::decode(wif)?;

        let result = Self::parse_payload(version, &payload, params);
        payload.zeroize();
        result
    }

    #[inline]
    pub fn is_valid(wif: &str, params: &NetworkParams) -> bool {
        Self::decode(wif, params).is_ok()
    }

    fn parse_payload(version: u8, payload: &[u8], params: &NetworkParams) -> WalletResult<DecodedWif> {
        if version != params.wif_version {
            return Err(EncodingError::UnexpectedVersion {
                expected: params.wif_version,
                found: version,
            }
            .into());
        }

        let compressed = match payload.len() {
            32 => false,
            33 if payload[32] == COMPRESSION_MARKER => true,
            len => return Err(EncodingError::InvalidPayloadLength(len).into()),
        };

        let mut key_bytes = Zeroizing::new([0u8; 32]);
        key_bytes.copy_from_slice(&payload[..32]);
        let scalar = PrivateScalar::validate_for(params.curve, &key_bytes)?;

        Ok(DecodedWif { scalar, compressed })
    }
}
