// wallet-core/src/chains/bitcoin/params.rs
//
// Network Parameters — version bytes + curve + compression default
//
// Mọi literal của network (0x80, 0x00, ...) nằm ở đây; encoder chỉ nhận
// giá trị qua `NetworkParams`.

use crate::crypto::scalar::Curve;
use crate::error::{WalletError, WalletResult};
use serde::{Deserialize, Serialize};

/// Cấu hình network cho WIF + P2PKH address
///
/// # Compression default
/// `compressed = false` cho các preset: WIF bắt đầu bằng `5` (mainnet) và
/// address hash từ public key 65 bytes. Caller muốn dạng compressed
/// (WIF `K`/`L`) phải chọn explicit qua [`with_compressed`](Self::with_compressed).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkParams {
    pub name: String,
    #[serde(default)]
    pub curve: Curve,
    /// Version byte của export key (WIF)
    pub wif_version: u8,
    /// Version byte của P2PKH address
    pub address_version: u8,
    /// Compression mode mặc định cho batch derivation
    #[serde(default)]
    pub compressed: bool,
}

impl NetworkParams {
    pub fn mainnet() -> Self {
        Self {
            name: "Bitcoin Mainnet".to_string(),
            curve: Curve::Secp256k1,
            wif_version: 0x80,
            address_version: 0x00,
            compressed: false,
        }
    }

    pub fn testnet() -> Self {
        Self {
            name: "Bitcoin Testnet".to_string(),
            curve: Curve::Secp256k1,
            wif_version: 0xef,
            address_version: 0x6f,
            compressed: false,
        }
    }

    /// Preset theo tên ("mainnet" | "testnet")
    pub fn by_name(name: &str) -> WalletResult<Self> {
        match name.to_ascii_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(Self::mainnet()),
            "testnet" | "test" => Ok(Self::testnet()),
            other => Err(WalletError::Validation(format!(
                "Unknown network '{}'",
                other
            ))),
        }
    }

    #[must_use]
    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// WIF version và address version phải khác nhau, nếu không thì hai
    /// loại string không phân biệt được khi decode.
    pub fn validate(&self) -> WalletResult<()> {
        if self.wif_version == self.address_version {
            return Err(WalletError::Validation(format!(
                "'{}': WIF and address version bytes must differ (both 0x{:02x})",
                self.name, self.wif_version
            )));
        }
        Ok(())
    }
}

impl Default for NetworkParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_defaults() {
        let params = NetworkParams::default();
        assert_eq!(params.wif_version, 0x80);
        assert_eq!(params.address_version, 0x00);
        assert_eq!(params.curve, Curve::Secp256k1);
        assert!(!params.compressed);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_testnet() {
        let params = NetworkParams::testnet();
        assert_eq!(params.wif_version, 0xef);
        assert_eq!(params.address_version, 0x6f);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(NetworkParams::by_name("Mainnet").unwrap(), NetworkParams::mainnet());
        assert_eq!(NetworkParams::by_name("test").unwrap(), NetworkParams::testnet());
        assert!(matches!(
            NetworkParams::by_name("litecoin"),
            Err(WalletError::Validation(_))
        ));
    }

    #[test]
    fn test_with_compressed() {
        let params = NetworkParams::mainnet().with_compressed(true);
        assert!(params.compressed);
        assert_eq!(params.wif_version, 0x80);
    }

    #[test]
    fn test_colliding_versions_rejected() {
        let params = NetworkParams {
            address_version: 0x80,
            ..NetworkParams::mainnet()
        };
        assert!(matches!(params.validate(), Err(WalletError::Validation(_))));
    }

    #[test]
    fn test_json_config() {
        let json = r#"{"name":"Custom","wifVersion":176,"addressVersion":48}"#;
        let params: NetworkParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.wif_version, 0xb0);
        assert_eq!(params.address_version, 0x30);
        assert_eq!(params.curve, Curve::Secp256k1);
        assert!(!params.compressed);

        let back = serde_json::to_string(&NetworkParams::mainnet()).unwrap();
        assert!(back.contains("\"wifVersion\":128"));
        assert!(back.contains("\"curve\":\"secp256k1\""));
    }
}
