// wallet-core/src/error.rs

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type WalletResult<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("Key Error: {0}")]
    Key(#[from] KeyError),

    #[error("Encoding Error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Validation Error: {0}")]
    Validation(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("Invalid hex key: {0}")]
    InvalidHexFormat(String),

    #[error("Private key is zero or not below the curve order.")]
    InvalidKeyRange,

    #[error("Invalid public key: {0}")]
    InvalidPublicKey(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodingError {
    #[error("Invalid base58 character '{character}' at index {index}.")]
    InvalidCharacter { character: char, index: usize },

    #[error("Checksum validation failed.")]
    ChecksumMismatch,

    #[error("Decoded data too short: {0} bytes.")]
    TooShort(usize),

    #[error("Unexpected version byte 0x{found:02x}, expected 0x{expected:02x}.")]
    UnexpectedVersion { expected: u8, found: u8 },

    #[error("Invalid payload length: {0} bytes.")]
    InvalidPayloadLength(usize),

    #[error("Malformed base58 input: {0}")]
    Malformed(String),
}

/// Phân loại lỗi gọn (serializable) cho batch record
///
/// `WalletError` giữ chi tiết đầy đủ; `ErrorKind` là phần caller cần để
/// quyết định hiển thị / log thế nào.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidHexFormat,
    InvalidKeyRange,
    InvalidPublicKey,
    ChecksumMismatch,
    InvalidCharacter,
    InvalidEncoding,
    InvalidParameters,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}

impl WalletError {
    /// Map lỗi chi tiết về `ErrorKind`
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Key(KeyError::InvalidHexFormat(_)) => ErrorKind::InvalidHexFormat,
            WalletError::Key(KeyError::InvalidKeyRange) => ErrorKind::InvalidKeyRange,
            WalletError::Key(KeyError::InvalidPublicKey(_)) => ErrorKind::InvalidPublicKey,
            WalletError::Encoding(EncodingError::ChecksumMismatch) => ErrorKind::ChecksumMismatch,
            WalletError::Encoding(EncodingError::InvalidCharacter { .. }) => {
                ErrorKind::InvalidCharacter
            }
            WalletError::Encoding(_) => ErrorKind::InvalidEncoding,
            WalletError::Validation(_) => ErrorKind::InvalidParameters,
        }
    }
}
