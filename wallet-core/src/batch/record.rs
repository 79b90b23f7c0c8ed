// wallet-core/src/batch/record.rs
//
// Batch Records — một record cho mỗi input, giữ nguyên input string để
// caller đối chiếu.
//
// JSON:
//   {"input": "...", "exportKey": "...", "address": "..."}
//   {"input": "...", "error": "InvalidHexFormat"}

use crate::chains::bitcoin::KeyCredentials;
use crate::error::{ErrorKind, WalletResult};
use serde::{Deserialize, Serialize};

/// Kết quả của một item: success XOR failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordOutcome {
    Success {
        #[serde(rename = "exportKey")]
        export_key: String,
        address: String,
    },
    Failure {
        error: ErrorKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchRecord {
    pub input: String,
    #[serde(flatten)]
    pub outcome: RecordOutcome,
}

impl BatchRecord {
    pub fn success(input: impl Into<String>, credentials: KeyCredentials) -> Self {
        Self {
            input: input.into(),
            outcome: RecordOutcome::Success {
                export_key: credentials.export_key,
                address: credentials.address,
            },
        }
    }

    pub fn failure(input: impl Into<String>, error: ErrorKind) -> Self {
        Self {
            input: input.into(),
            outcome: RecordOutcome::Failure { error },
        }
    }

    pub fn from_result(input: impl Into<String>, result: WalletResult<KeyCredentials>) -> Self {
        match result {
            Ok(credentials) => Self::success(input, credentials),
            Err(e) => Self::failure(input, e.kind()),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, RecordOutcome::Success { .. })
    }

    pub fn export_key(&self) -> Option<&str> {
        match &self.outcome {
            RecordOutcome::Success { export_key, .. } => Some(export_key),
            RecordOutcome::Failure { .. } => None,
        }
    }

    pub fn address(&self) -> Option<&str> {
        match &self.outcome {
            RecordOutcome::Success { address, .. } => Some(address),
            RecordOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<ErrorKind> {
        match self.outcome {
            RecordOutcome::Failure { error } => Some(error),
            RecordOutcome::Success { .. } => None,
        }
    }
}

/// Thống kê batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_records(records: &[BatchRecord]) -> Self {
        let succeeded = records.iter().filter(|r| r.is_success()).count();
        Self {
            total: records.len(),
            succeeded,
            failed: records.len() - succeeded,
        }
    }
}
