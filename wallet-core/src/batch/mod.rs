// wallet-core/src/batch/mod.rs
//
// Batch Orchestrator
//
// ┌──────────────────────────────────────────────────────┐
// │  inputs[i] (hex)                                     │
// │      │  decode → validate → derive → encode          │
// │      ▼                                               │
// │  Ok(credentials) → BatchRecord::success  ─┐          │
// │  Err(e)          → BatchRecord::failure  ─┴→ out[i]  │
// └──────────────────────────────────────────────────────┘
//
// Lỗi của một item KHÔNG abort batch. Output luôn cùng length và thứ tự
// với input: output được collect theo index (kể cả khi chạy song song).

pub mod record;

pub use record::{BatchRecord, BatchSummary, RecordOutcome};

use crate::chains::bitcoin::{derive_credentials, NetworkParams};

/// Batch Processor — entry point cho danh sách private key hex
///
/// # Concurrency
/// Mọi stage đều là pure function, nên `process_parallel` (feature
/// `parallel`) fan-out mỗi item thành một task rayon độc lập.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    params: NetworkParams,
    compressed: bool,
}

impl BatchProcessor {
    /// Compression mode lấy theo `params.compressed`
    pub fn new(params: NetworkParams) -> Self {
        let compressed = params.compressed;
        Self { params, compressed }
    }

    #[must_use]
    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    #[inline]
    pub fn params(&self) -> &NetworkParams {
        &self.params
    }

    #[inline]
    pub fn compressed(&self) -> bool {
        self.compressed
    }

    /// Xử lý một input, không bao giờ fail
    pub fn process_one(&self, input: &str) -> BatchRecord {
        self.process_item(None, input)
    }

    /// Xử lý tuần tự
    pub fn process<S: AsRef<str>>(&self, inputs: &[S]) -> Vec<BatchRecord> {
        let records = inputs
            .iter()
            .enumerate()
            .map(|(index, input)| self.process_item(Some(index), input.as_ref()))
            .collect();
        self.finish(records)
    }

    /// Xử lý song song trên rayon thread pool
    ///
    /// Kết quả giống hệt [`process`](Self::process): indexed collect giữ
    /// nguyên thứ tự input.
    #[cfg(feature = "parallel")]
    pub fn process_parallel<S: AsRef<str> + Sync>(&self, inputs: &[S]) -> Vec<BatchRecord> {
        use rayon::prelude::*;

        let records = inputs
            .par_iter()
            .enumerate()
            .map(|(index, input)| self.process_item(Some(index), input.as_ref()))
            .collect();
        self.finish(records)
    }

    fn process_item(&self, index: Option<usize>, input: &str) -> BatchRecord {
        let result = derive_credentials(input, &self.params, self.compressed);
        if let Err(e) = &result {
            match index {
                Some(index) => {
                    tracing::warn!(index, kind = %e.kind(), error = %e, "failed to derive credentials")
                }
                None => tracing::warn!(kind = %e.kind(), error = %e, "failed to derive credentials"),
            }
        }
        BatchRecord::from_result(input, result)
    }

    fn finish(&self, records: Vec<BatchRecord>) -> Vec<BatchRecord> {
        let summary = BatchSummary::from_records(&records);
        tracing::info!(
            network = %self.params.name,
            compressed = self.compressed,
            total = summary.total,
            succeeded = summary.succeeded,
            failed = summary.failed,
            "batch processed"
        );
        records
    }
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new(NetworkParams::default())
    }
}
