//! High-level encoder pipeline: search, then emission.

use az_core::{BitList, EncoderConfig, Mode};
use serde::Serialize;
use tracing::debug;

use crate::emit;
use crate::search::{self, SearchOutcome};
use crate::token::Token;

/// Statistics about one encode call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeStats {
    pub input_len: usize,
    pub bit_len: usize,
    pub binary_runs: usize,
    pub binary_bytes: usize,
    /// Mode the encoder is latched into after the last byte.
    pub final_mode: Mode,
}

/// Encoded bits with statistics.
#[derive(Debug, Clone)]
pub struct EncodeResult {
    pub bits: BitList,
    pub stats: EncodeStats,
}

impl EncodeResult {
    pub fn bits_per_byte(&self) -> f64 {
        if self.stats.input_len == 0 { return 0.0; }
        self.stats.bit_len as f64 / self.stats.input_len as f64
    }
}

/// The high-level encoder.
#[derive(Debug, Clone, Default)]
pub struct HighLevelEncoder {
    pub config: EncoderConfig,
}

impl HighLevelEncoder {
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Encode `data` into the shortest bit sequence the search finds.
    pub fn encode(&self, data: &[u8]) -> EncodeResult {
        let SearchOutcome { arena, best } = search::search(data, &self.config);
        let bits = emit::emit(&arena, best.chain, data);
        assert_eq!(
            bits.len(),
            best.bit_count,
            "emitted length disagrees with the search cost"
        );

        let mut binary_runs = 0;
        let mut binary_bytes = 0;
        for token in arena.iter_back(best.chain) {
            if let Token::BinaryShift { count, .. } = token {
                binary_runs += 1;
                binary_bytes += count;
            }
        }

        let stats = EncodeStats {
            input_len: data.len(),
            bit_len: bits.len(),
            binary_runs,
            binary_bytes,
            final_mode: best.mode,
        };
        debug!(
            input_len = stats.input_len,
            bit_len = stats.bit_len,
            binary_runs,
            tokens = arena.len(),
            "high-level encode finished"
        );
        EncodeResult { bits, stats }
    }
}

/// Encode `data` with the default configuration.
pub fn highlevel_encode(data: &[u8]) -> BitList {
    HighLevelEncoder::default().encode(data).bits
}
