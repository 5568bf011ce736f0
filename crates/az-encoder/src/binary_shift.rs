//! Binary Shift runs: header cost and literal bit layout.
//!
//! A run of `n` raw bytes is declared with the B/S codeword and a length:
//!
//! | n          | layout                                                   | header bits |
//! |------------|----------------------------------------------------------|------------:|
//! | 1..=31     | `B/S` `n:5` bytes                                        | 10 |
//! | 32..=62    | `B/S` `31:5` 31 bytes, `B/S` `(n-31):5` remaining bytes  | 20 |
//! | 63..=2078  | `B/S` `00000` `(n-31):11` bytes                          | 21 |
//!
//! Longer runs are split into back-to-back runs of at most [`MAX_RUN`] bytes.

use az_core::tables::BINARY_SHIFT;
use az_core::BitList;

/// Longest run a single header can declare (31 + 2047).
pub const MAX_RUN: usize = 2078;

const SHORT_RUN: usize = 31;
const SPLIT_RUN: usize = 62;

/// Header bits (B/S codewords plus length fields) for one run of `count` bytes.
///
/// # Panics
/// If `count` is zero.
pub fn overhead(count: usize) -> usize {
    assert!(count > 0, "binary run must hold at least one byte");
    let full = (count - 1) / MAX_RUN;
    let rest = count - full * MAX_RUN;
    full * single_overhead(MAX_RUN) + single_overhead(rest)
}

fn single_overhead(count: usize) -> usize {
    match count {
        1..=SHORT_RUN => 10,
        32..=SPLIT_RUN => 20,
        _ => 21,
    }
}

/// Total bits for a run of `count` bytes, payload included.
pub fn encoded_len(count: usize) -> usize {
    8 * count + overhead(count)
}

/// Append the B/S header(s) and raw bytes for `payload`.
pub fn emit(bits: &mut BitList, payload: &[u8]) {
    assert!(!payload.is_empty(), "binary run must hold at least one byte");
    for chunk in payload.chunks(MAX_RUN) {
        emit_single(bits, chunk);
    }
}

fn emit_single(bits: &mut BitList, run: &[u8]) {
    let count = run.len();
    for (i, &byte) in run.iter().enumerate() {
        if i == 0 || (i == SHORT_RUN && count <= SPLIT_RUN) {
            bits.append(BINARY_SHIFT, 5);
            if count > SPLIT_RUN {
                bits.append((count - SHORT_RUN) as u32, 16);
            } else if i == 0 {
                bits.append(count.min(SHORT_RUN) as u32, 5);
            } else {
                bits.append((count - SHORT_RUN) as u32, 5);
            }
        }
        bits.append_byte(byte);
    }
}
