//! Aztec high-level encoder: bytes to the shortest mode-switched bit sequence.
//!
//! Stages:
//! 1. Search: per-position shortest path over character modes, shifts,
//!    latches and binary runs ([`search`])
//! 2. Emission: flatten the winning token chain into bits ([`emit`])
//!
//! Binary run headers are costed and laid out by [`binary_shift`].

pub mod binary_shift;
pub mod emit;
pub mod pipeline;
pub mod search;
pub mod state;
pub mod token;

pub use pipeline::{highlevel_encode, EncodeResult, EncodeStats, HighLevelEncoder};
