//! Shared building blocks for the Aztec high-level encoder: character modes,
//! the static codeword tables, the bit buffer the encoder writes into, and
//! configuration.

pub mod bits;
pub mod config;
pub mod error;
pub mod mode;
pub mod tables;

pub use bits::BitList;
pub use config::{AztecConfig, EncoderConfig, RenderConfig};
pub use error::{AztecError, Result};
pub use mode::Mode;
pub use tables::{Codeword, ModeTables, TABLES};
