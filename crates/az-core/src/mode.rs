use serde::{Deserialize, Serialize};
use std::fmt;

/// Aztec character encoding mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Upper,
    Lower,
    Digit,
    Mixed,
    Punct,
    Binary,
}

impl Mode {
    /// The five modes that carry per-character codewords, in table order.
    pub const CHARACTER: [Mode; 5] = [Mode::Upper, Mode::Lower, Mode::Digit, Mode::Mixed, Mode::Punct];

    /// Table index of a character mode.
    ///
    /// # Panics
    /// On [`Mode::Binary`], which has no row in the codeword tables.
    pub fn index(self) -> usize {
        match self {
            Self::Upper => 0,
            Self::Lower => 1,
            Self::Digit => 2,
            Self::Mixed => 3,
            Self::Punct => 4,
            Self::Binary => panic!("binary mode has no character table index"),
        }
    }

    /// Codeword width in bits. Binary payload bytes are 8 bits wide.
    pub fn codeword_width(self) -> u8 {
        match self {
            Self::Digit => 4,
            Self::Binary => 8,
            _ => 5,
        }
    }

    pub fn is_character(self) -> bool {
        !matches!(self, Self::Binary)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upper => "UPPER",
            Self::Lower => "LOWER",
            Self::Digit => "DIGIT",
            Self::Mixed => "MIXED",
            Self::Punct => "PUNCT",
            Self::Binary => "BINARY",
        };
        f.write_str(name)
    }
}
