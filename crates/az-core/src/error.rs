use thiserror::Error;

#[derive(Error, Debug)]
pub enum AztecError {
    #[error("Bit index out of range: {index} (len {len})")]
    BitIndexOutOfRange { index: usize, len: usize },
    #[error("Codeword width too large: {0} bits (max 32)")]
    WidthTooLarge(u8),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AztecError>;
