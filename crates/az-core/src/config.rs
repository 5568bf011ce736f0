use serde::{Deserialize, Serialize};

use crate::error::{AztecError, Result};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AztecConfig {
    pub encoder: EncoderConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Use the dedicated two-byte PUNCT codewords (CR LF, ". ", ", ", ": ").
    pub punctuation_pairs: bool,
}

/// Glyphs used when printing a bit sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub one: char,
    pub zero: char,
    /// Insert a space every `group` bits.
    pub group: Option<usize>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self { punctuation_pairs: true }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { one: 'X', zero: '.', group: None }
    }
}

impl AztecConfig {
    /// Parse a JSON document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.render.one == self.render.zero {
            return Err(AztecError::InvalidConfig(format!(
                "render glyphs must differ, both are {:?}",
                self.render.one
            )));
        }
        if self.render.group == Some(0) {
            return Err(AztecError::InvalidConfig("render group must be at least 1".into()));
        }
        Ok(())
    }
}
