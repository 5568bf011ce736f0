//! Growable MSB-first bit buffer.

use crate::config::RenderConfig;
use crate::error::{AztecError, Result};

/// Ordered bit sequence, packed eight bits per byte, most significant first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitList {
    bytes: Vec<u8>,
    len: usize,
}

impl BitList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self { bytes: Vec::with_capacity(bits.div_ceil(8)), len: 0 }
    }

    /// Number of bits written.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, bit: bool) {
        let offset = self.len % 8;
        if offset == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 0x80 >> offset;
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant bit first.
    ///
    /// # Panics
    /// If `width > 32` or `value` does not fit in `width` bits.
    pub fn append(&mut self, value: u32, width: u8) {
        assert!(width <= 32, "codeword width {width} exceeds 32 bits");
        assert!(
            width == 32 || value >> width == 0,
            "value {value:#x} does not fit in {width} bits"
        );
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Checked variant of [`append`](Self::append).
    pub fn try_append(&mut self, value: u32, width: u8) -> Result<()> {
        if width > 32 {
            return Err(AztecError::WidthTooLarge(width));
        }
        if width < 32 && value >> width != 0 {
            return Err(AztecError::Other(anyhow::anyhow!(
                "value {value:#x} does not fit in {width} bits"
            )));
        }
        self.append(value, width);
        Ok(())
    }

    pub fn append_byte(&mut self, byte: u8) {
        self.append(u32::from(byte), 8);
    }

    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.bytes[index / 8] & (0x80 >> (index % 8)) != 0)
    }

    /// Read the bit at `index`.
    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.get(index)
            .ok_or(AztecError::BitIndexOutOfRange { index, len: self.len })
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    /// Packed bytes; the final byte is zero-padded.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Render bits as glyphs, e.g. `X` for one and `.` for zero.
    pub fn render(&self, style: &RenderConfig) -> String {
        let groups = style.group.map_or(0, |g| self.len / g.max(1));
        let mut out = String::with_capacity(self.len + groups);
        for (i, bit) in self.iter().enumerate() {
            if let Some(g) = style.group {
                if i > 0 && g > 0 && i % g == 0 {
                    out.push(' ');
                }
            }
            out.push(if bit { style.one } else { style.zero });
        }
        out
    }
}

impl Extend<bool> for BitList {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl FromIterator<bool> for BitList {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitList::new();
        bits.extend(iter);
        bits
    }
}
