use image::Rgba;
use ndarray::Array1;

use crate::error::{Result, TintError};

pub const TINT_CHANNELS: usize = 4;

/// Multiplicative tint color, stored as 8-bit `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tint {
    color: Rgba<u8>,
}

impl Tint {
    pub fn new(color: Rgba<u8>) -> Self {
        Self { color }
    }

    /// Parses `rrggbb` (optionally prefixed with `#`) and appends `alpha`.
    pub fn from_hex(rgb: &str, alpha: u8) -> Result<Self> {
        let digits = rgb.strip_prefix('#').unwrap_or(rgb);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(TintError::InvalidHex(rgb.to_string()));
        }

        let mut buf = [0, 0, 0, alpha];
        for i in 0..3 {
            let idx = i * 2;
            buf[i] = u8::from_str_radix(&digits[idx..(idx + 2)], 16)
                .map_err(|_| TintError::InvalidHex(rgb.to_string()))?;
        }

        Ok(Self::new(Rgba::from(buf)))
    }

    pub fn channels(&self) -> [u8; TINT_CHANNELS] {
        self.color.0
    }

    /// Components scaled into `[0, 1]`, ready to broadcast over a grid.
    pub fn factors(&self) -> Array1<f32> {
        self.color.0.iter().map(|&c| f32::from(c) / 255.0).collect()
    }
}
