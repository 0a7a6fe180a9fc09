use crate::foundation::error::{RippleError, RippleResult};

/// Straight (non-premultiplied) RGBA8 pixel, channel order R,G,B,A.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Construct from individual channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Read a pixel from an `[r, g, b, a]` array.
    pub const fn from_array(px: [u8; 4]) -> Self {
        Self {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
    }

    /// Pack into an `[r, g, b, a]` array.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Image dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl ImageSize {
    /// Create a size value. Zero dimensions are allowed and describe an empty image.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels.
    pub fn pixel_count(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Bytes in one tightly packed RGBA8 row.
    pub fn row_stride(self) -> RippleResult<usize> {
        (self.width as usize)
            .checked_mul(4)
            .ok_or_else(|| RippleError::evaluation("rgba8 row stride overflow"))
    }

    /// Bytes in a tightly packed RGBA8 buffer of this size.
    pub fn rgba8_len(self) -> RippleResult<usize> {
        self.row_stride()?
            .checked_mul(self.height as usize)
            .ok_or_else(|| RippleError::evaluation("rgba8 buffer size overflow"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
