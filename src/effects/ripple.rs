//! Radial damped-sine shading.
//!
//! Every pixel is handled independently: its distance from the configured center picks a
//! brightness multiplier, and the RGB channels are scaled by it. Pixels inside `min_radius` are
//! copied through untouched.

use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::{ImageSize, Rgba8};
use crate::foundation::error::{RippleError, RippleResult};
use crate::foundation::math::{pack_unorm8, unpack_unorm8};

/// Parameters shared by every pixel of one pass.
///
/// Values are used as given; nonsensical inputs (negative frequency, negative damper) still
/// produce well-defined output thanks to channel clamping.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RippleConfig {
    /// Ripple origin, x in pixel coordinates.
    pub center_x: f32,
    /// Ripple origin, y in pixel coordinates.
    pub center_y: f32,
    /// Radius of the untouched disk around the origin.
    pub min_radius: f32,
    /// Peak deviation of the multiplier from 1.
    pub scalar: f32,
    /// Exponential decay rate with distance; larger values confine the bands near `min_radius`.
    pub damper: f32,
    /// Spatial frequency in radians per pixel; one band spans `2π / frequency` pixels.
    pub frequency: f32,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            min_radius: 0.0,
            scalar: 0.75,
            damper: 0.002,
            frequency: 0.075,
        }
    }
}

impl RippleConfig {
    /// Same parameters, origin moved to the middle of an image of `size`.
    pub fn centered_on(self, size: ImageSize) -> Self {
        Self {
            center_x: size.width as f32 / 2.0,
            center_y: size.height as f32 / 2.0,
            ..self
        }
    }

    /// Parse a config from JSON. Missing keys keep their [`Default`] values.
    pub fn from_json_str(json: &str) -> RippleResult<Self> {
        serde_json::from_str(json).map_err(|e| RippleError::serde(format!("ripple config: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_path(path: &Path) -> RippleResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read ripple config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Euclidean distance from the origin to pixel `(x, y)`.
    pub fn radius_at(&self, x: u32, y: u32) -> f32 {
        let dx = x as f32 - self.center_x;
        let dy = y as f32 - self.center_y;
        (dx * dx + dy * dy).sqrt()
    }

    /// RGB multiplier at `shifted_radius = radius - min_radius`.
    ///
    /// Exactly 1 at `shifted_radius == 0`, which keeps the dead-zone edge seamless.
    pub fn multiplier(&self, shifted_radius: f32) -> f32 {
        let envelope = (-shifted_radius * self.damper).exp();
        let wave = -(shifted_radius * self.frequency).sin();
        self.scalar * envelope * wave + 1.0
    }
}

/// Shade one pixel at `(x, y)`.
///
/// Alpha always passes through; RGB is scaled by [`RippleConfig::multiplier`] and saturated.
pub fn ripple_pixel(config: &RippleConfig, px: Rgba8, x: u32, y: u32) -> Rgba8 {
    let radius = config.radius_at(x, y);
    if radius < config.min_radius {
        return px;
    }

    let m = config.multiplier(radius - config.min_radius);
    let scale = |c: u8| pack_unorm8(unpack_unorm8(c) * m);
    Rgba8 {
        r: scale(px.r),
        g: scale(px.g),
        b: scale(px.b),
        a: px.a,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/ripple.rs"]
mod tests;
