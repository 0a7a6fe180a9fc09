//! Radial ripple shading for RGBA8 images.
//!
//! Each pixel's RGB is scaled by a damped sine of its distance from a configurable center,
//! leaving an untouched disk of `min_radius` around that center. The kernel is pure and
//! per-pixel, so whole-image passes can run serially or across a rayon pool.
//!
//! - Build a [`RippleConfig`] (or load one from JSON)
//! - Shade single pixels with [`ripple_pixel`]
//! - Shade whole buffers with [`apply_ripple`], [`apply_ripple_in_place`] or [`ripple_image`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod effects;
mod foundation;
mod render;

pub use crate::effects::ripple::{RippleConfig, ripple_pixel};
pub use crate::foundation::core::{ImageSize, Rgba8};
pub use crate::foundation::error::{RippleError, RippleResult};
pub use crate::foundation::math::{pack_unorm8, unpack_unorm8};
pub use crate::render::pass::{
    PassOpts, PassStats, apply_ripple, apply_ripple_cancellable, apply_ripple_in_place,
    ripple_image,
};
