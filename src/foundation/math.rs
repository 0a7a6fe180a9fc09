/// Decode an 8-bit channel into `[0, 1]`.
pub fn unpack_unorm8(c: u8) -> f32 {
    f32::from(c) / 255.0
}

/// Encode a `[0, 1]` channel value into 8 bits.
///
/// Out-of-range values saturate, rounding is half-to-even and NaN maps to 0.
pub fn pack_unorm8(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    quantize_255(v.clamp(0.0, 1.0) * 255.0)
}

fn quantize_255(scaled: f32) -> u8 {
    scaled.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
