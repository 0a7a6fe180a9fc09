use super::*;

#[test]
fn unorm8_roundtrips_every_value() {
    for c in 0..=255u8 {
        assert_eq!(pack_unorm8(unpack_unorm8(c)), c);
    }
}

#[test]
fn pack_saturates_out_of_range() {
    assert_eq!(pack_unorm8(-0.5), 0);
    assert_eq!(pack_unorm8(1.5), 255);
    assert_eq!(pack_unorm8(f32::INFINITY), 255);
    assert_eq!(pack_unorm8(f32::NEG_INFINITY), 0);
    assert_eq!(pack_unorm8(f32::NAN), 0);
}

#[test]
fn pack_rounds_to_nearest() {
    assert_eq!(pack_unorm8(0.4 / 255.0), 0);
    assert_eq!(pack_unorm8(0.6 / 255.0), 1);
    assert_eq!(pack_unorm8(200.3 / 255.0), 200);
    assert_eq!(pack_unorm8(200.7 / 255.0), 201);
}

#[test]
fn quantize_breaks_ties_to_even() {
    assert_eq!(quantize_255(0.5), 0);
    assert_eq!(quantize_255(1.5), 2);
    assert_eq!(quantize_255(2.5), 2);
    assert_eq!(quantize_255(254.5), 254);
}
