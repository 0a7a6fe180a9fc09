use super::*;

#[test]
fn rgba8_array_order_is_rgba() {
    let px = Rgba8::from_array([1, 2, 3, 4]);
    assert_eq!(px, Rgba8::new(1, 2, 3, 4));
    assert_eq!(px.to_array(), [1, 2, 3, 4]);
}

#[test]
fn rgba8_len_matches_width_height_4() {
    let size = ImageSize::new(7, 3);
    assert_eq!(size.row_stride().unwrap(), 28);
    assert_eq!(size.rgba8_len().unwrap(), 84);
    assert_eq!(size.pixel_count(), 21);
}

#[test]
fn empty_sizes_are_zero_length() {
    assert_eq!(ImageSize::new(0, 10).rgba8_len().unwrap(), 0);
    assert_eq!(ImageSize::new(10, 0).rgba8_len().unwrap(), 0);
}
