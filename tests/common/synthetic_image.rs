/// Generates a flat image where every pixel carries `value`.
pub fn uniform_u8(width: usize, height: usize, value: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![value; width * height]
}

/// Generates a row-major ramp `0, 1, 2, ...` wrapping at 256.
pub fn ramp_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    (0..width * height).map(|i| (i % 256) as u8).collect()
}
