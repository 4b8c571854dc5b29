use impulse_denoise::PixelBuffer;

/// Horizontal RGB gradient with channel values strictly inside (0, 255), so
/// the clean image contains no pixel the impulse predicate would flag.
pub fn gradient_rgb(width: usize, height: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut pixels = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let r = 1.0 + 200.0 * (col as f32 / width as f32);
            let g = 1.0 + 200.0 * (row as f32 / height as f32);
            let b = 128.0;
            pixels.push([r, g, b]);
        }
    }
    PixelBuffer::from_pixels(width, height, pixels).expect("gradient buffer shape")
}
