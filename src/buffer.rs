//! Owned RGB pixel buffer in row-major layout.
//!
//! Channels are stored as floats in [0, 255] so that intermediate filter
//! results (e.g. a weighted luma of 140.75) survive the pipeline unrounded.
//! Quantization to integer bytes happens only at the render boundary in
//! [`crate::io`].
use crate::error::DenoiseError;

/// One RGB pixel; channels in [0, 255].
pub type Rgb = [f32; 3];

/// Pure white, written by the salt branch of the injector.
pub const SALT: Rgb = [255.0, 255.0, 255.0];
/// Pure black, written by the pepper branch of the injector.
pub const PEPPER: Rgb = [0.0, 0.0, 0.0];

#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Backing storage in row-major order (`index = row * width + col`)
    pub pixels: Vec<Rgb>,
}

impl PixelBuffer {
    /// Construct a zero-initialized (all-black) buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![PEPPER; width * height],
        }
    }

    /// Construct from existing pixels, validating the shape invariant.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Rgb>,
    ) -> Result<Self, DenoiseError> {
        if pixels.len() != width * height {
            return Err(DenoiseError::ShapeMismatch {
                expected: width * height,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Uniform-value buffer, every channel set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[value, value, value]; width * height],
        }
    }

    #[inline]
    /// Convert (row, col) to a linear index into `pixels`.
    pub fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    #[inline]
    /// Get the pixel at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Rgb {
        self.pixels[self.idx(row, col)]
    }

    /// Check `pixels.len() == width * height`. Every stage calls this at its
    /// boundary before touching the data.
    pub fn ensure_shape(&self) -> Result<(), DenoiseError> {
        let expected = self.width * self.height;
        if self.pixels.len() != expected {
            return Err(DenoiseError::ShapeMismatch {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }
}

/// A pixel counts as impulse noise iff it is exactly pure black or pure
/// white. Derived from the value on demand, never stored — the filters only
/// inspect channel 0 since upstream stages produce equal channels.
///
/// A genuinely black/white pixel in the original image is indistinguishable
/// from noise and will be recomputed; accepted limitation of the scheme.
#[inline]
pub fn is_impulse(pixel: &Rgb) -> bool {
    pixel[0] == 0.0 || pixel[0] == 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_rejects_shape_mismatch() {
        let err = PixelBuffer::from_pixels(3, 2, vec![PEPPER; 5]).unwrap_err();
        assert!(matches!(
            err,
            DenoiseError::ShapeMismatch {
                expected: 6,
                actual: 5
            }
        ));
    }

    #[test]
    fn impulse_predicate_matches_extremes_only() {
        assert!(is_impulse(&SALT));
        assert!(is_impulse(&PEPPER));
        assert!(!is_impulse(&[254.0, 254.0, 254.0]));
        assert!(!is_impulse(&[0.5, 0.5, 0.5]));
        assert!(!is_impulse(&[127.0, 127.0, 127.0]));
    }

    #[test]
    fn idx_is_row_major() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.idx(0, 0), 0);
        assert_eq!(buf.idx(1, 0), 4);
        assert_eq!(buf.idx(2, 3), 11);
    }
}
