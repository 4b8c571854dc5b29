//! RGB to grayscale conversion under selectable luminance formulas.
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::DenoiseError;

/// Luminance formula selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GrayscaleMethod {
    /// `(r + g + b) / 3`
    Average,
    /// ITU-R BT.601 luma: `0.299 r + 0.587 g + 0.114 b`
    Weighted,
    /// Mean of [`Average`](Self::Average) and [`Weighted`](Self::Weighted).
    ///
    /// Two historical variants existed (pure weighted vs. the blend); the
    /// blend is canonical here.
    Yuv,
}

#[inline]
fn luma(method: GrayscaleMethod, r: f32, g: f32, b: f32) -> f32 {
    match method {
        GrayscaleMethod::Average => (r + g + b) / 3.0,
        GrayscaleMethod::Weighted => 0.299 * r + 0.587 * g + 0.114 * b,
        GrayscaleMethod::Yuv => {
            let avg = (r + g + b) / 3.0;
            let weighted = 0.299 * r + 0.587 * g + 0.114 * b;
            (avg + weighted) / 2.0
        }
    }
}

/// Convert to a grayscale buffer of the same dimensions; every output pixel
/// has R == G == B. The result stays a convex combination of the inputs, so
/// no clamping or rounding happens here.
pub fn convert(
    buffer: &PixelBuffer,
    method: GrayscaleMethod,
) -> Result<PixelBuffer, DenoiseError> {
    buffer.ensure_shape()?;

    let pixels = buffer
        .pixels
        .iter()
        .map(|&[r, g, b]| {
            let gray = luma(method, r, g, b);
            [gray, gray, gray]
        })
        .collect();

    Ok(PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        pixels,
    })
}
