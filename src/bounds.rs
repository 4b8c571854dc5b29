//! Coordinate-to-offset mapping with replicate-border clamping.
//!
//! Every neighborhood filter resolves window coordinates through this module,
//! so a lookup never leaves the buffer. Rows clamp against `height` and
//! columns against `width`, consistently at all four borders.

/// Clamp `value` into `[min, max]`. Total; no error cases.
#[inline]
pub fn clamp(value: isize, min: isize, max: isize) -> isize {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Row-major linear offset. Caller must pre-clamp `row` and `col`.
#[inline]
pub fn to_offset(row: usize, col: usize, width: usize) -> usize {
    row * width + col
}

/// Clamp possibly-out-of-range signed coordinates to the buffer bounds and
/// linearize. Returns a valid offset for any input as long as the buffer is
/// non-empty.
#[inline]
pub fn clamped_offset(row: isize, col: isize, width: usize, height: usize) -> usize {
    let r = clamp(row, 0, height as isize - 1) as usize;
    let c = clamp(col, 0, width as isize - 1) as usize;
    to_offset(r, c, width)
}
