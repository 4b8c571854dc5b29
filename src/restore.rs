//! Neighborhood-statistics restoration of impulse-noise pixels.
//!
//! A pixel is recomputed only when the impulse predicate flags it (exact 0 or
//! 255); everything else passes through untouched, so a clean buffer maps to
//! itself. For a flagged pixel at (r, c) the filter gathers the
//! `(2k+1)² − 1` neighbors of the square window of radius `k` (center
//! excluded), resolving each coordinate through replicate-border clamping,
//! and combines them according to the selected mean. The combined scalar is
//! broadcast to all three channels.
//!
//! Degenerate cases are propagated, never masked: a contraharmonic mean with
//! a zero denominator comes back as `DegenerateComputation`. A harmonic mean
//! over a window containing a zero neighbor (a pixel that is itself noise)
//! collapses to 0.0 through the infinite reciprocal sum — an inherited
//! property of the scheme, left intact.
//!
//! Rows are evaluated in parallel; each output row reads only the immutable
//! input, so no coordination is needed beyond the final join.
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::bounds::clamped_offset;
use crate::buffer::{is_impulse, PixelBuffer, Rgb};
use crate::error::DenoiseError;

/// Mean-filter selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RestoreMethod {
    /// Arithmetic mean of the neighbor values.
    Arithmetic,
    /// `n / Σ(1/v)` over the `n` neighbors.
    Harmonic,
    /// Product of the neighbors raised to `1 / (2k+1)²`, the full window
    /// cell count.
    Geometric,
    /// `Σ v^(Q+1) / Σ v^Q`; suppresses pepper for Q < 0, salt for Q > 0.
    Contraharmonic,
}

/// Window radius and contraharmonic exponent.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreOptions {
    /// Neighborhood radius `k`; the window spans `(2k+1)²` cells.
    pub radius: usize,
    /// Contraharmonic exponent Q; ignored by the other methods.
    pub q: f32,
}

impl Default for RestoreOptions {
    fn default() -> Self {
        Self {
            radius: 1,
            q: -1.5,
        }
    }
}

/// Restore impulse pixels of a grayscale-shaped buffer. Output has the same
/// dimensions; non-impulse pixels are copied verbatim.
pub fn restore(
    buffer: &PixelBuffer,
    method: RestoreMethod,
    options: RestoreOptions,
) -> Result<PixelBuffer, DenoiseError> {
    buffer.ensure_shape()?;

    let width = buffer.width;
    let rows: Vec<Vec<Rgb>> = (0..buffer.height)
        .into_par_iter()
        .map(|row| restore_row(buffer, row, method, options))
        .collect::<Result<_, _>>()?;

    let mut pixels = Vec::with_capacity(width * buffer.height);
    for row in rows {
        pixels.extend_from_slice(&row);
    }

    Ok(PixelBuffer {
        width,
        height: buffer.height,
        pixels,
    })
}

fn restore_row(
    buffer: &PixelBuffer,
    row: usize,
    method: RestoreMethod,
    options: RestoreOptions,
) -> Result<Vec<Rgb>, DenoiseError> {
    let mut out = Vec::with_capacity(buffer.width);
    for col in 0..buffer.width {
        let index = buffer.idx(row, col);
        let pixel = buffer.pixels[index];
        if !is_impulse(&pixel) {
            out.push(pixel);
            continue;
        }
        let value = combine(buffer, row, col, method, options);
        if !value.is_finite() {
            return Err(DenoiseError::DegenerateComputation { index, method });
        }
        out.push([value, value, value]);
    }
    Ok(out)
}

/// Gather the clamped window around (row, col) and fold it into a single
/// scalar. The center cell is excluded; clamping may make a border neighbor
/// coincide with the center, in which case it still contributes.
fn combine(
    buffer: &PixelBuffer,
    row: usize,
    col: usize,
    method: RestoreMethod,
    options: RestoreOptions,
) -> f32 {
    let k = options.radius as isize;
    let window_cells = {
        let side = 2 * options.radius + 1;
        (side * side) as f32
    };

    let mut sum = 0.0f32;
    let mut sum1 = 0.0f32;
    let mut count = 0.0f32;

    for a in -k..=k {
        for b in -k..=k {
            if a == 0 && b == 0 {
                continue;
            }
            let offset = clamped_offset(
                row as isize + a,
                col as isize + b,
                buffer.width,
                buffer.height,
            );
            // Clamping guarantees a valid offset; tolerate a stray one
            // instead of corrupting the fold.
            debug_assert!(offset < buffer.pixels.len());
            let Some(neighbor) = buffer.pixels.get(offset) else {
                continue;
            };
            let gray = neighbor[0];
            match method {
                RestoreMethod::Arithmetic => sum += gray,
                RestoreMethod::Harmonic => sum += 1.0 / gray,
                RestoreMethod::Geometric => sum += gray.ln(),
                RestoreMethod::Contraharmonic => {
                    sum += gray.powf(options.q);
                    sum1 += gray.powf(options.q + 1.0);
                }
            }
            count += 1.0;
        }
    }

    match method {
        RestoreMethod::Arithmetic => sum / count,
        RestoreMethod::Harmonic => count / sum,
        RestoreMethod::Geometric => (sum / window_cells).exp(),
        RestoreMethod::Contraharmonic => sum1 / sum,
    }
}
