use thiserror::Error;

use crate::restore::RestoreMethod;

/// Errors produced by the core pixel-processing stages.
///
/// Stages never retry and never log-and-mask: they either return a valid
/// buffer or one of these conditions for the caller to handle.
#[derive(Debug, Error)]
pub enum DenoiseError {
    /// Pixel count does not match `width * height`. Fatal to the stage;
    /// no partial processing is attempted.
    #[error("buffer shape mismatch: expected {expected} pixels, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A filter combination step produced a non-finite scalar, e.g. a
    /// contraharmonic mean with a zero denominator.
    #[error("{method:?} filter produced a non-finite value at pixel index {index}")]
    DegenerateComputation { index: usize, method: RestoreMethod },
}
