#![doc = include_str!("../README.md")]

pub mod bounds;
pub mod buffer;
pub mod error;
pub mod grayscale;
pub mod io;
pub mod noise;
pub mod pipeline;
pub mod restore;

// --- High-level re-exports -------------------------------------------------

pub use crate::buffer::{is_impulse, PixelBuffer, Rgb};
pub use crate::error::DenoiseError;
pub use crate::grayscale::GrayscaleMethod;
pub use crate::noise::SaltPepperWeights;
pub use crate::pipeline::{DenoisePipeline, DenoiseReport, PipelineParams};
pub use crate::restore::{RestoreMethod, RestoreOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use impulse_denoise::prelude::*;
///
/// let input = PixelBuffer::filled(16, 16, 120.0);
/// let pipeline = DenoisePipeline::new(PipelineParams {
///     seed: Some(42),
///     ..Default::default()
/// });
/// let report = pipeline.run(&input).unwrap();
/// assert_eq!(report.restored.width, 16);
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::grayscale::GrayscaleMethod;
    pub use crate::noise::SaltPepperWeights;
    pub use crate::restore::{RestoreMethod, RestoreOptions};
    pub use crate::{DenoisePipeline, DenoiseReport, PipelineParams};
}
