//! Synthetic salt-and-pepper (impulse) noise injection.
//!
//! Per-pixel Bernoulli process in buffer order: a first uniform draw below
//! `salt` turns the pixel pure white, otherwise a second draw below `pepper`
//! turns it pure black, otherwise the pixel passes through unchanged. Exactly
//! one or two draws are consumed per pixel, so a seeded run is reproducible.
//! Expected salt fraction ≈ `salt`, pepper fraction ≈ `(1 - salt) * pepper`.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, PEPPER, SALT};
use crate::error::DenoiseError;

/// Independent per-pixel corruption probabilities, each in [0, 1].
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SaltPepperWeights {
    pub salt: f32,
    pub pepper: f32,
}

impl Default for SaltPepperWeights {
    fn default() -> Self {
        Self {
            salt: 0.06,
            pepper: 0.06,
        }
    }
}

/// Inject impulse noise using the caller's random source. Draw order is
/// sequential in buffer order; callers that parallelize the surrounding
/// pipeline must keep a dedicated RNG per invocation.
pub fn inject<R: Rng>(
    buffer: &PixelBuffer,
    weights: SaltPepperWeights,
    rng: &mut R,
) -> Result<PixelBuffer, DenoiseError> {
    buffer.ensure_shape()?;

    let pixels = buffer
        .pixels
        .iter()
        .map(|&pixel| {
            if rng.random::<f32>() < weights.salt {
                SALT
            } else if rng.random::<f32>() < weights.pepper {
                PEPPER
            } else {
                pixel
            }
        })
        .collect();

    Ok(PixelBuffer {
        width: buffer.width,
        height: buffer.height,
        pixels,
    })
}

/// Inject with a ChaCha8 stream: deterministic when `seed` is given, OS
/// entropy otherwise.
pub fn inject_seeded(
    buffer: &PixelBuffer,
    weights: SaltPepperWeights,
    seed: Option<u64>,
) -> Result<PixelBuffer, DenoiseError> {
    let mut rng: ChaCha8Rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    };
    inject(buffer, weights, &mut rng)
}
