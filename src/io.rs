//! Collaborator boundary: RGBA bytes in, RGBA bytes out, plus file helpers.
//!
//! - `from_rgba_bytes` / `to_rgba_bytes`: the decode/render contracts. Alpha
//!   is dropped on the way in and reinserted as a constant 255 on the way
//!   out; channel floats are rounded and clamped to [0, 255] only here, at
//!   the render boundary.
//! - `load_rgb_image` / `save_rgb_image`: PNG/JPEG/etc. via the `image`
//!   crate.
//! - `write_json_file`: pretty-print a serializable value to disk.
use image::{ImageBuffer, Rgba, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::buffer::PixelBuffer;
use crate::error::DenoiseError;

/// Build a buffer from raw RGBA bytes, dropping every 4th (alpha) byte and
/// preserving row-major order.
pub fn from_rgba_bytes(
    width: usize,
    height: usize,
    bytes: &[u8],
) -> Result<PixelBuffer, DenoiseError> {
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| [px[0] as f32, px[1] as f32, px[2] as f32])
        .collect();
    PixelBuffer::from_pixels(width, height, pixels)
}

/// Reconstruct an RGBA byte sequence with constant 255 alpha after every
/// triple, rounding channels to integer bytes.
pub fn to_rgba_bytes(buffer: &PixelBuffer) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(buffer.pixels.len() * 4);
    for px in &buffer.pixels {
        for c in px {
            bytes.push(c.round().clamp(0.0, 255.0) as u8);
        }
        bytes.push(255);
    }
    bytes
}

/// Load an image from disk and convert to a `PixelBuffer`.
pub fn load_rgb_image(path: &Path) -> Result<PixelBuffer, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_rgba8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    from_rgba_bytes(width, height, &img.into_raw())
        .map_err(|e| format!("Failed to decode {}: {e}", path.display()))
}

/// Save a `PixelBuffer` to an image file.
pub fn save_rgb_image(buffer: &PixelBuffer, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let bytes = to_rgba_bytes(buffer);
    let img: RgbaImage =
        ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(buffer.width as u32, buffer.height as u32, bytes)
            .ok_or_else(|| "Failed to create image buffer".to_string())?;
    img.save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
