use std::path::Path;

use anyhow::{Context, Result};
use ck_core::error::CoreError;
use ck_core::frame::PixelBuffer;

/// A decoded image ready for sampling.
pub struct LoadedImage {
    /// RGBA pixels, frozen for the lifetime of the load.
    pub buffer: PixelBuffer,
    /// File name for display (no directory).
    pub name: String,
}

/// Decode an image file into a [`PixelBuffer`].
///
/// Any format the `image` crate's enabled features cover (PNG, JPEG, BMP,
/// GIF); pixels are converted to RGBA8. Zero-sized images are rejected up
/// front — the sampler has no rows or columns to scan.
///
/// # Errors
/// Returns an error if the file cannot be opened or decoded, or if the
/// decoded image has a zero dimension.
///
/// # Example
/// ```no_run
/// use ck_source::load_image;
/// let loaded = load_image(std::path::Path::new("curve.png")).unwrap();
/// assert!(loaded.buffer.width > 0);
/// ```
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path).with_context(|| format!("cannot load {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height }.into());
    }

    log::info!("loaded {} ({width}×{height})", path.display());

    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

    Ok(LoadedImage {
        buffer: PixelBuffer::from_raw(width, height, rgba.into_raw()),
        name,
    })
}
