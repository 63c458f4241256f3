use std::path::Path;

use anyhow::{Context, Result};

use super::Image;

/// Decodes an image file into the RGBA8 form the rendering layer consumes.
///
/// Decoding happens on the calling thread and can be slow for large assets;
/// load at startup, not per frame.
pub fn load_image(path: impl AsRef<Path>) -> Result<Image> {
    let path = path.as_ref();

    let decoded = image::open(path)
        .with_context(|| format!("failed to decode image at {}", path.display()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels = bytemuck::cast_slice(rgba.as_raw()).to_vec();
    log::debug!("loaded image {} ({}x{})", path.display(), width, height);

    Ok(Image::from_pixels(width, height, pixels))
}
