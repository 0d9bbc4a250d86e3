use std::path::Path;

use crate::{
    foundation::error::{MeshError, MeshResult},
    render::raster::Raster,
};

/// Encode the raster as an RGB8 PNG in memory.
pub fn encode_png(raster: &Raster) -> MeshResult<Vec<u8>> {
    let img = image::RgbImage::from_raw(raster.width(), raster.height(), raster.to_rgb8())
        .ok_or_else(|| MeshError::encode("raster buffer does not match its dimensions"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .map_err(|e| MeshError::encode(format!("png: {e}")))?;
    Ok(bytes)
}

/// Write the raster as an RGB8 PNG, creating the parent directory if needed.
pub fn write_png(raster: &Raster, path: &Path) -> MeshResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            MeshError::encode(format!("create output dir '{}': {e}", parent.display()))
        })?;
    }

    image::save_buffer_with_format(
        path,
        &raster.to_rgb8(),
        raster.width(),
        raster.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| MeshError::encode(format!("write png '{}': {e}", path.display())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
