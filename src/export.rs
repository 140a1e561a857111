use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::ImageOutputFormat;
use image::imageops::{self, FilterType};
use tracing::info;

use crate::error::IconError;
use crate::icon::Canvas;

/// Largest edge an ICO directory entry can declare.
pub const MAX_ICO_SIZE: u32 = 256;

fn ensure_parent(path: &Path) -> Result<(), IconError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| IconError::io(parent, e))
        }
        _ => Ok(()),
    }
}

/// Writes `canvas` unchanged as a PNG.
pub fn export_raster(canvas: &Canvas, png_path: &Path) -> Result<(), IconError> {
    ensure_parent(png_path)?;
    let file = fs::File::create(png_path).map_err(|e| IconError::io(png_path, e))?;
    let mut writer = BufWriter::new(file);
    canvas.write_to(&mut writer, ImageOutputFormat::Png)?;
    writer.flush().map_err(|e| IconError::io(png_path, e))?;

    info!(
        path = %png_path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote png"
    );
    Ok(())
}

/// Lanczos3 copy of `canvas` at `size` x `size`; same-size requests are
/// copied untouched.
pub fn resample(canvas: &Canvas, size: u32) -> Canvas {
    if canvas.dimensions() == (size, size) {
        canvas.clone()
    } else {
        imageops::resize(canvas, size, size, FilterType::Lanczos3)
    }
}

/// Builds the ICO directory, one entry per size in the given order.
pub fn build_icon_dir(canvas: &Canvas, sizes: &[u32]) -> Result<IconDir, IconError> {
    if let Some(&bad) = sizes.iter().find(|&&s| s == 0 || s > MAX_ICO_SIZE) {
        return Err(IconError::UnsupportedIconSize(bad));
    }

    let mut dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let resized = resample(canvas, size);
        let image = IconImage::from_rgba_data(size, size, resized.into_raw());
        let entry = IconDirEntry::encode(&image).map_err(IconError::IcoEncode)?;
        dir.add_entry(entry);
    }
    Ok(dir)
}

/// Resamples `canvas` to every entry of `sizes` and writes them as one ICO.
/// The first size becomes the primary directory entry.
pub fn export_icon_container(
    canvas: &Canvas,
    sizes: &[u32],
    ico_path: &Path,
) -> Result<(), IconError> {
    let dir = build_icon_dir(canvas, sizes)?;
    write_icon_dir(&dir, ico_path)?;

    info!(path = %ico_path.display(), ?sizes, "wrote ico");
    Ok(())
}

fn write_icon_dir(dir: &IconDir, ico_path: &Path) -> Result<(), IconError> {
    ensure_parent(ico_path)?;
    let write = || -> io::Result<()> {
        let mut writer = BufWriter::new(fs::File::create(ico_path)?);
        dir.write(&mut writer)?;
        writer.flush()
    };
    write().map_err(|e| IconError::io(ico_path, e))
}
