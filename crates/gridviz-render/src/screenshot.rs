//! Screenshot functionality for capturing rendered frames.

use image::{DynamicImage, ImageBuffer, ImageFormat, Rgba};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::{RenderError, RenderResult};

/// Picks the output format from a file extension.
///
/// Supports png, jpg/jpeg, bmp and tif/tiff (case-insensitive). A path
/// without an extension is written as PNG.
pub fn image_format_for(path: &Path) -> RenderResult<ImageFormat> {
    let Some(extension) = path.extension() else {
        return Ok(ImageFormat::Png);
    };
    let extension = extension.to_string_lossy().to_lowercase();

    match extension.as_str() {
        "png" => Ok(ImageFormat::Png),
        "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
        "bmp" => Ok(ImageFormat::Bmp),
        "tif" | "tiff" => Ok(ImageFormat::Tiff),
        _ => Err(RenderError::UnsupportedFormat(extension)),
    }
}

/// Encodes raw RGBA pixel data in memory.
///
/// # Arguments
/// * `data` - Raw RGBA pixel data (4 bytes per pixel, rows from the top)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `format` - Output format
pub fn encode_image(
    data: &[u8],
    width: u32,
    height: u32,
    format: ImageFormat,
) -> RenderResult<Vec<u8>> {
    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or(RenderError::InvalidImageData)?;

    let mut buffer = Cursor::new(Vec::new());
    if format == ImageFormat::Png {
        img.write_to(&mut buffer, format)?;
    } else {
        // Convert to RGB for formats without (or with poor) alpha support
        DynamicImage::ImageRgba8(img)
            .to_rgb8()
            .write_to(&mut buffer, format)?;
    }
    Ok(buffer.into_inner())
}

/// Saves raw RGBA pixel data to an image file.
///
/// The image is encoded first, written to a hidden temporary file in the
/// target directory and then renamed over `path`, so a failed call never
/// leaves a partial image behind. An existing file is replaced.
///
/// # Errors
/// Returns an error if the format is unsupported, encoding fails or the file
/// cannot be written.
pub fn save_image(path: &Path, data: &[u8], width: u32, height: u32) -> RenderResult<()> {
    let format = image_format_for(path)?;
    let bytes = encode_image(data, width, height, format)?;

    let temp = temp_path(path);
    if let Err(e) = fs::write(&temp, &bytes).and_then(|()| fs::rename(&temp, path)) {
        // best effort; the original error is what matters
        let _ = fs::remove_file(&temp);
        return Err(e.into());
    }

    log::debug!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
