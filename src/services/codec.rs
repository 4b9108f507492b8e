//! Image file boundary: decode any supported file into an [`RgbImage`],
//! encode an [`RgbImage`] by output format.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use clr_dither::RgbImage;
use image::codecs::bmp::BmpEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, ImageReader};

use crate::error::ClrError;
use crate::models::OutputFormat;

/// Decode `path` to 8-bit RGB. Alpha is dropped and deeper samples are
/// narrowed to 8 bits.
pub fn decode(path: &Path) -> Result<RgbImage, ClrError> {
    let io_err = |source| ClrError::Io {
        path: path.to_path_buf(),
        source,
    };
    let decode_err = |reason: String| ClrError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let reader = ImageReader::open(path)
        .map_err(io_err)?
        .with_guessed_format()
        .map_err(io_err)?;
    let format = reader.format();
    let decoded = reader.decode().map_err(|e| decode_err(e.to_string()))?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    let image = RgbImage::from_raw(width as usize, height as usize, rgb.into_raw())
        .map_err(|e| decode_err(e.to_string()))?;

    tracing::info!(
        path = %path.display(),
        format = ?format,
        width,
        height,
        "Decoded input"
    );
    Ok(image)
}

/// Encode `image` into memory, then write it to `path`.
///
/// The bytes go to a sibling staging file first, which is renamed over
/// `path` once complete. An encoder failure never touches the filesystem,
/// and a failed write or rename removes only the staging file, so an
/// existing file at `path` is either fully replaced or left as it was.
pub fn encode(
    image: &RgbImage,
    path: &Path,
    format: OutputFormat,
    jpeg_quality: u8,
) -> Result<(), ClrError> {
    let encode_err = |reason: String| ClrError::Encode {
        path: path.to_path_buf(),
        reason,
    };

    let width = u32::try_from(image.width()).map_err(|e| encode_err(e.to_string()))?;
    let height = u32::try_from(image.height()).map_err(|e| encode_err(e.to_string()))?;
    let pixels = image.as_bytes();

    let mut buf = Vec::new();
    let encoded = match format {
        OutputFormat::Jpeg => JpegEncoder::new_with_quality(&mut buf, jpeg_quality).write_image(
            pixels,
            width,
            height,
            ExtendedColorType::Rgb8,
        ),
        OutputFormat::Png => {
            PngEncoder::new(&mut buf).write_image(pixels, width, height, ExtendedColorType::Rgb8)
        }
        OutputFormat::Bmp => {
            BmpEncoder::new(&mut buf).write_image(pixels, width, height, ExtendedColorType::Rgb8)
        }
    };
    encoded.map_err(|e| encode_err(e.to_string()))?;

    let staging = staging_path(path);
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&staging)
        .map_err(|e| encode_err(e.to_string()))?;

    let written = file
        .write_all(&buf)
        .and_then(|()| file.sync_all())
        .and_then(|()| fs::rename(&staging, path));
    if let Err(e) = written {
        drop(file);
        if let Err(cleanup) = fs::remove_file(&staging) {
            tracing::debug!(path = %staging.display(), %cleanup, "Could not remove staging file");
        }
        return Err(encode_err(e.to_string()));
    }

    tracing::info!(
        path = %path.display(),
        %format,
        bytes = buf.len(),
        "Wrote output"
    );
    Ok(())
}

/// Hidden sibling of `path` that output is staged in before the rename.
fn staging_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.imgclr-part"))
}
