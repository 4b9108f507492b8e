//! Test fixtures and constants.

use std::path::Path;

use image::{ImageBuffer, Rgb};

/// Palettes used across tests
pub mod palettes {
    pub const BLACK_WHITE: [&str; 2] = ["000000", "ffffff"];

    /// Five-colour Tomorrow Night scheme
    pub const TOMORROW: [&str; 5] = ["1d1f21", "cc6666", "b5bd68", "81a2be", "c5c8c6"];
}

/// Config file with a default palette and two named schemes
pub const CONFIG_YAML: &str = r##"
dither: atkinson
jpeg_quality: 90
palette: ["000000", "ffffff"]
schemes:
  tomorrow: ["1d1f21", "cc6666", "b5bd68", "81a2be", "c5c8c6"]
  primaries: ["#f00", "#0f0", "#00f", "#000", "#fff"]
"##;

/// Write a uniform image; the extension picks the format.
pub fn write_solid(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    ImageBuffer::from_pixel(width, height, Rgb(color))
        .save(path)
        .expect("Failed to write solid fixture");
}

/// Write a horizontal grey ramp with a coloured tint per row.
pub fn write_gradient(path: &Path, width: u32, height: u32) {
    let image = ImageBuffer::from_fn(width, height, |x, y| {
        let t = (x * 255 / (width - 1).max(1)) as u8;
        let tint = (y * 255 / (height - 1).max(1)) as u8;
        Rgb([t, t / 2 + tint / 2, 255 - t])
    });
    image.save(path).expect("Failed to write gradient fixture");
}

/// Write raw pixels, row-major.
pub fn write_pixels(path: &Path, width: u32, height: u32, pixels: &[[u8; 3]]) {
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, raw).expect("Pixel count does not match size");
    image.save(path).expect("Failed to write pixel fixture");
}

/// Decode a file to `(width, height, pixels)`.
pub fn read_pixels(path: &Path) -> (u32, u32, Vec<[u8; 3]>) {
    let image = image::ImageReader::open(path)
        .and_then(|r| r.with_guessed_format())
        .expect("Failed to open output")
        .decode()
        .expect("Failed to decode output")
        .to_rgb8();
    let (w, h) = image.dimensions();
    let pixels = image.pixels().map(|p| p.0).collect();
    (w, h, pixels)
}
