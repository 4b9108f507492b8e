//! Assertion helpers for tests.

use std::path::Path;

use pretty_assertions::assert_eq;

use super::app::CliOutput;
use super::fixtures::read_pixels;

/// Assert the binary exited 0
pub fn assert_success(output: &CliOutput) {
    assert_eq!(
        output.code,
        Some(0),
        "Expected success. stdout: {} stderr: {}",
        output.stdout,
        output.stderr
    );
}

/// Assert the binary failed and its diagnostic mentions `needle`
pub fn assert_failure_mentions(output: &CliOutput, needle: &str) {
    assert!(
        !output.success(),
        "Expected failure. stdout: {}",
        output.stdout
    );
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to mention '{}', got: {}",
        needle,
        output.stderr
    );
}

/// Assert every pixel of the image at `path` is one of `palette`
pub fn assert_palette_closed(path: &Path, palette: &[[u8; 3]]) {
    let (_, _, pixels) = read_pixels(path);
    for (i, px) in pixels.iter().enumerate() {
        assert!(
            palette.contains(px),
            "Pixel {} is {:?}, not in palette {:?}",
            i,
            px,
            palette
        );
    }
}

/// Assert the image at `path` has the given size
pub fn assert_dimensions(path: &Path, width: u32, height: u32) {
    let (w, h, _) = read_pixels(path);
    assert_eq!((w, h), (width, height), "Unexpected dimensions for {:?}", path);
}

/// Parse a hex palette into byte triples for comparisons
pub fn rgb_list(hex: &[&str]) -> Vec<[u8; 3]> {
    hex.iter()
        .map(|h| {
            let c: clr_dither::Rgb = h.parse().expect("Bad hex in test palette");
            c.to_bytes()
        })
        .collect()
}
