//! Library-level tests of the settings → pipeline path.

mod common;

use clr_dither::DitherAlgorithm;
use common::fixtures::{palettes, read_pixels, write_gradient, write_solid};
use common::*;
use imgclr::error::ClrError;
use imgclr::models::{AppConfig, OutputFormat, Overrides, Settings};
use imgclr::services;
use pretty_assertions::assert_eq;

fn overrides(palette: &[&str], dither: &str) -> Overrides {
    Overrides {
        palette: palette.iter().map(|s| s.to_string()).collect(),
        dither: Some(dither.to_string()),
        ..Overrides::default()
    }
}

#[test]
fn test_pipeline_is_deterministic() {
    let ws = TestWorkspace::new();
    write_gradient(&ws.path("in.png"), 20, 10);

    for (i, algo) in DitherAlgorithm::ALL.iter().enumerate() {
        let a = ws.path(&format!("a{i}.png"));
        let b = ws.path(&format!("b{i}.png"));
        for out in [&a, &b] {
            let settings = Settings::resolve(
                ws.path("in.png"),
                out.clone(),
                overrides(&palettes::TOMORROW, algo.name()),
                &AppConfig::default(),
            )
            .unwrap();
            services::run(&settings).unwrap();
        }
        assert_eq!(read_pixels(&a), read_pixels(&b), "{algo}");
    }
}

#[test]
fn test_none_output_is_a_fixed_point() {
    let ws = TestWorkspace::new();
    write_gradient(&ws.path("in.png"), 9, 9);

    let first = Settings::resolve(
        ws.path("in.png"),
        ws.path("once.png"),
        overrides(&palettes::TOMORROW, "none"),
        &AppConfig::default(),
    )
    .unwrap();
    services::run(&first).unwrap();

    let second = Settings::resolve(
        ws.path("once.png"),
        ws.path("twice.png"),
        overrides(&palettes::TOMORROW, "none"),
        &AppConfig::default(),
    )
    .unwrap();
    services::run(&second).unwrap();

    assert_eq!(read_pixels(&ws.path("once.png")), read_pixels(&ws.path("twice.png")));
}

#[test]
fn test_config_quality_and_invert_are_applied() {
    let ws = TestWorkspace::new();
    write_solid(&ws.path("in.png"), 4, 4, [30, 30, 30]);
    let config = AppConfig::from_yaml("invert: true\njpeg_quality: 75\n").unwrap();

    let settings = Settings::resolve(
        ws.path("in.png"),
        ws.path("out.bmp"),
        overrides(&palettes::BLACK_WHITE, "none"),
        &config,
    )
    .unwrap();
    assert_eq!(settings.format, OutputFormat::Bmp);
    assert_eq!(settings.jpeg_quality, 75);
    assert!(settings.invert);

    let processed = services::run(&settings).unwrap();
    assert_eq!((processed.width, processed.height), (4, 4));
    assert_palette_closed(&ws.path("out.bmp"), &[[255, 255, 255]]);
}

#[test]
fn test_decode_error_leaves_no_output() {
    let ws = TestWorkspace::new();
    ws.write_file("in.png", "garbage");

    let settings = Settings::resolve(
        ws.path("in.png"),
        ws.path("out.png"),
        overrides(&palettes::BLACK_WHITE, "floyd-steinberg"),
        &AppConfig::default(),
    )
    .unwrap();
    let err = services::run(&settings).unwrap_err();

    assert!(matches!(err, ClrError::Decode { .. }));
    assert!(!ws.path("out.png").exists());
}
