//! Resolution of command-line flags and config defaults into one validated
//! set of processing settings.

use std::path::PathBuf;

use clr_dither::{DitherAlgorithm, Palette};

use super::{AppConfig, OutputFormat};
use crate::error::ClrError;

/// Minimum number of palette entries accepted from the user.
pub const MIN_PALETTE_COLOURS: usize = 2;

/// Values given on the command line. `None`/empty means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub palette: Vec<String>,
    pub scheme: Option<String>,
    pub dither: Option<String>,
    pub invert: bool,
}

/// Everything the pipeline needs, validated.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub palette: Palette,
    pub algorithm: DitherAlgorithm,
    pub invert: bool,
    pub jpeg_quality: u8,
}

impl Settings {
    /// Merge flags over config and validate, without touching the input.
    ///
    /// Checks run in a fixed order so the first problem reported is stable:
    /// output extension, palette size, dither name, palette hex values.
    pub fn resolve(
        input: PathBuf,
        output: PathBuf,
        overrides: Overrides,
        config: &AppConfig,
    ) -> Result<Self, ClrError> {
        let format = OutputFormat::from_path(&output)?;

        let hex = select_palette(&overrides, config)?;
        if hex.len() < MIN_PALETTE_COLOURS {
            return Err(ClrError::Usage(
                "must provide at least two (2) palette colours".to_string(),
            ));
        }

        let algorithm = match overrides.dither.as_deref().or(config.dither.as_deref()) {
            Some(name) => name.parse::<DitherAlgorithm>()?,
            None => DitherAlgorithm::default(),
        };

        let palette = Palette::from_hex(hex)?;

        let settings = Self {
            input,
            output,
            format,
            palette,
            algorithm,
            invert: overrides.invert || config.invert,
            jpeg_quality: config.jpeg_quality,
        };
        tracing::debug!(
            algorithm = %settings.algorithm,
            colours = settings.palette.len(),
            invert = settings.invert,
            format = %settings.format,
            "Resolved settings"
        );
        Ok(settings)
    }
}

fn select_palette<'a>(
    overrides: &'a Overrides,
    config: &'a AppConfig,
) -> Result<&'a [String], ClrError> {
    if !overrides.palette.is_empty() {
        return Ok(&overrides.palette);
    }
    if let Some(name) = overrides.scheme.as_deref() {
        return config
            .schemes
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| ClrError::Usage(format!("unknown colour scheme '{}'", name)));
    }
    if !config.palette.is_empty() {
        tracing::info!(colours = config.palette.len(), "Using palette from config");
    }
    Ok(&config.palette)
}
