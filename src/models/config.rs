use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::ClrError;

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "IMGCLR_CONFIG";

/// Defaults loaded from a YAML config file.
///
/// Every key is optional; command-line flags take precedence.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Default dither algorithm name
    #[serde(default)]
    pub dither: Option<String>,

    /// Invert luminance unless told otherwise
    #[serde(default)]
    pub invert: bool,

    /// JPEG encoder quality, 1..=100
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,

    /// Palette used when neither `--palette` nor `--scheme` is given
    #[serde(default)]
    pub palette: Vec<String>,

    /// Named palettes selectable with `--scheme`
    #[serde(default)]
    pub schemes: BTreeMap<String, Vec<String>>,
}

fn default_jpeg_quality() -> u8 {
    100
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dither: None,
            invert: false,
            jpeg_quality: default_jpeg_quality(),
            palette: Vec::new(),
            schemes: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(content: &str) -> Result<Self, ClrError> {
        // An empty file deserialises to unit, not to a map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self =
            serde_yaml::from_str(content).map_err(|e| ClrError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. An explicitly named file must exist and parse.
    pub fn load(path: &Path) -> Result<Self, ClrError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClrError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let config = Self::from_yaml(&content).map_err(|e| match e {
            ClrError::Config(reason) => {
                ClrError::Config(format!("'{}': {}", path.display(), reason))
            }
            other => other,
        })?;
        tracing::info!(
            path = %path.display(),
            schemes = config.schemes.len(),
            palette = config.palette.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Where to look for a config file: the flag, else the environment.
    pub fn locate(flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
    }

    /// Load from [`locate`](Self::locate), or fall back to defaults.
    pub fn resolve(flag: Option<&Path>) -> Result<Self, ClrError> {
        match Self::locate(flag) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ClrError> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(ClrError::Config(format!(
                "jpeg_quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
