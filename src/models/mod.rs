pub mod config;
pub mod format;
pub mod settings;

pub use config::{AppConfig, CONFIG_ENV_VAR};
pub use format::OutputFormat;
pub use settings::{Overrides, Settings};
