//! Shared configuration loader for the mdpp toolchain.
//!
//! `defaults/mdpp.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdppConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdpp_convert::ConvertOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdpp.default.toml");

/// File picked up from the working directory when present.
pub const PROJECT_CONFIG_FILE: &str = "mdpp.toml";

/// Top-level configuration consumed by mdpp applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdppConfig {
    pub convert: ConvertConfig,
    pub logging: LoggingConfig,
}

/// Converter knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub idprefix: String,
    pub outfilesuffix: String,
    pub tables: TablesConfig,
    pub video: VideoConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TablesConfig {
    pub multiline: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoConfig {
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive (`warn`, `debug`, `mdpp_convert=trace`, ...)
    pub level: String,
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            idprefix: config.idprefix.clone(),
            outfilesuffix: config.outfilesuffix.clone(),
            multiline_tables: config.tables.multiline,
            video_width: config.video.width.clone(),
            video_height: config.video.height.clone(),
        }
    }
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions::from(&config)
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<MdppConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdppConfig, ConfigError> {
    Loader::new().build()
}
