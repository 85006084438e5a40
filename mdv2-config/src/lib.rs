//! Shared configuration loader for mdv2.
//!
//! `defaults/mdv2.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`Mdv2Config`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdv2_core::{CodeEscape, ConvertOptions, DepthPolicy};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdv2.default.toml");

/// Top-level configuration consumed by mdv2 applications.
#[derive(Debug, Clone, Deserialize)]
pub struct Mdv2Config {
    pub convert: ConvertConfig,
    pub bench: BenchConfig,
}

/// Mirrors the knobs exposed by the converter.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub max_depth: usize,
    pub code_escape: CodeEscapeMode,
    pub on_depth_exceeded: DepthMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeEscapeMode {
    Minimal,
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthMode {
    Literal,
    Error,
}

impl From<CodeEscapeMode> for CodeEscape {
    fn from(mode: CodeEscapeMode) -> Self {
        match mode {
            CodeEscapeMode::Minimal => CodeEscape::Minimal,
            CodeEscapeMode::Strict => CodeEscape::Strict,
        }
    }
}

impl From<DepthMode> for DepthPolicy {
    fn from(mode: DepthMode) -> Self {
        match mode {
            DepthMode::Literal => DepthPolicy::Literal,
            DepthMode::Error => DepthPolicy::Error,
        }
    }
}

impl From<&ConvertConfig> for ConvertOptions {
    fn from(config: &ConvertConfig) -> Self {
        ConvertOptions {
            max_depth: config.max_depth,
            code_escape: config.code_escape.into(),
            depth_policy: config.on_depth_exceeded.into(),
        }
    }
}

impl From<ConvertConfig> for ConvertOptions {
    fn from(config: ConvertConfig) -> Self {
        ConvertOptions::from(&config)
    }
}

/// Settings for the timing harness.
#[derive(Debug, Clone, Deserialize)]
pub struct BenchConfig {
    pub multipliers: Vec<usize>,
    pub iterations: usize,
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
    pub fn build(self) -> Result<Mdv2Config, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<Mdv2Config, ConfigError> {
    Loader::new().build()
}
