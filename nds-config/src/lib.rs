//! Shared configuration loader for the nds build tools.
//!
//! `defaults/nds.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific
//! files on top of those defaults via [`Loader`] before deserializing into
//! [`NdsConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use nds_tokens::{BaseUnits, TokenFiles};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/nds.default.toml");

/// Top-level configuration consumed by the nds build tools.
#[derive(Debug, Clone, Deserialize)]
pub struct NdsConfig {
    pub icons: IconsConfig,
    pub tokens: TokensConfig,
}

/// Icon pipeline file layout and package naming.
#[derive(Debug, Clone, Deserialize)]
pub struct IconsConfig {
    /// Directory holding the icon `.svg` sources.
    pub assets_dir: String,
    pub json_file: String,
    pub types_file: String,
    pub module_file: String,
    /// Module name used in the generated type declarations.
    pub package: String,
}

/// Token pipeline output layout and device scaling.
#[derive(Debug, Clone, Deserialize)]
pub struct TokensConfig {
    pub output_dir: String,
    pub files: TokenFiles,
    pub base_units: BaseUnits,
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
    pub fn build(self) -> Result<NdsConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<NdsConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.icons.assets_dir, "assets");
        assert_eq!(config.icons.package, "@nds/icons");
        assert_eq!(config.tokens.files.css, "nds_tokens.css");
        assert_eq!(config.tokens.base_units.phone, 10.0);
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("tokens.output_dir", "dist")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.tokens.output_dir, "dist");
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let config = Loader::new()
            .with_optional_file("/nonexistent/nds.toml")
            .build()
            .expect("defaults to survive a missing optional file");
        assert_eq!(config.icons.json_file, "icons.json");
    }
}
