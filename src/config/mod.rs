//! Configuration file support for asciidraw.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/asciidraw/config.toml`. Settings include the maximum canvas
//! height, the glyphs used for rendering, the status prompt, and batch grid width.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{BatchConfig, CanvasConfig, GlyphConfig, UiConfig};

use crate::draw::Glyphs;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// max_height = 28
///
/// [glyphs]
/// figure = "x"
/// canvas_horizontal = "-"
/// canvas_vertical = "|"
///
/// [ui]
/// prompt = "enter command: "
/// status_gap = 2
///
/// [batch]
/// width = 80
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Canvas size limits
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Rendering glyphs
    #[serde(default)]
    pub glyphs: GlyphConfig,

    /// Status area preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Batch mode grid settings
    #[serde(default)]
    pub batch: BatchConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Validated ranges:
    /// - `canvas.max_height`: 1 - 200
    /// - `ui.status_gap`: 2 - 10
    /// - `batch.width`: 3 - 1000
    /// - glyphs: any non-whitespace character
    fn validate_and_clamp(&mut self) {
        if !(1..=200).contains(&self.canvas.max_height) {
            log::warn!(
                "Invalid max_height {}, clamping to 1-200 range",
                self.canvas.max_height
            );
            self.canvas.max_height = self.canvas.max_height.clamp(1, 200);
        }

        if !(2..=10).contains(&self.ui.status_gap) {
            log::warn!(
                "Invalid status_gap {}, clamping to 2-10 range",
                self.ui.status_gap
            );
            self.ui.status_gap = self.ui.status_gap.clamp(2, 10);
        }

        if !(3..=1000).contains(&self.batch.width) {
            log::warn!(
                "Invalid batch width {}, clamping to 3-1000 range",
                self.batch.width
            );
            self.batch.width = self.batch.width.clamp(3, 1000);
        }

        let defaults = Glyphs::default();
        let glyphs = &mut self.glyphs;
        for (name, glyph, fallback) in [
            ("figure", &mut glyphs.figure, defaults.figure),
            (
                "canvas_horizontal",
                &mut glyphs.canvas_horizontal,
                defaults.canvas_horizontal,
            ),
            (
                "canvas_vertical",
                &mut glyphs.canvas_vertical,
                defaults.canvas_vertical,
            ),
        ] {
            if glyph.is_whitespace() || glyph.is_control() {
                log::warn!("Invalid {name} glyph {glyph:?}, falling back to '{fallback}'");
                *glyph = fallback;
            }
        }
    }

    /// Glyph set used for rendering.
    pub fn glyphs(&self) -> Glyphs {
        self.glyphs.to_glyphs()
    }

    /// Terminal row reserved for prompts and warnings.
    pub fn status_row(&self) -> u16 {
        let row = self.canvas.max_height + self.ui.status_gap;
        u16::try_from(row).unwrap_or(u16::MAX)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/asciidraw/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("asciidraw");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if it does not exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = Config::default();
        assert_eq!(config.canvas.max_height, 28);
        assert_eq!(config.glyphs(), Glyphs::default());
        assert_eq!(config.ui.prompt, "enter command: ");
        assert_eq!(config.status_row(), 30);
        assert_eq!(config.batch.width, 80);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("nope.toml")).unwrap();
        assert_eq!(config.canvas.max_height, 28);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[glyphs]\nfigure = \"#\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.glyphs.figure, '#');
        assert_eq!(config.glyphs.canvas_vertical, '|');
        assert_eq!(config.canvas.max_height, 28);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "[canvas]\nmax_height = 0\n[ui]\nstatus_gap = 50\n[batch]\nwidth = 5000\n[glyphs]\nfigure = \" \"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.max_height, 1);
        assert_eq!(config.ui.status_gap, 10);
        assert_eq!(config.batch.width, 1000);
        assert_eq!(config.glyphs.figure, 'x');
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[canvas\nmax_height = ").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn example_file_parses_and_refuses_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("asciidraw").join("config.toml");

        Config::create_default_file(&path).unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.canvas.max_height, 28);

        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for section in ["canvas", "glyphs", "ui", "batch"] {
            assert!(properties.get(section).is_some(), "missing {section}");
        }
    }
}
