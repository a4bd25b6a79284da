//! Configuration file support for shapepad.
//!
//! Settings are loaded from `~/.config/shapepad/config.toml` when present;
//! otherwise sensible defaults are used automatically. The file controls the
//! canvas geometry and colors plus where exported pictures land.

use crate::canvas::{CanvasOptions, display_available};
use crate::draw::Color;
use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// title = "Picture Demo"
/// width = 800
/// height = 600
/// background = "white"
///
/// [export]
/// filename_template = "picture_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas geometry, colors and presentation mode
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Where exported pictures are written by default
    #[serde(default)]
    pub export: ExportConfig,
}

/// Canvas-related settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Title used by the presentation surface and export captions
    pub title: String,
    /// Client-area width in pixels
    pub width: i32,
    /// Client-area height in pixels
    pub height: i32,
    /// Background color name or `#rrggbb` string
    pub background: String,
    /// Force headless mode on or off; unset means auto-detect from the
    /// display environment
    pub headless: Option<bool>,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            title: "Picture Demo".to_string(),
            width: 800,
            height: 600,
            background: "white".to_string(),
            headless: None,
        }
    }
}

/// Default export destination settings.
#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported pictures are saved to; unset means the pictures
    /// directory (or the working directory when that is unavailable)
    pub directory: Option<PathBuf>,
    /// Filename template (supports chrono format specifiers)
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: None,
            filename_template: "picture_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

impl ExportConfig {
    /// Builds the destination path for one export right now.
    pub fn default_destination(&self) -> PathBuf {
        let directory = self.directory.clone().unwrap_or_else(|| {
            dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Shapepad")
        });
        directory.join(generate_filename(&self.filename_template, "png"))
    }
}

/// Generates a filename from a chrono template and an extension.
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    format!("{}.{}", now.format(template), format)
}

/// Bounds applied to configured canvas dimensions.
const DIMENSION_RANGE: std::ops::RangeInclusive<i32> = 1..=8192;

impl Config {
    /// Loads the configuration file, falling back to defaults when absent.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let Some(path) = Self::config_path() else {
            log::debug!("no config directory available, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();

        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Location of the configuration file, if a config directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("shapepad").join("config.toml"))
    }

    /// Clamps configured values to acceptable ranges, warning on each fix.
    fn validate_and_clamp(&mut self) {
        if !DIMENSION_RANGE.contains(&self.canvas.width) {
            log::warn!(
                "invalid canvas width {}, clamping to {}-{}",
                self.canvas.width,
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            );
            self.canvas.width = self
                .canvas
                .width
                .clamp(*DIMENSION_RANGE.start(), *DIMENSION_RANGE.end());
        }

        if !DIMENSION_RANGE.contains(&self.canvas.height) {
            log::warn!(
                "invalid canvas height {}, clamping to {}-{}",
                self.canvas.height,
                DIMENSION_RANGE.start(),
                DIMENSION_RANGE.end()
            );
            self.canvas.height = self
                .canvas
                .height
                .clamp(*DIMENSION_RANGE.start(), *DIMENSION_RANGE.end());
        }

        if self.export.filename_template.is_empty() {
            log::warn!("empty export filename template, restoring default");
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Resolves this configuration into canvas construction options.
    pub fn canvas_options(&self) -> CanvasOptions {
        CanvasOptions {
            title: self.canvas.title.clone(),
            width: self.canvas.width,
            height: self.canvas.height,
            background: Color::parse(&self.canvas.background),
            headless: self.canvas.headless.unwrap_or_else(|| !display_available()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, CYAN};

    #[test]
    fn empty_toml_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 600);
        assert_eq!(config.canvas.background, "white");
        assert!(config.canvas.headless.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [canvas]
            title = "My Picture"
            width = 320
            height = 200
            background = "cyan"
            "#,
        )
        .unwrap();
        assert_eq!(config.canvas.title, "My Picture");
        assert_eq!(config.canvas_options().background, CYAN);
        assert_eq!(
            config.export.filename_template,
            "picture_%Y-%m-%d_%H%M%S"
        );
    }

    #[test]
    fn clamping_repairs_out_of_range_dimensions() {
        let mut config: Config = toml::from_str(
            r#"
            [canvas]
            width = -5
            height = 100000
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, 8192);
    }

    #[test]
    fn unknown_background_resolves_to_black() {
        let mut config = Config::default();
        config.canvas.background = "octarine".to_string();
        assert_eq!(config.canvas_options().background, BLACK);
    }

    #[test]
    fn generated_filename_has_extension_and_template_prefix() {
        let name = generate_filename("picture_%Y", "png");
        assert!(name.starts_with("picture_"));
        assert!(name.ends_with(".png"));
    }
}
