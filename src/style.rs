//! Process-wide style defaults and per-call overrides
//!
//! Every icon resolves its size, color and stroke width the same way:
//! an explicit [`IconProps`] value wins, then the [`StyleConfig`] default,
//! then a hard-coded fallback. Resolution can't fail.

use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// Size used when neither the call nor the config specifies one
pub const FALLBACK_SIZE: f64 = 24.0;
/// Color used when neither the call nor the config specifies one
pub const FALLBACK_COLOR: &str = "currentColor";
/// Stroke width used when neither the call nor the config specifies one
pub const FALLBACK_STROKE_WIDTH: f64 = 2.0;
/// Side length of the logical canvas every icon is drawn on
pub const CANVAS_SIZE: f64 = 24.0;

static GLOBAL: OnceLock<StyleConfig> = OnceLock::new();

/// Errors that can occur when loading a style config
#[derive(Error, Debug)]
pub enum StyleConfigError {
    #[error("Failed to read style config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse style config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default rendering parameters shared by all icons
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleConfig {
    /// Optional name for the config
    pub name: Option<String>,
    pub size: Option<f64>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    pub absolute_stroke_width: Option<bool>,
    /// Palette: token name -> concrete color
    pub colors: HashMap<String, String>,
}

/// TOML structure for deserializing style configs
#[derive(Deserialize)]
struct TomlStyleConfig {
    metadata: Option<TomlMetadata>,
    defaults: Option<TomlDefaults>,
    #[serde(default)]
    colors: HashMap<String, String>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlDefaults {
    size: Option<f64>,
    color: Option<String>,
    stroke_width: Option<f64>,
    absolute_stroke_width: Option<bool>,
}

impl StyleConfig {
    /// Create an empty config (every value falls through to the fallbacks)
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, StyleConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a config from a TOML string
    ///
    /// ```toml
    /// [defaults]
    /// size = 32
    /// color = "accent"
    /// stroke_width = 1.5
    ///
    /// [colors]
    /// accent = "#2196f3"
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self, StyleConfigError> {
        let parsed: TomlStyleConfig = toml::from_str(content)?;
        let defaults = parsed.defaults.unwrap_or(TomlDefaults {
            size: None,
            color: None,
            stroke_width: None,
            absolute_stroke_width: None,
        });

        Ok(StyleConfig {
            name: parsed.metadata.and_then(|m| m.name),
            size: defaults.size,
            color: defaults.color,
            stroke_width: defaults.stroke_width,
            absolute_stroke_width: defaults.absolute_stroke_width,
            colors: parsed.colors,
        })
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    /// Add a palette entry
    pub fn with_palette_color(mut self, token: impl Into<String>, value: impl Into<String>) -> Self {
        self.colors.insert(token.into(), value.into());
        self
    }

    /// Install this config as the process-wide default
    ///
    /// Only the first call takes effect; later calls get the rejected config
    /// back.
    pub fn install(self) -> Result<(), StyleConfig> {
        let result = GLOBAL.set(self);
        if result.is_ok() {
            tracing::debug!(config = ?GLOBAL.get(), "installed global style config");
        }
        result
    }

    /// The process-wide default config (empty unless one was installed)
    pub fn global() -> &'static StyleConfig {
        GLOBAL.get_or_init(StyleConfig::default)
    }

    /// Map a palette token to its color, passing other values through
    pub fn resolve_color<'a>(&'a self, color: &'a str) -> &'a str {
        self.colors.get(color).map(|s| s.as_str()).unwrap_or(color)
    }

    /// Resolve per-call overrides against this config
    pub fn resolve(&self, props: &IconProps) -> ResolvedStyle {
        let size = props.size.or(self.size).unwrap_or(FALLBACK_SIZE);
        let color = first_non_empty(props.color.as_deref(), self.color.as_deref())
            .unwrap_or(FALLBACK_COLOR);
        let stroke_width = props
            .stroke_width
            .or(self.stroke_width)
            .unwrap_or(FALLBACK_STROKE_WIDTH);
        let absolute_stroke_width = props
            .absolute_stroke_width
            .or(self.absolute_stroke_width)
            .unwrap_or(false);

        ResolvedStyle {
            size,
            color: self.resolve_color(color).to_string(),
            stroke_width,
            absolute_stroke_width,
        }
    }
}

fn first_non_empty<'a>(first: Option<&'a str>, second: Option<&'a str>) -> Option<&'a str> {
    first
        .filter(|s| !s.is_empty())
        .or_else(|| second.filter(|s| !s.is_empty()))
}

/// Per-call overrides for a single render
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconProps {
    pub size: Option<f64>,
    pub color: Option<String>,
    pub stroke_width: Option<f64>,
    pub absolute_stroke_width: Option<bool>,
    /// Extra CSS class appended to the root `class` attribute
    pub class: Option<String>,
    /// Pass-through attributes merged onto the root `<svg>`
    pub attributes: Vec<(String, String)>,
}

impl IconProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_absolute_stroke_width(mut self, absolute: bool) -> Self {
        self.absolute_stroke_width = Some(absolute);
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Add a pass-through root attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
}

/// Concrete style values for one render
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub size: f64,
    pub color: String,
    pub stroke_width: f64,
    pub absolute_stroke_width: bool,
}

impl ResolvedStyle {
    /// Stroke width to apply to shapes that don't set their own
    ///
    /// Scales with the icon size relative to the 24-unit canvas unless
    /// `absolute_stroke_width` is set.
    pub fn effective_stroke_width(&self) -> f64 {
        if self.absolute_stroke_width {
            self.stroke_width
        } else {
            self.stroke_width * self.size / CANVAS_SIZE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks() {
        let style = StyleConfig::new().resolve(&IconProps::new());
        assert_eq!(style.size, 24.0);
        assert_eq!(style.color, "currentColor");
        assert_eq!(style.stroke_width, 2.0);
        assert!(!style.absolute_stroke_width);
    }

    #[test]
    fn test_config_over_fallback() {
        let config = StyleConfig::new()
            .with_size(32.0)
            .with_color("#333")
            .with_stroke_width(1.5)
            .with_absolute_stroke_width(true);
        let style = config.resolve(&IconProps::new());
        assert_eq!(style.size, 32.0);
        assert_eq!(style.color, "#333");
        assert_eq!(style.stroke_width, 1.5);
        assert!(style.absolute_stroke_width);
    }

    #[test]
    fn test_props_over_config() {
        let config = StyleConfig::new().with_size(32.0).with_color("#333");
        let props = IconProps::new()
            .with_size(16.0)
            .with_color("red")
            .with_absolute_stroke_width(false);
        let style = config.resolve(&props);
        assert_eq!(style.size, 16.0);
        assert_eq!(style.color, "red");
        assert!(!style.absolute_stroke_width);
    }

    #[test]
    fn test_empty_color_falls_through() {
        let config = StyleConfig::new().with_color("");
        let props = IconProps::new().with_color("");
        assert_eq!(config.resolve(&props).color, "currentColor");

        let config = StyleConfig::new().with_color("blue");
        assert_eq!(config.resolve(&props).color, "blue");
    }

    #[test]
    fn test_palette_tokens_resolved() {
        let config = StyleConfig::new().with_palette_color("accent", "#2196f3");
        let style = config.resolve(&IconProps::new().with_color("accent"));
        assert_eq!(style.color, "#2196f3");
        assert_eq!(config.resolve_color("teal"), "teal");
    }

    #[test]
    fn test_effective_stroke_width_scales() {
        let style = StyleConfig::new().resolve(&IconProps::new().with_size(48.0));
        assert_eq!(style.effective_stroke_width(), 4.0);

        let style = StyleConfig::new().resolve(
            &IconProps::new()
                .with_size(48.0)
                .with_absolute_stroke_width(true),
        );
        assert_eq!(style.effective_stroke_width(), 2.0);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r##"
[metadata]
name = "Brand"

[defaults]
size = 32
color = "accent"
stroke_width = 1.5
absolute_stroke_width = true

[colors]
accent = "#2196f3"
"##;
        let config = StyleConfig::from_str(toml_str).expect("Should parse");
        assert_eq!(config.name, Some("Brand".to_string()));
        assert_eq!(config.size, Some(32.0));
        assert_eq!(config.stroke_width, Some(1.5));
        assert_eq!(config.absolute_stroke_width, Some(true));
        assert_eq!(config.resolve(&IconProps::new()).color, "#2196f3");
    }

    #[test]
    fn test_parse_toml_empty() {
        let config = StyleConfig::from_str("").expect("Should parse");
        assert_eq!(config, StyleConfig::default());
    }

    #[test]
    fn test_unknown_default_key_rejected() {
        let result = StyleConfig::from_str("[defaults]\nstrokewidth = 3\n");
        assert!(matches!(result, Err(StyleConfigError::ParseError(_))));
    }
}
