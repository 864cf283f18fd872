//! Icon Renderer - one generic renderer for a whole icon library
//!
//! Icons are plain data: an ordered list of SVG shape descriptors drawn on a
//! 24x24 canvas. A single rendering procedure resolves size, color and stroke
//! width, fills in stroke defaults, and wraps the shapes in an `<svg>` root.
//!
//! # Example
//!
//! ```rust
//! use icon_renderer::render;
//!
//! let svg = render("heart").unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains(r#"stroke="currentColor""#));
//! ```

pub mod error;
pub mod icon;
pub mod lint;
pub mod markup;
pub mod renderer;
pub mod style;

pub use error::ParseError;
pub use icon::{
    AttrValue, Attribute, CatalogError, IconCatalog, IconDefinition, IconPack, IconPackError,
    Node, ShapeDescriptor, Tag,
};
pub use lint::{LintCategory, LintWarning};
pub use renderer::{
    render_icon, render_icon_with, to_data_uri, NodeFactory, SvgConfig, SvgElement, SvgNode,
    TreeFactory,
};
pub use style::{IconProps, ResolvedStyle, StyleConfig, StyleConfigError};

use thiserror::Error;

/// Errors that can occur when rendering icons by name
#[derive(Debug, Error)]
pub enum RenderError {
    /// No icon with this name in the catalog
    #[error("unknown icon: {name}")]
    UnknownIcon { name: String },

    /// An icon pack failed to load
    #[error("icon pack error: {0}")]
    Pack(#[from] IconPackError),

    /// A style config failed to load
    #[error("style config error: {0}")]
    Config(#[from] StyleConfigError),
}

impl RenderError {
    /// Pretty-print the error, with source context for icon markup errors
    pub fn report(&self, filename: &str) -> String {
        match self {
            RenderError::Pack(e) => e.report(filename),
            other => other.to_string(),
        }
    }
}

/// Configuration for rendering icons to SVG text
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Style defaults (size, color, stroke width, palette)
    pub style: StyleConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            style: StyleConfig::global().clone(),
            svg: SvgConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration using the process-wide style defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style defaults
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }
}

/// Render a built-in icon to SVG text with default configuration
///
/// This is the main entry point for the library.
pub fn render(name: &str) -> Result<String, RenderError> {
    render_with_config(name, &IconProps::default(), &RenderConfig::default())
}

/// Render a built-in icon to SVG text with per-call overrides
///
/// # Example
///
/// ```rust
/// use icon_renderer::{render_with_config, IconProps, RenderConfig, StyleConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_style(StyleConfig::new().with_stroke_width(1.5))
///     .with_svg(SvgConfig::new().with_pretty_print(false));
/// let props = IconProps::new().with_size(48.0).with_color("#ff0000");
///
/// let svg = render_with_config("minus", &props, &config).unwrap();
/// assert!(svg.contains(r#"width="48""#));
/// assert!(svg.contains(r##"stroke="#ff0000""##));
/// assert!(svg.contains(r#"stroke-width="3""#));
/// ```
pub fn render_with_config(
    name: &str,
    props: &IconProps,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    render_from(IconCatalog::builtin(), name, props, config)
}

/// Render an icon from a specific catalog to SVG text
pub fn render_from(
    catalog: &IconCatalog,
    name: &str,
    props: &IconProps,
    config: &RenderConfig,
) -> Result<String, RenderError> {
    let icon = catalog.get(name).ok_or_else(|| RenderError::UnknownIcon {
        name: name.to_string(),
    })?;
    Ok(render_icon(icon, props, config).to_svg_string(&config.svg))
}
