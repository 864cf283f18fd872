//! Configuration for SVG output

/// Configuration options for SVG output
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Base CSS class for the root element (e.g., "icon" gives
    /// `class="icon icon-arrow-up"`)
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            class_prefix: Some("icon".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the generated CSS classes
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }

    /// Root classes generated for an icon
    pub(crate) fn icon_classes(&self, icon_name: &str) -> Option<String> {
        self.class_prefix
            .as_ref()
            .map(|prefix| format!("{prefix} {prefix}-{icon_name}"))
    }
}
