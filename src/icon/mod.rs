//! Icon data model
//!
//! An icon is plain data: an ordered list of [`ShapeDescriptor`]s drawn on a
//! 24x24 canvas. The order of the list is the paint order. Nothing in this
//! module renders anything; see [`crate::renderer`] for that.

mod builtin;
mod catalog;
mod pack;

use std::fmt;

pub use catalog::{CatalogError, IconCatalog};
pub use pack::{IconPack, IconPackError};

use crate::error::ParseError;

/// Element tag of a shape descriptor
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tag {
    Path,
    Circle,
    Rect,
    Line,
    Polyline,
    Polygon,
    Ellipse,
    /// Any other element (`g`, `defs`, `text`, or a name we don't know).
    /// Rendered verbatim without stroke/fill defaults.
    Container(String),
}

/// Container elements that are valid inside an icon body
const KNOWN_CONTAINERS: &[&str] = &[
    "a",
    "clipPath",
    "defs",
    "desc",
    "g",
    "linearGradient",
    "mask",
    "radialGradient",
    "stop",
    "symbol",
    "text",
    "title",
    "tspan",
    "use",
];

impl Tag {
    /// Classify an element name
    pub fn from_name(name: &str) -> Self {
        match name {
            "path" => Tag::Path,
            "circle" => Tag::Circle,
            "rect" => Tag::Rect,
            "line" => Tag::Line,
            "polyline" => Tag::Polyline,
            "polygon" => Tag::Polygon,
            "ellipse" => Tag::Ellipse,
            other => Tag::Container(other.to_string()),
        }
    }

    /// The element name as written in SVG
    pub fn as_str(&self) -> &str {
        match self {
            Tag::Path => "path",
            Tag::Circle => "circle",
            Tag::Rect => "rect",
            Tag::Line => "line",
            Tag::Polyline => "polyline",
            Tag::Polygon => "polygon",
            Tag::Ellipse => "ellipse",
            Tag::Container(name) => name,
        }
    }

    /// Whether the renderer fills in stroke/fill/linecap defaults for this tag
    pub fn is_strokable(&self) -> bool {
        !matches!(self, Tag::Container(_))
    }

    /// Whether this is a recognized SVG element name
    pub fn is_known(&self) -> bool {
        match self {
            Tag::Container(name) => KNOWN_CONTAINERS.contains(&name.as_str()),
            _ => true,
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute value: either a literal string or a number
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Number(f64),
}

impl AttrValue {
    /// Borrow the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttrValue::Str(s) => Some(s),
            AttrValue::Number(_) => None,
        }
    }
}

impl fmt::Display for AttrValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttrValue::Str(s) => f.write_str(s),
            AttrValue::Number(n) => f.write_str(&format_number(*n)),
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Str(s)
    }
}

impl From<f64> for AttrValue {
    fn from(n: f64) -> Self {
        AttrValue::Number(n)
    }
}

impl From<i32> for AttrValue {
    fn from(n: i32) -> Self {
        AttrValue::Number(n as f64)
    }
}

/// Format a number in its shortest form, rounded to 4 decimal places
///
/// `4.0` becomes `"4"`, `1.5` stays `"1.5"`.
pub fn format_number(n: f64) -> String {
    let rounded = (n * 10_000.0).round() / 10_000.0;
    // Avoid "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{}", rounded)
}

/// Map camelCase presentation attributes (as written in JSX-style sources)
/// to their SVG spelling
pub fn canonical_attr_name(name: &str) -> String {
    let canonical = match name {
        "strokeWidth" => "stroke-width",
        "strokeLinecap" => "stroke-linecap",
        "strokeLinejoin" => "stroke-linejoin",
        "strokeDasharray" => "stroke-dasharray",
        "strokeOpacity" => "stroke-opacity",
        "fillRule" => "fill-rule",
        "fillOpacity" => "fill-opacity",
        "clipRule" => "clip-rule",
        "className" => "class",
        other => other,
    };
    canonical.to_string()
}

/// A single named attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttrValue,
}

impl Attribute {
    /// Create an attribute, canonicalizing its name
    pub fn new(name: &str, value: impl Into<AttrValue>) -> Self {
        Self {
            name: canonical_attr_name(name),
            value: value.into(),
        }
    }
}

/// A child of a shape descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Shape(ShapeDescriptor),
    Text(String),
}

/// One drawable primitive: tag, attributes, and optional children
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub tag: Tag,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl ShapeDescriptor {
    /// Create a descriptor with no attributes or children
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: vec![],
            children: vec![],
        }
    }

    /// Set an attribute, replacing any existing value with the same name
    pub fn with_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        let attr = Attribute::new(name, value);
        match self.attributes.iter_mut().find(|a| a.name == attr.name) {
            Some(existing) => existing.value = attr.value,
            None => self.attributes.push(attr),
        }
        self
    }

    /// Append a nested shape
    pub fn with_child(mut self, child: ShapeDescriptor) -> Self {
        self.children.push(Node::Shape(child));
        self
    }

    /// Append literal text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Look up an attribute by name (camelCase aliases accepted)
    pub fn attr(&self, name: &str) -> Option<&AttrValue> {
        let name = canonical_attr_name(name);
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// Check whether an attribute is present
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

/// The fixed geometry of one named icon
#[derive(Debug, Clone, PartialEq)]
pub struct IconDefinition {
    pub name: String,
    pub shapes: Vec<ShapeDescriptor>,
}

impl IconDefinition {
    pub fn new(name: impl Into<String>, shapes: Vec<ShapeDescriptor>) -> Self {
        Self {
            name: name.into(),
            shapes,
        }
    }

    /// Build a definition from SVG element markup
    ///
    /// # Example
    ///
    /// ```rust
    /// use icon_renderer::IconDefinition;
    ///
    /// let icon = IconDefinition::from_markup("dot", r#"<circle cx="12" cy="12" r="2"/>"#).unwrap();
    /// assert_eq!(icon.shapes.len(), 1);
    /// ```
    pub fn from_markup(name: impl Into<String>, markup: &str) -> Result<Self, Vec<ParseError>> {
        let shapes = crate::markup::parse(markup)?;
        Ok(Self::new(name, shapes))
    }
}
