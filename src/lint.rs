//! Lint checks for icon definitions.
//!
//! Reports authoring defects that rendering silently tolerates: element
//! names the renderer doesn't know, strokable shapes missing the attributes
//! that give them geometry, icons with nothing to draw, and attributes that
//! will be dropped from the output. Lint never blocks rendering.

use std::fmt;

use crate::icon::{IconDefinition, Node, ShapeDescriptor, Tag};

/// A lint warning about an icon definition
#[derive(Debug, Clone, PartialEq)]
pub struct LintWarning {
    pub category: LintCategory,
    pub message: String,
}

/// Category of lint defect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintCategory {
    Tag,
    Geometry,
    Empty,
    Attribute,
}

impl fmt::Display for LintCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintCategory::Tag => write!(f, "tag"),
            LintCategory::Geometry => write!(f, "geometry"),
            LintCategory::Empty => write!(f, "empty"),
            LintCategory::Attribute => write!(f, "attribute"),
        }
    }
}

impl fmt::Display for LintWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

/// Run all lint checks on an icon definition.
pub fn check(icon: &IconDefinition) -> Vec<LintWarning> {
    let mut warnings = Vec::new();

    if !icon.shapes.iter().any(draws_something) {
        warnings.push(LintWarning {
            category: LintCategory::Empty,
            message: format!("icon \"{}\" has no shapes to draw", icon.name),
        });
    }

    for (index, shape) in icon.shapes.iter().enumerate() {
        let location = format!("\"{}\" <{} #{}>", icon.name, shape.tag, index + 1);
        check_shape(shape, &location, &mut warnings);
    }
    warnings
}

/// Whether a shape (or anything below it) is strokable geometry
fn draws_something(shape: &ShapeDescriptor) -> bool {
    shape.tag.is_strokable()
        || shape.children.iter().any(|child| match child {
            Node::Shape(s) => draws_something(s),
            Node::Text(_) => false,
        })
        || matches!(&shape.tag, Tag::Container(name) if name == "text" || name == "use")
}

fn check_shape(shape: &ShapeDescriptor, location: &str, warnings: &mut Vec<LintWarning>) {
    if !shape.tag.is_known() {
        warnings.push(LintWarning {
            category: LintCategory::Tag,
            message: format!("{}: unknown element <{}> is rendered verbatim", location, shape.tag),
        });
    }

    if shape.has_attr("key") {
        warnings.push(LintWarning {
            category: LintCategory::Attribute,
            message: format!("{}: attribute \"key\" is dropped from output", location),
        });
    }

    if let Some(missing) = missing_geometry(shape) {
        warnings.push(LintWarning {
            category: LintCategory::Geometry,
            message: format!("{}: missing {}", location, missing),
        });
    }

    let mut index = 0;
    for child in &shape.children {
        if let Node::Shape(s) = child {
            index += 1;
            let child_location = format!("{} > <{} #{}>", location, s.tag, index);
            check_shape(s, &child_location, warnings);
        }
    }
}

/// Describe the geometry attributes a strokable shape lacks
fn missing_geometry(shape: &ShapeDescriptor) -> Option<String> {
    let required: &[&str] = match shape.tag {
        Tag::Path => &["d"],
        Tag::Circle => &["r"],
        Tag::Ellipse => &["rx", "ry"],
        Tag::Rect => &["width", "height"],
        Tag::Polyline | Tag::Polygon => &["points"],
        Tag::Line => {
            // Omitted coordinates default to 0, but a line with none is a dot at the origin
            let any = ["x1", "y1", "x2", "y2"].iter().any(|a| shape.has_attr(a));
            return (!any).then(|| "all of \"x1\", \"y1\", \"x2\", \"y2\"".to_string());
        }
        Tag::Container(_) => return None,
    };

    let missing: Vec<String> = required
        .iter()
        .filter(|a| !shape.has_attr(a))
        .map(|a| format!("\"{}\"", a))
        .collect();
    if missing.is_empty() {
        None
    } else {
        Some(missing.join(", "))
    }
}
