//! Materialize an icon definition into a tree of SVG nodes

use crate::icon::{canonical_attr_name, format_number, IconDefinition, Node, ShapeDescriptor};
use crate::style::{IconProps, ResolvedStyle, CANVAS_SIZE};
use crate::RenderConfig;

use super::normalize::normalize;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// The host's element-creation primitive
///
/// Rendering walks the icon once and asks the factory to create each node,
/// children first. Implement this to render straight into a UI framework's
/// node type; [`TreeFactory`] builds an [`SvgElement`] tree.
pub trait NodeFactory {
    type Node;

    /// Create an element with its attributes and already-created children
    fn element(
        &mut self,
        tag: &str,
        attributes: Vec<(String, String)>,
        children: Vec<Self::Node>,
    ) -> Self::Node;

    /// Create a literal text node
    fn text(&mut self, content: &str) -> Self::Node;
}

/// A node in a rendered SVG tree
#[derive(Debug, Clone, PartialEq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
}

/// A rendered SVG element
#[derive(Debug, Clone, PartialEq)]
pub struct SvgElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

impl SvgElement {
    /// Look up an attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Direct element children, skipping text
    pub fn elements(&self) -> impl Iterator<Item = &SvgElement> {
        self.children.iter().filter_map(|c| match c {
            SvgNode::Element(e) => Some(e),
            SvgNode::Text(_) => None,
        })
    }

    /// All descendant elements in document order (not including `self`)
    pub fn descendants(&self) -> Vec<&SvgElement> {
        let mut out = Vec::new();
        collect_descendants(self, &mut out);
        out
    }
}

fn collect_descendants<'a>(element: &'a SvgElement, out: &mut Vec<&'a SvgElement>) {
    for child in element.elements() {
        out.push(child);
        collect_descendants(child, out);
    }
}

/// Builds an owned [`SvgElement`] tree
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeFactory;

impl NodeFactory for TreeFactory {
    type Node = SvgNode;

    fn element(
        &mut self,
        tag: &str,
        attributes: Vec<(String, String)>,
        children: Vec<SvgNode>,
    ) -> SvgNode {
        SvgNode::Element(SvgElement {
            tag: tag.to_string(),
            attributes,
            children,
        })
    }

    fn text(&mut self, content: &str) -> SvgNode {
        SvgNode::Text(content.to_string())
    }
}

/// Render an icon into an [`SvgElement`] tree
pub fn render_icon(icon: &IconDefinition, props: &IconProps, config: &RenderConfig) -> SvgElement {
    match render_icon_with(&mut TreeFactory, icon, props, config) {
        SvgNode::Element(root) => root,
        SvgNode::Text(_) => unreachable!("root node is always an element"),
    }
}

/// Render an icon through a host [`NodeFactory`]
pub fn render_icon_with<F: NodeFactory>(
    factory: &mut F,
    icon: &IconDefinition,
    props: &IconProps,
    config: &RenderConfig,
) -> F::Node {
    let style = config.style.resolve(props);
    tracing::trace!(
        icon = %icon.name,
        size = style.size,
        color = %style.color,
        stroke_width = style.effective_stroke_width(),
        "rendering icon"
    );

    let children = icon
        .shapes
        .iter()
        .map(|shape| render_shape(factory, shape, &style))
        .collect();

    let attributes = root_attributes(icon, props, config, &style);
    factory.element("svg", attributes, children)
}

fn render_shape<F: NodeFactory>(
    factory: &mut F,
    shape: &ShapeDescriptor,
    style: &ResolvedStyle,
) -> F::Node {
    let attributes = normalize(shape, style);
    let children = shape
        .children
        .iter()
        .map(|child| match child {
            Node::Shape(s) => render_shape(factory, s, style),
            Node::Text(t) => factory.text(t),
        })
        .collect();
    factory.element(shape.tag.as_str(), attributes, children)
}

fn root_attributes(
    icon: &IconDefinition,
    props: &IconProps,
    config: &RenderConfig,
    style: &ResolvedStyle,
) -> Vec<(String, String)> {
    let size = format_number(style.size);
    let canvas = format_number(CANVAS_SIZE);

    let mut attrs = vec![
        ("xmlns".to_string(), SVG_NAMESPACE.to_string()),
        ("width".to_string(), size.clone()),
        ("height".to_string(), size),
        ("viewBox".to_string(), format!("0 0 {canvas} {canvas}")),
        ("fill".to_string(), "none".to_string()),
    ];

    let mut class_parts: Vec<String> = Vec::new();
    if let Some(generated) = config.svg.icon_classes(&icon.name) {
        class_parts.push(generated);
    }
    if let Some(extra) = props.class.as_deref().filter(|c| !c.is_empty()) {
        class_parts.push(extra.to_string());
    }
    if !class_parts.is_empty() {
        attrs.push(("class".to_string(), class_parts.join(" ")));
    }

    for (name, value) in &props.attributes {
        merge_attribute(&mut attrs, &canonical_attr_name(name), value);
    }

    attrs
}

/// Merge a pass-through attribute: `class` appends, anything else replaces
fn merge_attribute(attrs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match attrs.iter_mut().find(|(k, _)| k == name) {
        Some((_, existing)) if name == "class" => {
            if !value.is_empty() {
                existing.push(' ');
                existing.push_str(value);
            }
        }
        Some((_, existing)) => *existing = value.to_string(),
        None => attrs.push((name.to_string(), value.to_string())),
    }
}
