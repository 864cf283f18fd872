//! SVG text output for rendered trees

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::tree::{SvgElement, SvgNode};
use super::SvgConfig;

/// Serialize SVG nodes incrementally
struct SvgWriter<'a> {
    config: &'a SvgConfig,
    out: String,
    indent: usize,
}

impl<'a> SvgWriter<'a> {
    fn new(config: &'a SvgConfig) -> Self {
        Self {
            config,
            out: String::new(),
            indent: 0,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &'static str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    fn open_tag(&mut self, element: &SvgElement) {
        self.out.push('<');
        self.out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            self.out
                .push_str(&format!(r#" {}="{}""#, name, escape_xml(value)));
        }
    }

    fn write_element(&mut self, element: &SvgElement) {
        let indent = self.indent_str();
        self.out.push_str(&indent);
        self.open_tag(element);

        if element.children.is_empty() {
            self.out.push_str("/>");
            return;
        }

        // Text-only content stays on one line so whitespace isn't introduced
        let text_only = element
            .children
            .iter()
            .all(|c| matches!(c, SvgNode::Text(_)));

        self.out.push('>');
        if text_only {
            for child in &element.children {
                if let SvgNode::Text(t) = child {
                    self.out.push_str(&escape_xml(t));
                }
            }
        } else {
            let nl = self.newline();
            self.indent += 1;
            for child in &element.children {
                self.out.push_str(nl);
                match child {
                    SvgNode::Element(e) => self.write_element(e),
                    SvgNode::Text(t) => {
                        let indent = self.indent_str();
                        self.out.push_str(&indent);
                        self.out.push_str(&escape_xml(t));
                    }
                }
            }
            self.indent = self.indent.saturating_sub(1);
            self.out.push_str(nl);
            self.out.push_str(&indent);
        }
        self.out.push_str("</");
        self.out.push_str(&element.tag);
        self.out.push('>');
    }

    fn finish(mut self, root: &SvgElement) -> String {
        if self.config.standalone {
            self.out
                .push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            let nl = self.newline();
            self.out.push_str(nl);
        }
        self.write_element(root);
        self.out
    }
}

impl SvgElement {
    /// Serialize this element and its children as SVG text
    pub fn to_svg_string(&self, config: &SvgConfig) -> String {
        SvgWriter::new(config).finish(self)
    }
}

/// Encode SVG text as a `data:` URI, e.g. for CSS `background-image`
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Escape special XML characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
