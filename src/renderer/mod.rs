//! SVG renderer for icon definitions
//!
//! Resolves the style for a render, fills in default presentation
//! attributes on each shape, and builds the `<svg>` tree. The tree can be
//! serialized to text or built directly as host nodes via [`NodeFactory`].

pub mod config;
pub mod normalize;
pub mod svg;
pub mod tree;

pub use config::SvgConfig;
pub use normalize::COLOR_PLACEHOLDER;
pub use svg::{escape_xml, to_data_uri};
pub use tree::{render_icon, render_icon_with, NodeFactory, SvgElement, SvgNode, TreeFactory};
