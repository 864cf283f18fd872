//! Reader for SVG element markup
//!
//! Icon bodies are written as a fragment of SVG elements
//! (`<circle cx="12" cy="12" r="10"/><path d="..."/>`) and read into
//! [`ShapeDescriptor`](crate::icon::ShapeDescriptor)s.

mod grammar;
pub mod lexer;

pub use grammar::parse;
