//! richup-core - rich text schema AST and HTML rendering
//!
//! This crate provides the core data structures and the recursive renderer
//! turning rich text schema trees into HTML strings. It is fronted by the
//! `richup` crate, which adds input normalization and the HTML import path.
//!
//! # Architecture
//!
//! ```text
//! Schema JSON ──parse──▶ ┌───────────┐
//!                        │           │
//!                        │ Node tree │ ──render──▶ HTML String
//! Builder calls ────────▶│           │
//!                        └───────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use richup_core::{render, Node, Options};
//!
//! let body = vec![
//!     Node::heading(1, vec![Node::text("Hello World")]),
//!     Node::paragraph(vec![Node::text("Welcome.")]),
//! ];
//!
//! let html = render(&body, &Options::default()).unwrap();
//! assert_eq!(html, "<h1>Hello World</h1><p>Welcome.</p>");
//! ```

mod ast;
mod options;
mod render;

pub use ast::{
    HeadingNode, LinkNode, ListItemNode, ListNode, ListType, Node, ParagraphNode, RootNode,
    TextNode,
};
pub use options::{ClassMap, Options, Scoped, DEFAULT_SCOPED_CLASS};
pub use render::{render, MAX_DEPTH};

/// Error type for rendering operations
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Document nesting ran past [`MAX_DEPTH`]; rendering fails fast rather
    /// than truncating or exhausting the stack.
    #[error("document nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },
}
