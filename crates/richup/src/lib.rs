//! # richup
//!
//! Convert rich text schema trees to HTML.
//!
//! The schema is the typed JSON tree produced by rich text editors: nodes
//! tagged by `type` (`root`, `paragraph`, `heading`, `list`, `list-item`,
//! `link`, `text`), with ordered children and a `text` leaf carrying the
//! literal value.
//!
//! ## Design
//!
//! Conversion is split into two explicit steps:
//!
//! - **Normalization** turns any accepted input shape — a full tree, a
//!   single node, a node list, or serialized JSON — into one canonical
//!   node list, so the renderer never reinterprets its argument.
//! - **Rendering** walks that list recursively, dispatching each node to a
//!   per-type builder and concatenating the output in encounter order.
//!
//! Unknown node types are skipped silently, so forward-compatible schema
//! extensions degrade gracefully instead of failing the whole document.
//!
//! ## Example (JSON string)
//!
//! ```rust
//! use richup::{convert_schema_to_html, Options};
//!
//! let schema = r#"{"type":"root","children":[
//!     {"type":"paragraph","children":[{"type":"text","value":"Hello World"}]}
//! ]}"#;
//!
//! let html = convert_schema_to_html(schema, Options::default()).unwrap();
//! assert_eq!(html, "<p>Hello World</p>");
//! ```
//!
//! ## Example (node tree, scoped)
//!
//! ```rust
//! use richup::{convert_schema_to_html, Node};
//!
//! let doc = Node::root(vec![Node::heading(1, vec![Node::text("Hi")])]);
//!
//! let html = convert_schema_to_html(doc, "content-body").unwrap();
//! assert_eq!(html, "<div class=\"content-body\"><h1>Hi</h1></div>");
//! ```
//!
//! ## Example (HTML import)
//!
//! ```rust
//! use richup::{convert_html_to_schema, HtmlImportOptions, RichTextService};
//!
//! let schema = convert_html_to_schema("<p>Hello</p>", &HtmlImportOptions::default());
//! let html = RichTextService::new().convert(schema).unwrap();
//! assert_eq!(html, "<p>Hello</p>");
//! ```

#[cfg(feature = "html")]
pub mod html;
mod input;
mod service;

#[cfg(feature = "html")]
pub use html::{convert_html_to_schema, HtmlImportOptions};
pub use input::{normalize, NormalizedSchema, SchemaInput};
pub use richup_core::{
    render, ClassMap, HeadingNode, LinkNode, ListItemNode, ListNode, ListType, Node, Options,
    ParagraphNode, RenderError, RootNode, Scoped, TextNode, DEFAULT_SCOPED_CLASS, MAX_DEPTH,
};
pub use service::{convert_schema_to_html, RichTextService};

/// Error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Textual schema input was not valid JSON
    #[error("malformed schema input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The renderer rejected the tree
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
