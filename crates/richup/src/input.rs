//! Schema input normalization
//!
//! The public entry point accepts a document in several shapes: a full tree
//! rooted in a `root` node, a single body node, an already flattened node
//! list, or serialized JSON. Normalization turns each of them into one
//! canonical node list, so the renderer only ever consumes that form.

use richup_core::Node;

use crate::Result;

/// Accepted input shapes for schema conversion.
#[derive(Debug, Clone)]
pub enum SchemaInput {
    /// A single node, usually the `root` of a document tree
    Node(Node),
    /// An already flattened list of body nodes
    Nodes(Vec<Node>),
    /// A JSON document, parsed during normalization
    Json(String),
}

impl From<Node> for SchemaInput {
    fn from(node: Node) -> Self {
        SchemaInput::Node(node)
    }
}

impl From<Vec<Node>> for SchemaInput {
    fn from(nodes: Vec<Node>) -> Self {
        SchemaInput::Nodes(nodes)
    }
}

impl From<&str> for SchemaInput {
    fn from(json: &str) -> Self {
        SchemaInput::Json(json.to_string())
    }
}

impl From<String> for SchemaInput {
    fn from(json: String) -> Self {
        SchemaInput::Json(json)
    }
}

/// A normalized document: the body node list, plus whether it was unwrapped
/// from a `root` node. Scoped wrapping applies only to root documents.
#[derive(Debug, Clone)]
pub struct NormalizedSchema {
    pub nodes: Vec<Node>,
    pub from_root: bool,
}

/// Normalize any accepted input shape into a canonical node list.
///
/// Textual input is parsed as JSON first; a parse failure surfaces as
/// [`ConvertError::MalformedInput`](crate::ConvertError::MalformedInput).
pub fn normalize(input: SchemaInput) -> Result<NormalizedSchema> {
    match input {
        SchemaInput::Node(node) => Ok(normalize_node(node)),
        SchemaInput::Nodes(nodes) => Ok(NormalizedSchema {
            nodes,
            from_root: false,
        }),
        SchemaInput::Json(json) => {
            // The JSON may encode either a single node or a bare node list.
            let value: serde_json::Value = serde_json::from_str(&json)?;
            if value.is_array() {
                Ok(NormalizedSchema {
                    nodes: serde_json::from_value(value)?,
                    from_root: false,
                })
            } else {
                Ok(normalize_node(serde_json::from_value(value)?))
            }
        }
    }
}

fn normalize_node(node: Node) -> NormalizedSchema {
    match node {
        Node::Root(root) => NormalizedSchema {
            nodes: root.children,
            from_root: true,
        },
        other => NormalizedSchema {
            nodes: vec![other],
            from_root: false,
        },
    }
}
