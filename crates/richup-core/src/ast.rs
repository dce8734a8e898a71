//! Rich text schema tree
//!
//! This module defines the node types of the rich text schema. The tree is
//! internally tagged on `"type"`, so it deserializes straight from the JSON
//! an editor produces.

use serde::{Deserialize, Serialize};

/// A node in the rich text tree, tagged by `type`.
///
/// Every kind except `text` is a container owning an ordered child list;
/// `text` is the only leaf and carries the literal value. Unrecognized
/// `type` values collect into [`Node::Unknown`] and render to nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Document root; its children are the document body
    Root(RootNode),

    /// Paragraph container
    Paragraph(ParagraphNode),

    /// Heading with a level selecting `h1`..`h6`
    Heading(HeadingNode),

    /// Ordered or unordered list
    List(ListNode),

    /// Single list item
    ListItem(ListItemNode),

    /// Hyperlink with optional title and target
    Link(LinkNode),

    /// Text leaf with optional bold/italic flags
    Text(TextNode),

    /// Any unrecognized node type; skipped during rendering
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RootNode {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphNode {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A heading. `level` is expected to be 1-6; a missing level renders as an
/// `h0` tag rather than guessing a default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeadingNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListNode {
    /// Selects the list tag; anything but `ordered` is an `ul`
    #[serde(default, rename = "listType")]
    pub list_type: ListType,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// List flavour, selecting `ol` or `ul`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListType {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItemNode {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// A hyperlink. Absent or empty attributes are omitted from the output
/// entirely, never emitted as `attr=""`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// The text leaf. Both flags may be set at once, in which case the value is
/// wrapped `<strong><em>..</em></strong>` with strong outermost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    #[serde(default)]
    pub value: String,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub bold: bool,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub italic: bool,
}

impl Node {
    /// Create a `root` node
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(RootNode { children })
    }

    /// Create a `paragraph` node
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph(ParagraphNode { children })
    }

    /// Create a `heading` node with the given level
    pub fn heading(level: u8, children: Vec<Node>) -> Self {
        Node::Heading(HeadingNode {
            level: Some(level),
            children,
        })
    }

    /// Create a `list` node
    pub fn list(list_type: ListType, children: Vec<Node>) -> Self {
        Node::List(ListNode {
            list_type,
            children,
        })
    }

    /// Create a `list-item` node
    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem(ListItemNode { children })
    }

    /// Create a `link` node with a target URL
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link(LinkNode {
            url: Some(url.into()),
            title: None,
            target: None,
            children,
        })
    }

    /// Create a plain `text` leaf
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(TextNode {
            value: value.into(),
            bold: false,
            italic: false,
        })
    }

    /// Child nodes for container kinds; empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(n) => &n.children,
            Node::Paragraph(n) => &n.children,
            Node::Heading(n) => &n.children,
            Node::List(n) => &n.children,
            Node::ListItem(n) => &n.children,
            Node::Link(n) => &n.children,
            Node::Text(_) | Node::Unknown => &[],
        }
    }

    /// Check if this is a text leaf
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Check if this is a container node
    pub fn is_container(&self) -> bool {
        !matches!(self, Node::Text(_) | Node::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_paragraph() {
        let node: Node = serde_json::from_str(
            r#"{"type":"paragraph","children":[{"type":"text","value":"Hello"}]}"#,
        )
        .unwrap();

        assert_eq!(node, Node::paragraph(vec![Node::text("Hello")]));
    }

    #[test]
    fn test_parse_list_item_tag() {
        let node: Node =
            serde_json::from_str(r#"{"type":"list-item","children":[]}"#).unwrap();
        assert_eq!(node, Node::list_item(vec![]));
    }

    #[test]
    fn test_parse_heading_level() {
        let node: Node = serde_json::from_str(
            r#"{"type":"heading","level":4,"children":[{"type":"text","value":"Heading 4"}]}"#,
        )
        .unwrap();
        assert_eq!(node, Node::heading(4, vec![Node::text("Heading 4")]));
    }

    #[test]
    fn test_parse_list_type() {
        let ordered: Node =
            serde_json::from_str(r#"{"type":"list","listType":"ordered","children":[]}"#)
                .unwrap();
        assert_eq!(ordered, Node::list(ListType::Ordered, vec![]));

        // Absent listType falls back to unordered
        let bare: Node = serde_json::from_str(r#"{"type":"list","children":[]}"#).unwrap();
        assert_eq!(bare, Node::list(ListType::Unordered, vec![]));
    }

    #[test]
    fn test_parse_text_flags() {
        let node: Node =
            serde_json::from_str(r#"{"type":"text","value":"x","bold":true,"italic":true}"#)
                .unwrap();
        assert_eq!(
            node,
            Node::Text(TextNode {
                value: "x".to_string(),
                bold: true,
                italic: true,
            })
        );

        let plain: Node = serde_json::from_str(r#"{"type":"text","value":"x"}"#).unwrap();
        assert_eq!(plain, Node::text("x"));
    }

    #[test]
    fn test_parse_unknown_type() {
        let node: Node = serde_json::from_str(r#"{"type":"video","src":"clip.mp4"}"#).unwrap();
        assert_eq!(node, Node::Unknown);
    }

    #[test]
    fn test_parse_missing_children() {
        let node: Node = serde_json::from_str(r#"{"type":"root"}"#).unwrap();
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let doc = Node::root(vec![
            Node::heading(1, vec![Node::text("Hi")]),
            Node::Link(LinkNode {
                url: Some("https://example.com".to_string()),
                title: Some("Example".to_string()),
                target: None,
                children: vec![Node::text("link")],
            }),
        ]);

        let json = serde_json::to_string(&doc).unwrap();
        let parsed: Node = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
        // Omitted optional fields stay omitted
        assert!(!json.contains("target"));
        assert!(!json.contains("bold"));
    }

    #[test]
    fn test_accessors() {
        let list = Node::list(ListType::Ordered, vec![Node::list_item(vec![])]);
        assert!(list.is_container());
        assert_eq!(list.children().len(), 1);

        let text = Node::text("x");
        assert!(text.is_text());
        assert!(text.children().is_empty());
    }
}
