//! HTML import support
//!
//! This module parses an HTML string and maps its body onto the rich text
//! schema, mirroring the renderer's tag vocabulary in the other direction.
//!
//! The import is lossy by construction: tags the schema cannot express
//! degrade to text leaves holding their raw inner markup, which preserves
//! information at the cost of structure. Bold/italic flags on bare text are
//! inferred from the immediate parent tag only; emphasis inherited through
//! nested wrappers is not detected.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Node as DomNode, Selector};

use richup_core::{LinkNode, ListType, Node, TextNode};

/// Options for HTML import
#[derive(Debug, Clone, Default)]
pub struct HtmlImportOptions {
    /// Tag renames applied before mapping, as `(from, to)` pairs
    pub replace_tags: Vec<(String, String)>,

    /// Strip literal line breaks from text content and drop `<br>` elements
    pub remove_line_breaks: bool,
}

static BODY: Lazy<Selector> = Lazy::new(|| Selector::parse("body").expect("valid selector"));

// Headings map through h5 only; h6 takes the fallback path.
static HEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^h([1-5])$").expect("valid regex"));

static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").expect("valid regex"));

/// Convert an HTML document to a rich text schema tree.
///
/// Parses the input, walks the `body` element recursively, and returns a
/// `root` node whose children mirror the body content.
///
/// # Example
///
/// ```rust
/// use richup::{convert_html_to_schema, HtmlImportOptions};
///
/// let node = convert_html_to_schema(
///     "<h1>Hello</h1><p>World</p>",
///     &HtmlImportOptions::default(),
/// );
/// assert_eq!(node.children().len(), 2);
/// ```
pub fn convert_html_to_schema(html: &str, options: &HtmlImportOptions) -> Node {
    let document = Html::parse_document(html);
    let children = document
        .select(&BODY)
        .next()
        .map(|body| convert_children(body, options))
        .unwrap_or_default();

    Node::root(children)
}

/// Convert the child nodes of an element
fn convert_children(element: ElementRef, options: &HtmlImportOptions) -> Vec<Node> {
    let parent_tag = mapped_tag(element.value().name(), options);
    let mut nodes = Vec::new();

    for child in element.children() {
        match child.value() {
            DomNode::Text(text) => {
                if let Some(leaf) = text_leaf(&text.text, parent_tag, options) {
                    nodes.push(leaf);
                }
            }
            DomNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    if let Some(node) = convert_element(child_element, options) {
                        nodes.push(node);
                    }
                }
            }
            _ => {}
        }
    }

    nodes
}

/// Convert a single element via the fixed tag table
fn convert_element(element: ElementRef, options: &HtmlImportOptions) -> Option<Node> {
    let tag = mapped_tag(element.value().name(), options);

    match tag {
        // Style and script subtrees contribute nothing, not even fallback text
        "style" | "script" => None,

        "p" => Some(Node::paragraph(convert_children(element, options))),

        "a" => Some(Node::Link(LinkNode {
            url: element.value().attr("href").map(str::to_string),
            title: element.value().attr("title").map(str::to_string),
            target: None,
            children: convert_children(element, options),
        })),

        "ol" => Some(Node::list(
            ListType::Ordered,
            convert_children(element, options),
        )),
        "ul" => Some(Node::list(
            ListType::Unordered,
            convert_children(element, options),
        )),
        "li" => Some(Node::list_item(convert_children(element, options))),

        // Emphasis elements flatten to a single flagged leaf
        "b" | "strong" => Some(Node::Text(TextNode {
            value: clean_text(&element.text().collect::<String>(), options),
            bold: true,
            italic: false,
        })),
        "em" => Some(Node::Text(TextNode {
            value: clean_text(&element.text().collect::<String>(), options),
            bold: false,
            italic: true,
        })),

        "br" => {
            if options.remove_line_breaks {
                None
            } else {
                Some(Node::text("\n"))
            }
        }

        other => {
            if let Some(captures) = HEADING_TAG.captures(other) {
                let level = captures[1].parse().unwrap_or(1);
                return Some(Node::heading(level, convert_children(element, options)));
            }

            // Pass-through fallback: keep the raw inner markup as text
            Some(Node::text(element.inner_html()))
        }
    }
}

/// Build a text leaf from a bare DOM text node. Whitespace-only nodes are
/// dropped so pretty-printed markup does not leak indentation into the
/// schema; flags come from the immediate parent tag.
fn text_leaf(text: &str, parent_tag: &str, options: &HtmlImportOptions) -> Option<Node> {
    if text.trim().is_empty() {
        return None;
    }

    Some(Node::Text(TextNode {
        value: clean_text(text, options),
        bold: matches!(parent_tag, "b" | "strong"),
        italic: parent_tag == "em",
    }))
}

fn clean_text(text: &str, options: &HtmlImportOptions) -> String {
    if options.remove_line_breaks {
        LINE_BREAKS.replace_all(text, "").into_owned()
    } else {
        text.to_string()
    }
}

/// Apply configured tag renames before table lookup
fn mapped_tag<'a>(tag: &'a str, options: &'a HtmlImportOptions) -> &'a str {
    options
        .replace_tags
        .iter()
        .find(|(from, _)| from.as_str() == tag)
        .map(|(_, to)| to.as_str())
        .unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RichTextService;
    use richup_core::HeadingNode;

    fn import(html: &str) -> Node {
        convert_html_to_schema(html, &HtmlImportOptions::default())
    }

    #[test]
    fn test_simple_paragraph() {
        let node = import("<p>Hello World</p>");
        assert_eq!(
            node,
            Node::root(vec![Node::paragraph(vec![Node::text("Hello World")])])
        );
    }

    #[test]
    fn test_headings_through_h5() {
        let node = import("<h1>a</h1><h5>b</h5>");
        assert_eq!(
            node.children(),
            &[
                Node::heading(1, vec![Node::text("a")]),
                Node::heading(5, vec![Node::text("b")]),
            ]
        );
    }

    #[test]
    fn test_h6_takes_fallback() {
        // The heading table stops at h5; h6 degrades to raw markup
        let node = import("<h6>deep</h6>");
        assert_eq!(node.children(), &[Node::text("deep")]);
        assert!(!matches!(node.children()[0], Node::Heading(_)));
    }

    #[test]
    fn test_link_captures_href_and_title() {
        let node = import(r#"<p><a href="https://example.com" title="Example">go</a></p>"#);

        let paragraph = &node.children()[0];
        assert_eq!(
            paragraph.children()[0],
            Node::Link(LinkNode {
                url: Some("https://example.com".to_string()),
                title: Some("Example".to_string()),
                target: None,
                children: vec![Node::text("go")],
            })
        );
    }

    #[test]
    fn test_lists() {
        let node = import("<ol><li>a</li></ol><ul><li>b</li></ul>");
        assert_eq!(
            node.children(),
            &[
                Node::list(ListType::Ordered, vec![Node::list_item(vec![Node::text("a")])]),
                Node::list(
                    ListType::Unordered,
                    vec![Node::list_item(vec![Node::text("b")])]
                ),
            ]
        );
    }

    #[test]
    fn test_emphasis_flattens_to_flagged_leaves() {
        let node = import("<p><strong>bold</strong><em>italic</em></p>");
        let paragraph = &node.children()[0];

        assert_eq!(
            paragraph.children(),
            &[
                Node::Text(TextNode {
                    value: "bold".to_string(),
                    bold: true,
                    italic: false,
                }),
                Node::Text(TextNode {
                    value: "italic".to_string(),
                    bold: false,
                    italic: true,
                }),
            ]
        );
    }

    #[test]
    fn test_nested_emphasis_is_flattened() {
        // Only the outer flag survives; the inner structure is lost
        let node = import("<p><strong>a <em>b</em></strong></p>");
        let paragraph = &node.children()[0];

        assert_eq!(
            paragraph.children(),
            &[Node::Text(TextNode {
                value: "a b".to_string(),
                bold: true,
                italic: false,
            })]
        );
    }

    #[test]
    fn test_unknown_tag_passes_through_as_markup() {
        let node = import("<section><p>x</p></section>");
        assert_eq!(node.children(), &[Node::text("<p>x</p>")]);
    }

    #[test]
    fn test_style_and_script_dropped() {
        let node = import("<p>a</p><style>p { color: red }</style><script>var x;</script>");
        assert_eq!(
            node.children(),
            &[Node::paragraph(vec![Node::text("a")])]
        );
    }

    #[test]
    fn test_whitespace_between_blocks_dropped() {
        let node = import("<p>a</p>\n   <p>b</p>");
        assert_eq!(node.children().len(), 2);
    }

    #[test]
    fn test_br_becomes_newline_leaf() {
        let node = import("<p>a<br>b</p>");
        let paragraph = &node.children()[0];
        assert_eq!(
            paragraph.children(),
            &[Node::text("a"), Node::text("\n"), Node::text("b")]
        );
    }

    #[test]
    fn test_remove_line_breaks() {
        let options = HtmlImportOptions {
            remove_line_breaks: true,
            ..Default::default()
        };
        let node = convert_html_to_schema("<p>one\ntwo<br>three</p>", &options);
        let paragraph = &node.children()[0];

        assert_eq!(
            paragraph.children(),
            &[Node::text("onetwo"), Node::text("three")]
        );
    }

    #[test]
    fn test_replace_tags() {
        let options = HtmlImportOptions {
            replace_tags: vec![("h6".to_string(), "h2".to_string())],
            ..Default::default()
        };
        let node = convert_html_to_schema("<h6>promoted</h6>", &options);

        assert_eq!(
            node.children(),
            &[Node::Heading(HeadingNode {
                level: Some(2),
                children: vec![Node::text("promoted")],
            })]
        );
    }

    #[test]
    fn test_import_then_render_round_trip() {
        let node = import("<h1>Hi</h1><ol><li>x</li></ol>");
        let html = RichTextService::new().convert(node).unwrap();
        assert_eq!(html, "<h1>Hi</h1><ol><li>x</li></ol>");
    }
}
