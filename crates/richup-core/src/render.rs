//! Schema tree to HTML rendering
//!
//! Converts a canonical node list into a flat HTML string. Child order is
//! preserved and builder output is concatenated with no separator.

use crate::ast::{HeadingNode, LinkNode, ListNode, ListType, Node, TextNode};
use crate::options::Options;
use crate::RenderError;

/// Maximum nesting depth before rendering fails with
/// [`RenderError::DepthExceeded`]. Matches the default recursion limit of
/// the JSON parser feeding this tree.
pub const MAX_DEPTH: usize = 128;

/// Render a node list to an HTML string.
///
/// Dispatches each node to its builder in encounter order. Unknown node
/// types contribute nothing, leaving siblings and ordering untouched, so
/// forward-compatible schema extensions degrade gracefully.
pub fn render(nodes: &[Node], options: &Options) -> Result<String, RenderError> {
    let mut output = String::with_capacity(256);
    render_nodes(nodes, options, 0, &mut output)?;
    Ok(output)
}

fn render_nodes(
    nodes: &[Node],
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    if depth > MAX_DEPTH {
        return Err(RenderError::DepthExceeded { max: MAX_DEPTH });
    }

    for node in nodes {
        render_node(node, options, depth, out)?;
    }
    Ok(())
}

fn render_node(
    node: &Node,
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    match node {
        Node::Paragraph(paragraph) => {
            render_element("p", &[], &paragraph.children, options, depth, out)
        }
        Node::Heading(heading) => render_heading(heading, options, depth, out),
        Node::List(list) => render_list(list, options, depth, out),
        Node::ListItem(item) => render_element("li", &[], &item.children, options, depth, out),
        Node::Link(link) => render_link(link, options, depth, out),
        Node::Text(text) => {
            render_text(text, options, out);
            Ok(())
        }
        // A root has no element form of its own, and unknown types are
        // skipped by policy.
        Node::Root(_) | Node::Unknown => Ok(()),
    }
}

fn render_heading(
    heading: &HeadingNode,
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    // A heading without a level degrades visibly to an `h0` tag.
    let tag = format!("h{}", heading.level.unwrap_or(0));
    render_element(&tag, &[], &heading.children, options, depth, out)
}

fn render_list(
    list: &ListNode,
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    let tag = match list.list_type {
        ListType::Ordered => "ol",
        ListType::Unordered => "ul",
    };
    render_element(tag, &[], &list.children, options, depth, out)
}

fn render_link(
    link: &LinkNode,
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    let attributes = [
        ("href", link.url.as_deref()),
        ("title", link.title.as_deref()),
        ("target", link.target.as_deref()),
    ];
    render_element("a", &attributes, &link.children, options, depth, out)
}

fn render_text(text: &TextNode, options: &Options, out: &mut String) {
    if text.bold {
        open_tag("strong", &[], options, out);
    }
    if text.italic {
        open_tag("em", &[], options, out);
    }

    push_text_value(&text.value, options.new_line_to_break, out);

    if text.italic {
        close_tag("em", out);
    }
    if text.bold {
        close_tag("strong", out);
    }
}

fn push_text_value(value: &str, new_line_to_break: bool, out: &mut String) {
    if new_line_to_break {
        for (i, line) in value.split('\n').enumerate() {
            if i > 0 {
                out.push_str("<br>");
            }
            out.push_str(line);
        }
    } else {
        out.push_str(value);
    }
}

/// Append `<tag ..>children..</tag>`, recursing into the children.
fn render_element(
    tag: &str,
    attributes: &[(&str, Option<&str>)],
    children: &[Node],
    options: &Options,
    depth: usize,
    out: &mut String,
) -> Result<(), RenderError> {
    open_tag(tag, attributes, options, out);
    render_nodes(children, options, depth + 1, out)?;
    close_tag(tag, out);
    Ok(())
}

fn open_tag(tag: &str, attributes: &[(&str, Option<&str>)], options: &Options, out: &mut String) {
    out.push('<');
    out.push_str(tag);

    for &(name, value) in attributes {
        if let Some(value) = value.filter(emits) {
            push_attribute(name, value, out);
        }
    }
    if let Some(class) = options.class_for(tag) {
        push_attribute("class", class, out);
    }

    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

/// An attribute is emitted only when its value is present and non-empty,
/// never as `attr=""`.
fn emits(value: &&str) -> bool {
    !value.is_empty()
}

fn push_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}
