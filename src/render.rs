//! Text outline of a syntax tree.
//!
//! A leaf prints its value; a group prints its label (the value, or
//! `*` when untitled) followed by its children in order.

use crate::tree::Node;

/// Label printed for groups without a value.
pub const UNTITLED: &str = "*";

/// Render `node` as an indented outline with box-drawing connectors.
#[must_use]
pub fn render(node: &Node) -> String {
    let mut out = String::new();
    out.push_str(label(node));
    out.push('\n');
    render_children(&mut out, node, "");
    out
}

fn label(node: &Node) -> &str {
    node.value.as_deref().unwrap_or(UNTITLED)
}

fn render_children(out: &mut String, node: &Node, prefix: &str) {
    let count = node.children.len();

    for (i, child) in node.children.iter().enumerate() {
        let last = i + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(label(child));
        out.push('\n');

        let nested = format!("{prefix}{}", if last { "    " } else { "│   " });
        render_children(out, child, &nested);
    }
}
