#![deny(missing_docs)]

//! # Markup Serialization
//!
//! Flattens a [`Node`] tree into HTML. This is the only place escaping happens:
//! text with HTML text rules, attribute values with double-quoted attribute rules.
//! Output is compact; formatting is left to an external pretty-printer.

use crate::node::{Element, Node};

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Serializes `node` to an HTML string.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_html(node, &mut out);
    out
}

/// Appends the HTML for `node` to `out`.
pub fn write_html(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
        Node::Fragment(children) => children.iter().for_each(|c| write_html(c, out)),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);
    for (name, value) in &el.attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&el.tag.as_str()) {
        return;
    }

    for child in &el.children {
        write_html(child, out);
    }
    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escapes_text_once() {
        let node: Node = Element::new("p").child("a < b & \"c\"").into();
        assert_eq!(to_html(&node), "<p>a &lt; b &amp; \"c\"</p>");
    }

    #[test]
    fn test_escapes_attributes() {
        let node: Node = Element::new("span").attr("title", "say \"hi\" & <go>").into();
        assert_eq!(
            to_html(&node),
            "<span title=\"say &quot;hi&quot; &amp; &lt;go&gt;\"></span>"
        );
    }

    #[test]
    fn test_void_elements_and_fragments() {
        let node = Node::fragment([
            Element::new("hr").class("rule").into(),
            Element::new("meta").attr("charset", "utf-8").into(),
            Node::text("tail"),
        ]);
        assert_eq!(
            to_html(&node),
            "<hr class=\"rule\"><meta charset=\"utf-8\">tail"
        );
    }

    #[test]
    fn test_empty_fragment_is_empty_string() {
        assert_eq!(to_html(&Node::empty()), "");
    }
}
