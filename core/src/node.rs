#![deny(missing_docs)]

//! # Node Tree
//!
//! Presentational output of the renderers. Nodes are plain data; no escaping
//! happens here. Serialization to markup lives in [`crate::markup`].

use indexmap::IndexMap;
use serde::Serialize;

/// A presentational node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// A tagged element with attributes and children.
    Element(Element),
    /// Unescaped text content.
    Text(String),
    /// A sequence of sibling nodes without a wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    /// The empty fragment: what a renderer returns when it has nothing to draw.
    pub fn empty() -> Self {
        Node::Fragment(Vec::new())
    }

    /// A text node.
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// A fragment made of the given nodes, dropping empty ones.
    pub fn fragment(nodes: impl IntoIterator<Item = Node>) -> Self {
        Node::Fragment(nodes.into_iter().filter(|n| !n.is_empty()).collect())
    }

    /// True for empty text and for fragments containing only empty nodes.
    /// Elements are never empty, even without children.
    pub fn is_empty(&self) -> bool {
        match self {
            Node::Element(_) => false,
            Node::Text(text) => text.is_empty(),
            Node::Fragment(children) => children.iter().all(Node::is_empty),
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => el.children.iter().for_each(|c| c.collect_text(out)),
            Node::Fragment(children) => children.iter().for_each(|c| c.collect_text(out)),
        }
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::text(text)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An element node, built with chained setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Tag name, e.g. `div`.
    pub tag: String,
    /// Attributes in insertion order.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub attrs: IndexMap<String, String>,
    /// Child nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing an earlier value for the same name.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Shorthand for the `class` attribute.
    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    /// Appends a child unless it is empty.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        let node = node.into();
        if !node.is_empty() {
            self.children.push(node);
        }
        self
    }

    /// Appends an optional child.
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Appends every non-empty node.
    pub fn children(self, nodes: impl IntoIterator<Item = Node>) -> Self {
        nodes.into_iter().fold(self, |el, node| el.child(node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_detection() {
        assert!(Node::empty().is_empty());
        assert!(Node::text("").is_empty());
        assert!(Node::Fragment(vec![Node::empty(), Node::text("")]).is_empty());
        assert!(!Node::from(Element::new("hr")).is_empty());
    }

    #[test]
    fn test_builder_skips_empty_children() {
        let el = Element::new("p")
            .class("x")
            .child("")
            .child(Node::empty())
            .child_opt(None::<&str>)
            .child("hello");
        assert_eq!(el.children, vec![Node::text("hello")]);
        assert_eq!(el.attrs.get("class").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_text_content() {
        let node = Node::fragment([
            Element::new("span").child("a").into(),
            Node::text("b"),
        ]);
        assert_eq!(node.text_content(), "ab");
    }

    #[test]
    fn test_serializes_as_tree() {
        let node: Node = Element::new("p").child("hi").into();
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"element": {"tag": "p", "children": [{"text": "hi"}]}})
        );
    }
}
