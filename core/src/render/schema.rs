#![deny(missing_docs)]

//! # Schema Renderers
//!
//! Default renderers for `Schema` and `Property`. Together they walk nested
//! object graphs one level at a time: `Schema` emits a `Property` per entry,
//! and `Property` resolves its own value and re-enters `Schema` when that value
//! is an object or a circular marker.

use crate::node::{Element, Node};
use crate::oas::{resolve, ResolvedSchema};
use crate::registry::RenderContext;
use crate::render::props::{PropertyProps, SchemaProps};

/// Draws a resolved schema.
///
/// * `Circular` draws the marker and stops.
/// * `Absent` draws nothing.
/// * A concrete schema draws its description and one `Property` per entry,
///   forwarding the current chain; with neither it draws nothing.
pub fn render_schema(ctx: &RenderContext<'_>, props: &SchemaProps<'_>) -> Node {
    let schema = match &props.schema {
        ResolvedSchema::Absent => return Node::empty(),
        ResolvedSchema::Circular(name) => return circular_marker(name).into(),
        ResolvedSchema::Concrete(schema) => *schema,
    };

    let properties = schema.properties.iter().flatten().map(|(name, value)| {
        ctx.render(&PropertyProps {
            name,
            required: schema.is_required(name),
            schema: value,
            chain: props.chain,
        })
    });

    let body = Element::new("div")
        .class("schema")
        .child_opt(
            schema
                .description
                .as_deref()
                .map(|d| Element::new("p").class("description").child(d)),
        )
        .children(properties);

    if body.children.is_empty() {
        Node::empty()
    } else {
        body.into()
    }
}

/// Property line (name, type, required mark), followed by the nested schema
/// when the value resolves to an object or is circular.
pub fn render_property(ctx: &RenderContext<'_>, props: &PropertyProps<'_>) -> Node {
    let (resolved, chain) = resolve(props.schema, ctx.document(), props.chain);

    let line = property_line(props, &resolved);
    let nested = resolved.is_expandable().then(|| {
        Element::new("div").class("nested").child(ctx.render(&SchemaProps {
            schema: resolved,
            chain: &chain,
        }))
    });

    Element::new("div")
        .class("property")
        .child(line)
        .child_opt(nested)
        .into()
}

/// `p` holding `name:`, the type tag when the value resolves to a typed schema,
/// and `*` when required.
pub fn property_line(props: &PropertyProps<'_>, resolved: &ResolvedSchema<'_>) -> Element {
    let type_tag = resolved
        .schema()
        .and_then(|s| s.schema_type.as_ref())
        .map(|t| Element::new("span").class("type").child(t.to_string()));
    let required = props
        .required
        .then(|| Element::new("span").class("required").child("*"));

    Element::new("p")
        .child(
            Element::new("span")
                .class("name")
                .child(format!("{}:", props.name)),
        )
        .child_opt(type_tag.map(spaced))
        .child_opt(required.map(spaced))
}

/// The stop marker drawn in place of a schema that re-enters its own chain.
pub fn circular_marker(name: &str) -> Element {
    Element::new("p")
        .class("circular")
        .child("Circular reference to ")
        .child(Element::new("span").class("ref").child(name))
}

fn spaced(el: Element) -> Node {
    Node::fragment([Node::text(" "), el.into()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::to_html;
    use crate::oas::{parse_document, Document, RefChain, Reference, SchemaOrRef};
    use crate::render::default_registry;
    use pretty_assertions::assert_eq;

    const DOC: &str = r#"
info: {title: T, version: '1'}
components:
  schemas:
    Node:
      type: object
      required: [value]
      properties:
        value: {type: string}
        next: {$ref: '#/components/schemas/Node'}
        ghost: {$ref: '#/components/schemas/Ghost'}
    Leaf:
      type: string
      description: Just text
    Bare:
      type: integer
"#;

    fn render_named(doc: &Document, name: &str) -> String {
        let registry = default_registry().unwrap();
        let root = SchemaOrRef::Ref(Reference::to_schema(name));
        let (schema, chain) = resolve(&root, doc, &RefChain::new());
        to_html(&registry.render(
            doc,
            &SchemaProps {
                schema,
                chain: &chain,
            },
        ))
    }

    #[test]
    fn test_self_reference_stops_at_marker() {
        let doc = parse_document(DOC).unwrap();
        let html = render_named(&doc, "Node");
        assert_eq!(
            html,
            "<div class=\"schema\">\
             <div class=\"property\"><p><span class=\"name\">value:</span> <span class=\"type\">string</span> <span class=\"required\">*</span></p></div>\
             <div class=\"property\"><p><span class=\"name\">next:</span></p>\
             <div class=\"nested\"><p class=\"circular\">Circular reference to <span class=\"ref\">Node</span></p></div></div>\
             <div class=\"property\"><p><span class=\"name\">ghost:</span></p></div>\
             </div>"
        );
    }

    #[test]
    fn test_leaf_schema_renders_description_only() {
        let doc = parse_document(DOC).unwrap();
        assert_eq!(
            render_named(&doc, "Leaf"),
            "<div class=\"schema\"><p class=\"description\">Just text</p></div>"
        );
    }

    #[test]
    fn test_bare_scalar_renders_nothing() {
        let doc = parse_document(DOC).unwrap();
        assert_eq!(render_named(&doc, "Bare"), "");
        assert_eq!(render_named(&doc, "Ghost"), "");
    }

    #[test]
    fn test_circular_marker_text() {
        assert_eq!(
            Node::from(circular_marker("A")).text_content(),
            "Circular reference to A"
        );
    }
}
