#![deny(missing_docs)]

//! # Payload Renderers
//!
//! Default renderers for `RequestBody`, `Responses` and `Response`. Bodies and
//! responses are where schema resolution starts, each from an empty chain.

use crate::node::{Element, Node};
use crate::oas::{resolve, Document, RefChain, ResolvedSchema, SchemaOrRef};
use crate::registry::RenderContext;
use crate::render::props::{RequestBodyProps, ResponseProps, ResponsesProps, SchemaProps};

/// Resolves a payload schema from a fresh chain.
///
/// Returns `None` when there is no schema or its reference does not resolve;
/// callers then draw nothing for the schema slot.
pub fn resolve_payload<'a>(
    document: &'a Document,
    schema_or_ref: Option<&'a SchemaOrRef>,
) -> Option<(ResolvedSchema<'a>, RefChain)> {
    let (schema, chain) = resolve(schema_or_ref?, document, &RefChain::new());
    if schema.is_absent() {
        None
    } else {
        Some((schema, chain))
    }
}

/// "Request Body" heading, description and schema of the JSON payload.
///
/// Renders nothing when there is no JSON schema or it does not resolve.
pub fn render_request_body(ctx: &RenderContext<'_>, props: &RequestBodyProps<'_>) -> Node {
    let request_body = props.request_body;
    let Some((schema, chain)) = resolve_payload(ctx.document(), request_body.json_schema()) else {
        return Node::empty();
    };

    Node::fragment([
        Element::new("h4").child("Request Body").into(),
        request_body
            .description
            .as_deref()
            .map(|d| Node::from(Element::new("p").child(d)))
            .unwrap_or_else(Node::empty),
        ctx.render(&SchemaProps {
            schema,
            chain: &chain,
        }),
    ])
}

/// "Responses" heading followed by each response in document order.
pub fn render_responses(ctx: &RenderContext<'_>, props: &ResponsesProps<'_>) -> Node {
    let responses = props
        .responses
        .iter()
        .map(|(status, response)| ctx.render(&ResponseProps { status, response }));

    let heading = Node::from(Element::new("h4").child("Responses"));
    Node::fragment(std::iter::once(heading).chain(responses))
}

/// Status and description line, then the JSON schema in a panel.
pub fn render_response(ctx: &RenderContext<'_>, props: &ResponseProps<'_>) -> Node {
    let response = props.response;
    let panel = resolve_payload(ctx.document(), response.json_schema()).map(|(schema, chain)| {
        Element::new("div").class("schema-panel").child(ctx.render(&SchemaProps {
            schema,
            chain: &chain,
        }))
    });

    Node::fragment([
        response_heading(props, None).into(),
        panel.map(Node::from).unwrap_or_else(Node::empty),
    ])
}

/// `h5` with the status code and, when present, the description.
///
/// `status_class` is appended to the status span's class list.
pub fn response_heading(props: &ResponseProps<'_>, status_class: Option<&str>) -> Element {
    let class = match status_class {
        Some(extra) => format!("status {}", extra),
        None => "status".to_string(),
    };

    Element::new("h5")
        .class("response")
        .child(Element::new("span").class(class).child(props.status))
        .child_opt(props.response.description.as_deref().map(|d| {
            Node::fragment([
                Node::text(" "),
                Element::new("span").class("description").child(d).into(),
            ])
        }))
}
