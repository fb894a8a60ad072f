#![deny(missing_docs)]

//! # Document Level Renderers
//!
//! Default renderers for `Document`, `Operations` and `Operation`.

use crate::node::{Element, Node};
use crate::oas::Info;
use crate::registry::RenderContext;
use crate::render::props::{
    DocumentProps, OperationProps, OperationsProps, RequestBodyProps, ResponsesProps,
};

/// Page skeleton: title header, then the operations section.
///
/// The operations section is always present; it stays empty when the
/// document declares no paths.
pub fn render_page(ctx: &RenderContext<'_>, props: &DocumentProps<'_>) -> Node {
    let info = &props.document.info;
    let operations = if props.document.has_paths() {
        ctx.render(&OperationsProps {
            paths: &props.document.paths,
        })
    } else {
        Node::empty()
    };

    Element::new("html")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").child(info.title.as_str())),
        )
        .child(
            Element::new("body")
                .child(document_header(info))
                .child(Element::new("main").class("operations").child(operations)),
        )
        .into()
}

/// `h1` with title and version, followed by the description.
pub fn document_header(info: &Info) -> Element {
    let version = (!info.version.is_empty())
        .then(|| Element::new("span").class("version").child(info.version.as_str()));

    Element::new("header")
        .child(
            Element::new("h1")
                .child(info.title.as_str())
                .child_opt(version.map(|v| Node::fragment([Node::text(" "), v.into()]))),
        )
        .child_opt(
            info.description
                .as_deref()
                .map(|d| Element::new("p").class("description").child(d)),
        )
}

/// Every operation of every path, paths first, then methods, both in
/// document order.
pub fn render_operations(ctx: &RenderContext<'_>, props: &OperationsProps<'_>) -> Node {
    Node::fragment(props.paths.iter().flat_map(|(path, item)| {
        item.operations.iter().map(move |(method, operation)| {
            ctx.render(&OperationProps {
                method: *method,
                path: path.as_str(),
                operation,
            })
        })
    }))
}

/// Method and path heading, summary and description, then the request body
/// and responses when the operation has them.
pub fn render_operation(ctx: &RenderContext<'_>, props: &OperationProps<'_>) -> Node {
    let operation = props.operation;
    let request_body = operation
        .request_body
        .as_ref()
        .map(|request_body| ctx.render(&RequestBodyProps { request_body }));
    let responses = operation
        .responses
        .as_ref()
        .map(|responses| ctx.render(&ResponsesProps { responses }));

    Element::new("section")
        .class("operation")
        .child(operation_heading(props))
        .child_opt(
            operation
                .title()
                .map(|t| Element::new("p").class("summary").child(t)),
        )
        .child_opt(
            operation
                .description
                .as_deref()
                .map(|d| Element::new("p").class("description").child(d)),
        )
        .child_opt(request_body)
        .child_opt(responses)
        .into()
}

/// `h2` holding the upper-cased method and the path.
pub fn operation_heading(props: &OperationProps<'_>) -> Element {
    Element::new("h2")
        .child(
            Element::new("span")
                .class("method")
                .child(props.method.as_str().to_uppercase()),
        )
        .child(" ")
        .child(Element::new("span").class("path").child(props.path))
}
