#![deny(missing_docs)]

//! # Themes
//!
//! Ready-made override sets layered over the default registry.
//!
//! The Tailwind theme restyles the page, operation and response renderers and
//! leaves schema drawing to whatever the base registry holds.

use crate::node::{Element, Node};
use crate::oas::HttpMethod;
use crate::registry::{RenderContext, RendererSet};
use crate::render::body::{resolve_payload, response_heading};
use crate::render::document::{document_header, operation_heading};
use crate::render::{
    DocumentProps, OperationProps, OperationsProps, RequestBodyProps, ResponseProps,
    ResponsesProps, SchemaProps,
};
use std::fmt;
use std::str::FromStr;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// Named override sets selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default renderers only.
    #[default]
    Plain,
    /// Tailwind utility classes.
    Tailwind,
}

impl Theme {
    /// The override set for this theme. `Plain` is empty.
    pub fn overrides(&self) -> RendererSet {
        match self {
            Theme::Plain => RendererSet::new(),
            Theme::Tailwind => tailwind(),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Theme::Plain),
            "tailwind" => Ok(Theme::Tailwind),
            other => Err(format!("Unknown theme '{}' (expected plain or tailwind)", other)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Plain => f.write_str("plain"),
            Theme::Tailwind => f.write_str("tailwind"),
        }
    }
}

/// Tailwind overrides for `Document`, `Operation` and `Response`.
pub fn tailwind() -> RendererSet {
    RendererSet::new()
        .document(tailwind_page)
        .operation(tailwind_operation)
        .response(tailwind_response)
}

/// Text colour class for an HTTP method.
pub fn method_color(method: HttpMethod) -> &'static str {
    match method {
        HttpMethod::Get => "text-green-500",
        HttpMethod::Post => "text-blue-500",
        HttpMethod::Put => "text-yellow-500",
        HttpMethod::Delete => "text-red-500",
        HttpMethod::Head => "text-gray-500",
        HttpMethod::Options => "text-purple-500",
        HttpMethod::Patch => "text-teal-500",
        HttpMethod::Trace => "text-indigo-500",
    }
}

/// Text colour class for a status code string.
///
/// Ranges follow the leading digit, so `2XX` is green like `200`;
/// `default` and anything unrecognised is grey.
pub fn status_color(status: &str) -> &'static str {
    match status.chars().next() {
        Some('2') => "text-green-600",
        Some('3') => "text-blue-300",
        Some('4') | Some('5') => "text-red-500",
        _ => "text-gray-500",
    }
}

fn tailwind_page(ctx: &RenderContext<'_>, props: &DocumentProps<'_>) -> Node {
    let document = props.document;
    let operations = if document.has_paths() {
        ctx.render(&OperationsProps {
            paths: &document.paths,
        })
    } else {
        Node::empty()
    };

    Element::new("html")
        .child(
            Element::new("head")
                .child(Element::new("meta").attr("charset", "utf-8"))
                .child(Element::new("title").child(document.info.title.as_str()))
                .child(Element::new("script").attr("src", TAILWIND_CDN)),
        )
        .child(
            Element::new("body").child(
                Element::new("div")
                    .class("p-4 flex flex-col gap-2 container mx-auto")
                    .child(document_header(&document.info).class("mt-16"))
                    .child(Element::new("main").class("operations").child(operations)),
            ),
        )
        .into()
}

fn tailwind_operation(ctx: &RenderContext<'_>, props: &OperationProps<'_>) -> Node {
    let operation = props.operation;
    let mut heading = operation_heading(props).class("font-mono text-4xl mt-4");
    if let Some(Node::Element(method)) = heading.children.first_mut() {
        method.attrs.insert(
            "class".to_string(),
            format!("method font-bold uppercase {}", method_color(props.method)),
        );
    }

    Node::fragment([
        Element::new("hr").class("mt-8 border-black/70").into(),
        heading.into(),
        operation
            .title()
            .map(|t| Node::from(Element::new("p").class("summary").child(t)))
            .unwrap_or_else(Node::empty),
        operation
            .description
            .as_deref()
            .map(|d| Node::from(Element::new("p").class("description text-black/50").child(d)))
            .unwrap_or_else(Node::empty),
        operation
            .request_body
            .as_ref()
            .map(|request_body| ctx.render(&RequestBodyProps { request_body }))
            .unwrap_or_else(Node::empty),
        operation
            .responses
            .as_ref()
            .map(|responses| ctx.render(&ResponsesProps { responses }))
            .unwrap_or_else(Node::empty),
    ])
}

fn tailwind_response(ctx: &RenderContext<'_>, props: &ResponseProps<'_>) -> Node {
    let color = format!("font-mono font-bold {}", status_color(props.status));
    let panel = resolve_payload(ctx.document(), props.response.json_schema()).map(
        |(schema, chain)| {
            Element::new("div")
                .class("schema-panel rounded-xl bg-slate-100 p-4 mb-4")
                .child(ctx.render(&SchemaProps {
                    schema,
                    chain: &chain,
                }))
        },
    );

    Node::fragment([
        response_heading(props, Some(color.as_str())).into(),
        panel.map(Node::from).unwrap_or_else(Node::empty),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oas::parse_document;
    use crate::registry::NodeKind;
    use crate::render::{default_registry, render_html};

    const DOC: &str = r#"
info: {title: Styled, version: '2'}
paths:
  /pets:
    delete:
      operationId: removePet
      responses:
        '404': {description: Not found}
        default: {description: Oops}
"#;

    #[test]
    fn test_tailwind_overrides_three_kinds() {
        assert_eq!(
            tailwind().kinds(),
            vec![NodeKind::Document, NodeKind::Operation, NodeKind::Response]
        );
        assert!(Theme::Plain.overrides().is_empty());
    }

    #[test]
    fn test_tailwind_page() {
        let doc = parse_document(DOC).unwrap();
        let registry = default_registry().unwrap().with_overrides(&tailwind());
        let html = render_html(&registry, &doc);

        assert!(html.contains("<script src=\"https://cdn.tailwindcss.com\"></script>"));
        assert!(html.contains("<span class=\"method font-bold uppercase text-red-500\">DELETE</span>"));
        assert!(html.contains("<span class=\"status font-mono font-bold text-red-500\">404</span>"));
        assert!(html.contains("<span class=\"status font-mono font-bold text-gray-500\">default</span>"));
        assert!(html.contains("<hr class=\"mt-8 border-black/70\">"));
    }

    #[test]
    fn test_colors() {
        assert_eq!(status_color("201"), "text-green-600");
        assert_eq!(status_color("2XX"), "text-green-600");
        assert_eq!(status_color("302"), "text-blue-300");
        assert_eq!(status_color("500"), "text-red-500");
        assert_eq!(status_color("default"), "text-gray-500");
        assert_eq!(method_color(HttpMethod::Patch), "text-teal-500");
    }

    #[test]
    fn test_theme_from_str() {
        assert_eq!("Tailwind".parse::<Theme>().unwrap(), Theme::Tailwind);
        assert_eq!("plain".parse::<Theme>().unwrap(), Theme::Plain);
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Tailwind.to_string(), "tailwind");
    }
}
