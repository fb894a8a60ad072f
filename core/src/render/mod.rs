#![deny(missing_docs)]

//! # Node Renderers
//!
//! One default render function per node kind, plus the props each consumes.
//!
//! - **document**: `Document`, `Operations`, `Operation`.
//! - **body**: `RequestBody`, `Responses`, `Response`.
//! - **schema**: `Schema`, `Property`.
//!
//! Renderers only reach children through the registry, so the functions here
//! can be freely mixed with caller supplied overrides, or wrapped by them.

pub mod body;
pub mod document;
pub mod props;
pub mod schema;

pub use body::{render_request_body, render_response, render_responses, resolve_payload};
pub use document::{render_operation, render_operations, render_page};
pub use props::{
    DocumentProps, OperationProps, OperationsProps, PropertyProps, RequestBodyProps,
    ResponseProps, ResponsesProps, SchemaProps,
};
pub use schema::{render_property, render_schema};

use crate::error::AppResult;
use crate::markup::to_html;
use crate::node::Node;
use crate::oas::Document;
use crate::registry::{Registry, RendererSet};

/// The complete set of default renderers.
pub fn default_renderers() -> RendererSet {
    RendererSet::new()
        .document(render_page)
        .operations(render_operations)
        .operation(render_operation)
        .request_body(render_request_body)
        .responses(render_responses)
        .response(render_response)
        .schema(render_schema)
        .property(render_property)
}

/// A registry holding the default renderers.
pub fn default_registry() -> AppResult<Registry> {
    Registry::build(default_renderers())
}

/// Renders the whole document through `registry`.
pub fn render_document(registry: &Registry, document: &Document) -> Node {
    registry.render(document, &DocumentProps { document })
}

/// Renders the whole document and serializes it to HTML.
pub fn render_html(registry: &Registry, document: &Document) -> String {
    to_html(&render_document(registry, document))
}
