#![deny(missing_docs)]

//! # Node Props
//!
//! Typed inputs of each node kind. Props borrow from the document and are
//! created per call; nothing outlives a render pass.

use crate::oas::{
    Document, HttpMethod, Operation, PathItem, RefChain, RequestBody, ResolvedSchema, Response,
    SchemaOrRef,
};
use indexmap::IndexMap;

/// Props of [`NodeKind::Document`](crate::registry::NodeKind::Document).
#[derive(Debug, Clone, Copy)]
pub struct DocumentProps<'p> {
    /// The document to render.
    pub document: &'p Document,
}

/// Props of [`NodeKind::Operations`](crate::registry::NodeKind::Operations).
#[derive(Debug, Clone, Copy)]
pub struct OperationsProps<'p> {
    /// Path items in document order.
    pub paths: &'p IndexMap<String, PathItem>,
}

/// Props of [`NodeKind::Operation`](crate::registry::NodeKind::Operation).
#[derive(Debug, Clone, Copy)]
pub struct OperationProps<'p> {
    /// The HTTP method.
    pub method: HttpMethod,
    /// The path template.
    pub path: &'p str,
    /// The operation itself.
    pub operation: &'p Operation,
}

/// Props of [`NodeKind::RequestBody`](crate::registry::NodeKind::RequestBody).
#[derive(Debug, Clone, Copy)]
pub struct RequestBodyProps<'p> {
    /// The operation's request body.
    pub request_body: &'p RequestBody,
}

/// Props of [`NodeKind::Responses`](crate::registry::NodeKind::Responses).
#[derive(Debug, Clone, Copy)]
pub struct ResponsesProps<'p> {
    /// Responses keyed by status, in document order.
    pub responses: &'p IndexMap<String, Response>,
}

/// Props of [`NodeKind::Response`](crate::registry::NodeKind::Response).
#[derive(Debug, Clone, Copy)]
pub struct ResponseProps<'p> {
    /// Status code string as written (`"200"`, `"4XX"`, `"default"`).
    pub status: &'p str,
    /// The response.
    pub response: &'p Response,
}

/// Props of [`NodeKind::Schema`](crate::registry::NodeKind::Schema).
#[derive(Debug, Clone)]
pub struct SchemaProps<'p> {
    /// The already resolved schema.
    pub schema: ResolvedSchema<'p>,
    /// Reference chain that led to `schema`.
    pub chain: &'p RefChain,
}

/// Props of [`NodeKind::Property`](crate::registry::NodeKind::Property).
#[derive(Debug, Clone, Copy)]
pub struct PropertyProps<'p> {
    /// Property name.
    pub name: &'p str,
    /// Whether the parent schema lists the property as required.
    pub required: bool,
    /// The property's schema, not yet resolved.
    pub schema: &'p SchemaOrRef,
    /// Reference chain inherited from the parent schema.
    pub chain: &'p RefChain,
}
