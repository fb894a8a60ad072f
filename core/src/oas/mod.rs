#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Deserialization model and loader.
//! - **refs**: `$ref` resolution with per-branch cycle detection.

pub mod document;
pub mod refs;

pub use document::{
    parse_document, Components, Document, HttpMethod, Info, MediaType, Operation, PathItem,
    Reference, RequestBody, Response, Schema, SchemaOrRef, SchemaType, ANY_SCHEMA,
    JSON_MEDIA_TYPE,
};
pub use refs::{resolve, RefChain, ResolvedSchema};
