#![deny(missing_docs)]

//! # Reference Resolution
//!
//! Resolves `SchemaOrRef` values against `components.schemas` while tracking
//! the chain of reference names entered on the current path from the root.
//!
//! The chain is a value, not shared state: every call hands back a new chain
//! and callers thread it down one branch only. Two siblings resolved from the
//! same parent chain never see each other's history, so a schema reached by
//! two independent paths expands fully on both.

use crate::oas::document::{Document, Reference, Schema, SchemaOrRef, ANY_SCHEMA};
use percent_encoding::percent_decode_str;
use std::fmt;
use tracing::debug;

const SCHEMA_POINTER_PREFIX: &str = "#/components/schemas/";

/// Ordered reference names entered from the root down to the current node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefChain(Vec<String>);

impl RefChain {
    /// An empty chain, the starting point for every body and response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `name` was already entered on this path.
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Returns a new chain extended with `name`; `self` is left untouched.
    pub fn with(&self, name: &str) -> Self {
        let mut names = self.0.clone();
        names.push(name.to_string());
        Self(names)
    }

    /// Names in the order they were entered.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Number of references on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no reference has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RefChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" -> "))
    }
}

/// Outcome of resolving a `SchemaOrRef`.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedSchema<'a> {
    /// A concrete schema, inline or found in the registry.
    Concrete(&'a Schema),
    /// The named reference is already on the active chain.
    Circular(String),
    /// The reference did not resolve.
    Absent,
}

impl<'a> ResolvedSchema<'a> {
    /// The concrete schema, if any.
    pub fn schema(&self) -> Option<&'a Schema> {
        match self {
            ResolvedSchema::Concrete(schema) => Some(*schema),
            _ => None,
        }
    }

    /// True for `Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, ResolvedSchema::Absent)
    }

    /// True when a nested schema section is worth drawing: an object schema
    /// or a circular marker.
    pub fn is_expandable(&self) -> bool {
        match self {
            ResolvedSchema::Concrete(schema) => schema.is_object(),
            ResolvedSchema::Circular(_) => true,
            ResolvedSchema::Absent => false,
        }
    }
}

/// Resolves `schema_or_ref` against the document's named schemas.
///
/// * Inline schemas come back unchanged with the chain untouched.
/// * Boolean schemas come back as [`ANY_SCHEMA`], chain untouched.
/// * A reference whose name is already on `chain` yields `Circular(name)` and
///   the unchanged chain; resolution stops at that edge.
/// * An unknown name yields `Absent`.
/// * Otherwise the named schema is returned with `chain + [name]`. A named
///   entry that is itself a `$ref` is followed with the extended chain.
pub fn resolve<'a>(
    schema_or_ref: &'a SchemaOrRef,
    document: &'a Document,
    chain: &RefChain,
) -> (ResolvedSchema<'a>, RefChain) {
    match schema_or_ref {
        SchemaOrRef::Schema(schema) => (ResolvedSchema::Concrete(schema), chain.clone()),
        SchemaOrRef::Ref(reference) => resolve_reference(reference, document, chain),
        SchemaOrRef::Bool(_) => (ResolvedSchema::Concrete(&ANY_SCHEMA), chain.clone()),
    }
}

fn resolve_reference<'a>(
    reference: &'a Reference,
    document: &'a Document,
    chain: &RefChain,
) -> (ResolvedSchema<'a>, RefChain) {
    let Some(name) = schema_ref_name(&reference.ref_path) else {
        debug!(reference = %reference.ref_path, "Ignoring non-local schema reference");
        return (ResolvedSchema::Absent, chain.clone());
    };

    if chain.contains(&name) {
        debug!(%name, %chain, "Circular schema reference");
        return (ResolvedSchema::Circular(name), chain.clone());
    }

    match document.schema_named(&name) {
        Some(found) => resolve(found, document, &chain.with(&name)),
        None => {
            debug!(%name, "Schema reference not found in components");
            (ResolvedSchema::Absent, chain.clone())
        }
    }
}

/// Extracts the component name from `#/components/schemas/{name}`.
///
/// Returns `None` for any other pointer shape, including external documents
/// and other component sections.
pub fn schema_ref_name(ref_path: &str) -> Option<String> {
    let encoded = ref_path.strip_prefix(SCHEMA_POINTER_PREFIX)?;
    if encoded.is_empty() || encoded.contains('/') {
        return None;
    }
    Some(decode_pointer_segment(encoded))
}

/// Decodes a JSON Pointer segment (handles `~1`, `~0` and percent-encoding).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
