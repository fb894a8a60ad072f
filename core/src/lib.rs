#![deny(missing_docs)]

//! # OASDoc Core
//!
//! Renders an OpenAPI document into a tree of presentational nodes through a
//! registry of per-node-kind render functions that callers can override.
//!
//! ```no_run
//! use oasdoc_core::{default_registry, parse_document, render_html, theme, AppResult};
//!
//! fn build(yaml: &str) -> AppResult<String> {
//!     let document = parse_document(yaml)?;
//!     let registry = default_registry()?.with_overrides(&theme::tailwind());
//!     Ok(render_html(&registry, &document))
//! }
//! ```

/// Shared error types.
pub mod error;

/// Markup serialization of node trees.
pub mod markup;

/// Presentational node tree.
pub mod node;

/// OpenAPI document model and reference resolution.
pub mod oas;

/// Renderer table and dispatch.
pub mod registry;

/// Default node renderers.
pub mod render;

/// Ready-made override sets.
pub mod theme;

pub use error::{AppError, AppResult};
pub use markup::to_html;
pub use node::{Element, Node};
pub use oas::{parse_document, resolve, Document, RefChain, ResolvedSchema};
pub use registry::{NodeKind, NodeProps, RenderContext, Registry, RendererSet};
pub use render::{default_registry, default_renderers, render_document, render_html};
pub use theme::Theme;
