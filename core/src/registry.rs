#![deny(missing_docs)]

//! # Render Registry
//!
//! The table mapping each node kind to the function that draws it.
//!
//! - [`RendererSet`] is a partial table used both to build a registry and to
//!   describe overrides.
//! - [`Registry`] is a complete table. It is immutable: [`Registry::with_overrides`]
//!   returns a new value sharing the untouched entries with its base.
//! - Renderers reach their children through [`RenderContext::render`], never by
//!   calling another renderer directly, so an override reaches every call site,
//!   recursive ones included.
//!
//! Dispatch is selected by the props type ([`NodeProps`]), so a kind without a
//! slot cannot be named and a complete registry cannot miss one.

use crate::error::{AppError, AppResult};
use crate::node::Node;
use crate::oas::Document;
use crate::render::{
    DocumentProps, OperationProps, OperationsProps, PropertyProps, RequestBodyProps,
    ResponseProps, ResponsesProps, SchemaProps,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// The node kinds a registry dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Whole document: header and operation list.
    Document,
    /// Every operation across all paths.
    Operations,
    /// A single method on a path.
    Operation,
    /// The JSON request body of an operation.
    RequestBody,
    /// The status code -> response mapping.
    Responses,
    /// A single response.
    Response,
    /// A resolved schema.
    Schema,
    /// One property of an object schema.
    Property,
}

impl NodeKind {
    /// Every kind, in traversal order.
    pub const ALL: [NodeKind; 8] = [
        NodeKind::Document,
        NodeKind::Operations,
        NodeKind::Operation,
        NodeKind::RequestBody,
        NodeKind::Responses,
        NodeKind::Response,
        NodeKind::Schema,
        NodeKind::Property,
    ];

    /// The kind's name.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "Document",
            NodeKind::Operations => "Operations",
            NodeKind::Operation => "Operation",
            NodeKind::RequestBody => "RequestBody",
            NodeKind::Responses => "Responses",
            NodeKind::Response => "Response",
            NodeKind::Schema => "Schema",
            NodeKind::Property => "Property",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Props accepted by one node kind.
pub trait NodeProps {
    /// The kind these props render as.
    const KIND: NodeKind;

    /// Invokes this kind's entry of the context's registry.
    fn dispatch(&self, ctx: &RenderContext<'_>) -> Node;
}

/// What a renderer sees besides its props: the registry to dispatch children
/// through and the document being rendered.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    registry: &'a Registry,
    document: &'a Document,
}

impl<'a> RenderContext<'a> {
    /// Creates a context for one render pass.
    pub fn new(registry: &'a Registry, document: &'a Document) -> Self {
        Self { registry, document }
    }

    /// The registry children are dispatched through.
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// The document being rendered.
    pub fn document(&self) -> &'a Document {
        self.document
    }

    /// Renders a child node with whatever function the registry holds for it.
    pub fn render<P: NodeProps>(&self, props: &P) -> Node {
        trace!(kind = %P::KIND, "Rendering node");
        props.dispatch(self)
    }
}

macro_rules! renderer_table {
    ($($field:ident: $kind:ident => $props:ident as $alias:ident),* $(,)?) => {
        $(
            #[doc = concat!("Render function for [`NodeKind::", stringify!($kind), "`].")]
            pub type $alias =
                Arc<dyn for<'c, 'p> Fn(&RenderContext<'c>, &$props<'p>) -> Node + Send + Sync>;

            impl NodeProps for $props<'_> {
                const KIND: NodeKind = NodeKind::$kind;

                fn dispatch(&self, ctx: &RenderContext<'_>) -> Node {
                    (ctx.registry().$field)(ctx, self)
                }
            }
        )*

        /// A partial renderer table: any subset of kinds.
        ///
        /// Used as the defaults handed to [`Registry::build`] and as an override
        /// set for [`Registry::with_overrides`].
        #[derive(Clone, Default)]
        pub struct RendererSet {
            $($field: Option<$alias>,)*
        }

        impl RendererSet {
            /// An empty set.
            pub fn new() -> Self {
                Self::default()
            }

            $(
                #[doc = concat!("Sets the renderer for [`NodeKind::", stringify!($kind), "`].")]
                pub fn $field<F>(mut self, render: F) -> Self
                where
                    F: for<'c, 'p> Fn(&RenderContext<'c>, &$props<'p>) -> Node
                        + Send
                        + Sync
                        + 'static,
                {
                    let render: $alias = Arc::new(render);
                    self.$field = Some(render);
                    self
                }
            )*

            /// Combines two sets; entries of `other` win per kind.
            pub fn layer(self, other: &RendererSet) -> RendererSet {
                RendererSet {
                    $($field: other.$field.clone().or(self.$field),)*
                }
            }

            /// Kinds this set provides, in traversal order.
            pub fn kinds(&self) -> Vec<NodeKind> {
                let mut kinds = Vec::new();
                $(
                    if self.$field.is_some() {
                        kinds.push(NodeKind::$kind);
                    }
                )*
                kinds
            }

            /// True when the set provides no renderer.
            pub fn is_empty(&self) -> bool {
                self.kinds().is_empty()
            }
        }

        /// A complete, immutable renderer table.
        #[derive(Clone)]
        pub struct Registry {
            $($field: $alias,)*
        }

        impl Registry {
            /// Builds a registry from a set that must cover every kind.
            ///
            /// Fails with [`AppError::MissingRenderer`] naming the first kind
            /// the set lacks.
            pub fn build(defaults: RendererSet) -> AppResult<Self> {
                Ok(Self {
                    $(
                        $field: defaults
                            .$field
                            .ok_or(AppError::MissingRenderer(NodeKind::$kind))?,
                    )*
                })
            }

            /// Returns a registry equal to `self` except for the kinds present
            /// in `overrides`. `self` is not modified.
            pub fn with_overrides(&self, overrides: &RendererSet) -> Self {
                debug!(kinds = ?overrides.kinds(), "Deriving registry with overrides");
                Self {
                    $(
                        $field: overrides
                            .$field
                            .clone()
                            .unwrap_or_else(|| Arc::clone(&self.$field)),
                    )*
                }
            }

            /// The registry as a complete renderer set, e.g. to layer on top of.
            pub fn to_set(&self) -> RendererSet {
                RendererSet {
                    $($field: Some(Arc::clone(&self.$field)),)*
                }
            }
        }
    };
}

renderer_table! {
    document: Document => DocumentProps as DocumentRenderer,
    operations: Operations => OperationsProps as OperationsRenderer,
    operation: Operation => OperationProps as OperationRenderer,
    request_body: RequestBody => RequestBodyProps as RequestBodyRenderer,
    responses: Responses => ResponsesProps as ResponsesRenderer,
    response: Response => ResponseProps as ResponseRenderer,
    schema: Schema => SchemaProps as SchemaRenderer,
    property: Property => PropertyProps as PropertyRenderer,
}

impl Registry {
    /// Renders `props` against `document` with this registry.
    pub fn render<P: NodeProps>(&self, document: &Document, props: &P) -> Node {
        RenderContext::new(self, document).render(props)
    }
}

impl fmt::Debug for RendererSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RendererSet")
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").finish_non_exhaustive()
    }
}
