//! GateDesk Core Library
//!
//! This crate holds the DOM-free logic behind the GateDesk route editors.
//! The browser bindings in `gd-wasm` only translate between these types and
//! the document; everything that can be decided without a page lives here.
//!
//! # Modules
//!
//! - `list`: per-list counters and blueprints for predicate/filter blocks
//! - `preview`: rewrite modes and the live example preview derivation
//! - `args`: newline-delimited `key=value` argument codec
//! - `route`: route, predicate and filter definitions
//! - `form`: decoding of submitted advanced-editor form fields
//! - `simple`: building a route from the simple editor's fields
//! - `error`: shared error type

pub mod args;
pub mod error;
pub mod form;
pub mod list;
pub mod preview;
pub mod route;
pub mod simple;

// Re-export commonly used types
pub use args::{format_args, genkey, parse_args, Args};
pub use error::FormError;
pub use form::{decode_route_form, parse_urlencoded};
pub use list::{ItemBlueprint, ListBuilder, ListSpec};
pub use preview::{ExamplePreview, PreviewConfig, PreviewInput, RewriteMode};
pub use route::{FilterDefinition, PredicateDefinition, RouteDefinition};
pub use simple::{build_simple_route, SimpleRouteForm};
