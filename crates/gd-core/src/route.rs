//! Route definitions produced by the editors.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::args::Args;

/// A named matching condition attached to a route (Path, Method, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredicateDefinition {
    pub name: String,
    #[serde(default)]
    #[ts(type = "Record<string, string>")]
    pub args: Args,
}

/// A named request/response transformation attached to a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FilterDefinition {
    pub name: String,
    #[serde(default)]
    #[ts(type = "Record<string, string>")]
    pub args: Args,
}

/// A gateway route as submitted by either editor.
///
/// TypeScript declarations for the page scripts are written to `bindings/`
/// by `cargo test`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RouteDefinition {
    pub id: String,
    pub uri: String,
    #[serde(default)]
    pub predicates: Vec<PredicateDefinition>,
    #[serde(default)]
    pub filters: Vec<FilterDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub order: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub description: Option<String>,
}

impl PredicateDefinition {
    pub fn new(name: impl Into<String>, args: Args) -> Self {
        Self { name: name.into(), args }
    }
}

impl FilterDefinition {
    pub fn new(name: impl Into<String>, args: Args) -> Self {
        Self { name: name.into(), args }
    }
}
