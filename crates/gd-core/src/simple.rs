//! Route building for the simple editor
//!
//! The simple editor only asks for an incoming path, a target and a rewrite
//! mode; the predicates and filters are derived from those.

use serde::{Deserialize, Serialize};

use crate::args::{genkey, Args};
use crate::error::FormError;
use crate::preview::RewriteMode;
use crate::route::{FilterDefinition, PredicateDefinition, RouteDefinition};

/// Fields posted by the simple editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimpleRouteForm {
    pub route_id: String,
    pub target_uri: String,
    pub incoming_path: String,
    pub rewrite_type: String,
    pub target_path: String,
    pub description: String,
}

fn with_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

fn positional(values: &[String]) -> Args {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| (genkey(i), value.clone()))
        .collect()
}

/// Build the route the simple editor describes.
///
/// - every route matches `Path=<incoming>/**`
/// - `strip` adds `StripPrefix=1`
/// - `rewrite` with a target path adds a `RewritePath` from the incoming
///   prefix to the target prefix
pub fn build_simple_route(form: &SimpleRouteForm) -> Result<RouteDefinition, FormError> {
    let route_id = form.route_id.trim();
    if route_id.is_empty() {
        return Err(FormError::MissingField("Route ID"));
    }
    let target_uri = form.target_uri.trim();
    if target_uri.is_empty() {
        return Err(FormError::MissingField("Target URI"));
    }

    let incoming = with_leading_slash(&form.incoming_path);
    let predicates = vec![PredicateDefinition::new(
        "Path",
        positional(&[format!("{}/**", incoming)]),
    )];

    let mut filters = Vec::new();
    match RewriteMode::from_value(&form.rewrite_type) {
        RewriteMode::Strip => {
            filters.push(FilterDefinition::new("StripPrefix", positional(&["1".to_string()])));
        }
        RewriteMode::Rewrite if !form.target_path.trim().is_empty() => {
            let target = with_leading_slash(&form.target_path);
            filters.push(FilterDefinition::new(
                "RewritePath",
                positional(&[
                    format!("{}/(?<segment>.*)", incoming),
                    format!("{}/${{segment}}", target),
                ]),
            ));
        }
        _ => {}
    }

    log::debug!(
        "Built simple route '{}' with {} filter(s)",
        route_id,
        filters.len()
    );

    let description = form.description.trim();
    Ok(RouteDefinition {
        id: route_id.to_string(),
        uri: target_uri.to_string(),
        predicates,
        filters,
        order: Some(0),
        description: (!description.is_empty()).then(|| description.to_string()),
    })
}
