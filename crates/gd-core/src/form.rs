//! Submitted form decoding
//!
//! The advanced editor posts flat fields: `id`, `uri`, `order`,
//! `description` and one `<prefix>[N].name` / `<prefix>[N].args` pair per
//! block that is still on the page. Indices may have gaps because removed
//! blocks are never renumbered.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::args::parse_args;
use crate::error::FormError;
use crate::list::ListSpec;
use crate::route::{FilterDefinition, PredicateDefinition, RouteDefinition};

#[derive(Debug, Default)]
struct RawItem {
    name: String,
    args: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ItemAttr {
    Name,
    Args,
}

/// Split `<prefix>[N].<attr>` into its index and attribute.
///
/// Returns `Ok(None)` for fields that are not item fields of this list.
fn parse_item_field(field: &str, prefix: &str) -> Result<Option<(usize, ItemAttr)>, FormError> {
    let Some(rest) = field.strip_prefix(prefix).and_then(|r| r.strip_prefix('[')) else {
        return Ok(None);
    };
    let Some((index, attr)) = rest.split_once("].") else {
        return Err(FormError::InvalidIndex(field.to_string()));
    };
    let index = index
        .parse::<usize>()
        .map_err(|_| FormError::InvalidIndex(field.to_string()))?;

    let attr = match attr {
        "name" => ItemAttr::Name,
        "args" => ItemAttr::Args,
        _ => return Ok(None),
    };
    Ok(Some((index, attr)))
}

fn collect_item(
    items: &mut BTreeMap<usize, RawItem>,
    field: &str,
    value: &str,
    prefix: &str,
) -> Result<bool, FormError> {
    match parse_item_field(field, prefix)? {
        Some((index, attr)) => {
            let item = items.entry(index).or_default();
            match attr {
                ItemAttr::Name => item.name = value.to_string(),
                ItemAttr::Args => item.args = value.to_string(),
            }
            Ok(true)
        }
        None => Ok(false),
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Build a route from the advanced editor's submitted fields.
///
/// Items come out in index order; blocks left with a blank name are dropped.
pub fn decode_route_form<K, V>(pairs: &[(K, V)]) -> Result<RouteDefinition, FormError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut id = None;
    let mut uri = None;
    let mut order = None;
    let mut description = None;
    let mut predicates: BTreeMap<usize, RawItem> = BTreeMap::new();
    let mut filters: BTreeMap<usize, RawItem> = BTreeMap::new();

    for (field, value) in pairs {
        let field: &str = field.as_ref();
        let value: &str = value.as_ref();
        match field {
            "id" => id = Some(value.to_string()),
            "uri" => uri = Some(value.to_string()),
            "order" => order = Some(value.to_string()),
            "description" => description = Some(value.to_string()),
            _ => {
                if collect_item(&mut predicates, field, value, ListSpec::PREDICATES.prefix)? {
                    continue;
                }
                if !collect_item(&mut filters, field, value, ListSpec::FILTERS.prefix)? {
                    log::debug!("Ignoring unknown form field '{}'", field);
                }
            }
        }
    }

    let id = non_blank(id).ok_or(FormError::MissingField("Route ID"))?;
    let uri = non_blank(uri).ok_or(FormError::MissingField("URI"))?;
    let order = match non_blank(order) {
        Some(raw) => Some(
            raw.parse::<i32>()
                .map_err(|_| FormError::InvalidOrder(raw.clone()))?,
        ),
        None => None,
    };

    let predicates = predicates
        .into_values()
        .filter(|item| !item.name.trim().is_empty())
        .map(|item| PredicateDefinition::new(item.name.trim(), parse_args(&item.args)))
        .collect();
    let filters = filters
        .into_values()
        .filter(|item| !item.name.trim().is_empty())
        .map(|item| FilterDefinition::new(item.name.trim(), parse_args(&item.args)))
        .collect();

    Ok(RouteDefinition {
        id,
        uri,
        predicates,
        filters,
        order,
        description: non_blank(description),
    })
}

// =============================================================================
// URL-encoded bodies
// =============================================================================

/// Decode one key or value. `+` is a space; escapes must form valid UTF-8.
/// A `%` not followed by two hex digits is kept as-is.
fn decode_component(raw: &str) -> Result<String, FormError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(Cow::into_owned)
        .map_err(|_| FormError::InvalidEncoding(raw.to_string()))
}

/// Split an `application/x-www-form-urlencoded` body into field pairs.
pub fn parse_urlencoded(body: &str) -> Result<Vec<(String, String)>, FormError> {
    let mut pairs = Vec::new();
    for part in body.trim().split('&') {
        if part.is_empty() {
            continue;
        }
        let (key, value) = part.split_once('=').unwrap_or((part, ""));
        pairs.push((decode_component(key)?, decode_component(value)?));
    }
    Ok(pairs)
}
