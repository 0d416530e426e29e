#![deny(missing_docs)]

//! # OpenAPI Normalization
//!
//! Helpers that normalize OpenAPI documents into a more uniform shape before
//! deserializing into the closed `SchemaNode` model. These functions are intentionally
//! conservative and only rewrite fields that are known compatibility gaps.

use serde_json::{Map, Value};

/// Keys whose values are instance data, not schemas. Only skipped inside nodes.
const DATA_KEYS: &[&str] = &["example", "examples", "default", "enum", "const"];

/// Keys whose values map arbitrary names (property names, status codes, paths)
/// to nodes. Entry names are never interpreted as keywords.
const NAMED_MAP_KEYS: &[&str] = &[
    "properties",
    "patternProperties",
    "definitions",
    "$defs",
    "schemas",
    "paths",
    "responses",
    "parameters",
    "requestBodies",
    "content",
    "headers",
];

/// Applies every normalization pass to a raw document.
pub(crate) fn normalize_document(value: &mut Value) {
    normalize_node(value);
}

fn normalize_node(value: &mut Value) {
    match value {
        Value::Object(map) => {
            normalize_nullable_flags(map);
            normalize_tuple_items(map);

            for (key, v) in map.iter_mut() {
                if DATA_KEYS.contains(&key.as_str()) {
                    continue;
                }
                if NAMED_MAP_KEYS.contains(&key.as_str()) {
                    normalize_named_map(v);
                } else {
                    normalize_node(v);
                }
            }
        }
        Value::Array(items) => {
            for v in items.iter_mut() {
                normalize_node(v);
            }
        }
        _ => {}
    }
}

fn normalize_named_map(value: &mut Value) {
    match value {
        Value::Object(entries) => {
            for v in entries.values_mut() {
                normalize_node(v);
            }
        }
        // Operation and path-item `parameters` are lists.
        other => normalize_node(other),
    }
}

/// Folds the nullability spellings of other OpenAPI versions into `nullable: true`.
///
/// - OpenAPI 3.1+ encodes nullability via `type: [T, "null"]`.
/// - Swagger 2.0 documents often use the `x-nullable: true` extension.
///
/// A `type` list that does not reduce to a single non-null type is dropped,
/// which leaves the schema untyped.
fn normalize_nullable_flags(map: &mut Map<String, Value>) {
    if map.get("x-nullable").and_then(Value::as_bool) == Some(true) {
        map.insert("nullable".to_string(), Value::Bool(true));
    }

    let Some(Value::Array(types)) = map.get("type") else {
        return;
    };

    let has_null = types.iter().any(|t| t.as_str() == Some("null"));
    let non_null: Vec<String> = types
        .iter()
        .filter_map(Value::as_str)
        .filter(|t| *t != "null")
        .map(str::to_string)
        .collect();

    match non_null.as_slice() {
        [single] => {
            map.insert("type".to_string(), Value::String(single.clone()));
        }
        _ => {
            map.remove("type");
        }
    }

    if has_null {
        map.insert("nullable".to_string(), Value::Bool(true));
    }
}

/// Tuple-style `items: [A, B]` collapses to `A` for a single entry and to an
/// unconstrained schema otherwise.
fn normalize_tuple_items(map: &mut Map<String, Value>) {
    let Some(Value::Array(entries)) = map.get_mut("items") else {
        return;
    };

    let replacement = if entries.len() == 1 {
        entries.remove(0)
    } else {
        Value::Object(Map::new())
    };
    map.insert("items".to_string(), replacement);
}
