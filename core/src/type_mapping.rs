#![deny(missing_docs)]

//! # Type Mapping
//!
//! Logic for mapping resolved OpenAPI Schema definitions to structural TypeScript types.
//!
//! - `string` -> `string`
//! - `number` / `integer` -> `number`
//! - `boolean` -> `boolean`
//! - `object` -> object literal, `Record<string, T>` for open maps
//! - `array` -> `T[]`
//! - `anyOf` / `oneOf` -> union
//! - anything else (including cycle placeholders) -> `any`

use crate::oas::models::{AdditionalProperties, SchemaNode, SchemaType};
use indexmap::IndexMap;

/// Primitive type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `any`
    Any,
}

impl Primitive {
    /// The TypeScript spelling of the tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::String => "string",
            Primitive::Number => "number",
            Primitive::Boolean => "boolean",
            Primitive::Any => "any",
        }
    }
}

/// A synthesized structural type.
#[derive(Debug, Clone, PartialEq)]
pub enum StructuralType {
    /// A primitive tag.
    Primitive(Primitive),
    /// An object literal with entries in insertion order.
    Object(IndexMap<String, StructuralType>),
    /// "Array of" the element type.
    Array(Box<StructuralType>),
    /// An arbitrary string-keyed map of the element type.
    Record(Box<StructuralType>),
    /// "This, or null, or absent".
    Nullable(Box<StructuralType>),
    /// Alternatives in declaration order.
    Union(Vec<StructuralType>),
}

impl StructuralType {
    /// The `any` primitive.
    pub fn any() -> Self {
        StructuralType::Primitive(Primitive::Any)
    }

    /// Wraps `self` in the nullable marker.
    pub fn nullable(self) -> Self {
        StructuralType::Nullable(Box::new(self))
    }
}

impl From<Primitive> for StructuralType {
    fn from(primitive: Primitive) -> Self {
        StructuralType::Primitive(primitive)
    }
}

/// Synthesizes the structural type of a resolved schema.
pub fn synthesize(node: &SchemaNode) -> StructuralType {
    let shape = shape_of(node);
    if node.nullable {
        shape.nullable()
    } else {
        shape
    }
}

/// Synthesizes every entry of a name -> schema mapping into one object type.
pub fn synthesize_all(nodes: &IndexMap<String, SchemaNode>) -> StructuralType {
    StructuralType::Object(
        nodes
            .iter()
            .map(|(name, node)| (name.clone(), synthesize(node)))
            .collect(),
    )
}

/// The type of `node` ignoring its own `nullable` flag.
fn shape_of(node: &SchemaNode) -> StructuralType {
    if let Some(members) = node.union_members() {
        return StructuralType::Union(members.iter().map(synthesize).collect());
    }

    match &node.schema_type {
        Some(SchemaType::String) => Primitive::String.into(),
        Some(SchemaType::Number) | Some(SchemaType::Integer) => Primitive::Number.into(),
        Some(SchemaType::Boolean) => Primitive::Boolean.into(),
        Some(SchemaType::Object) => object_shape(node),
        Some(SchemaType::Array) => match &node.items {
            Some(items) => StructuralType::Array(Box::new(synthesize(items))),
            None => StructuralType::Array(Box::new(StructuralType::any())),
        },
        Some(SchemaType::Other(_)) | None => StructuralType::any(),
    }
}

fn object_shape(node: &SchemaNode) -> StructuralType {
    if let Some(properties) = &node.properties {
        let entries = properties
            .iter()
            .map(|(name, property)| (name.clone(), synthesize_property(property)))
            .collect();
        return StructuralType::Object(entries);
    }

    match &node.additional_properties {
        Some(AdditionalProperties::Schema(schema)) => {
            StructuralType::Record(Box::new(synthesize(schema)))
        }
        // `true`, `false` and absent all mean an unknown-shaped object.
        Some(AdditionalProperties::Allowed(_)) | None => {
            StructuralType::Record(Box::new(StructuralType::any()))
        }
    }
}

/// Nullability is stripped before recursing so the property is wrapped exactly once.
fn synthesize_property(property: &SchemaNode) -> StructuralType {
    if property.nullable {
        shape_of(property).nullable()
    } else {
        synthesize(property)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn synth(value: Value) -> StructuralType {
        synthesize(&serde_json::from_value(value).unwrap())
    }

    fn object(entries: Vec<(&str, StructuralType)>) -> StructuralType {
        StructuralType::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_primitives() {
        assert_eq!(synth(json!({ "type": "string" })), Primitive::String.into());
        assert_eq!(synth(json!({ "type": "number" })), Primitive::Number.into());
        assert_eq!(synth(json!({ "type": "integer" })), Primitive::Number.into());
        assert_eq!(synth(json!({ "type": "boolean" })), Primitive::Boolean.into());
        assert_eq!(synth(json!({ "type": "unknown" })), StructuralType::any());
        assert_eq!(synth(json!({})), StructuralType::any());
    }

    #[test]
    fn test_nullable_primitive() {
        assert_eq!(
            synth(json!({ "type": "string", "nullable": true })),
            StructuralType::Primitive(Primitive::String).nullable()
        );
    }

    #[test]
    fn test_object_with_properties() {
        assert_eq!(
            synth(json!({ "type": "object", "properties": { "id": { "type": "string" } } })),
            object(vec![("id", Primitive::String.into())])
        );
    }

    #[test]
    fn test_nullable_property_is_wrapped_once() {
        assert_eq!(
            synth(json!({
                "type": "object",
                "properties": { "id": { "type": "string", "nullable": true } }
            })),
            object(vec![("id", StructuralType::Primitive(Primitive::String).nullable())])
        );
    }

    #[test]
    fn test_property_and_top_level_nullable_agree() {
        let top_level = synth(json!({ "type": "number", "nullable": true }));
        let StructuralType::Object(entries) = synth(json!({
            "type": "object",
            "properties": { "n": { "type": "number", "nullable": true } }
        })) else {
            panic!("expected object");
        };
        assert_eq!(entries["n"], top_level);
    }

    #[test]
    fn test_additional_properties() {
        assert_eq!(
            synth(json!({ "type": "object", "additionalProperties": true })),
            StructuralType::Record(Box::new(StructuralType::any()))
        );
        assert_eq!(
            synth(json!({ "type": "object", "additionalProperties": { "type": "string" } })),
            StructuralType::Record(Box::new(Primitive::String.into()))
        );
        assert_eq!(
            synth(json!({ "type": "object" })),
            StructuralType::Record(Box::new(StructuralType::any()))
        );
    }

    #[test]
    fn test_empty_properties_is_empty_object() {
        assert_eq!(
            synth(json!({ "type": "object", "properties": {} })),
            object(vec![])
        );
    }

    #[test]
    fn test_arrays() {
        assert_eq!(
            synth(json!({ "type": "array", "items": { "type": "string" } })),
            StructuralType::Array(Box::new(Primitive::String.into()))
        );
        assert_eq!(
            synth(json!({
                "type": "array",
                "items": { "type": "object", "properties": { "id": { "type": "string" } } }
            })),
            StructuralType::Array(Box::new(object(vec![("id", Primitive::String.into())])))
        );
        assert_eq!(
            synth(json!({ "type": "array" })),
            StructuralType::Array(Box::new(StructuralType::any()))
        );
    }

    #[test]
    fn test_union_takes_priority() {
        assert_eq!(
            synth(json!({
                "type": "object",
                "oneOf": [{ "type": "string" }, { "type": "integer" }]
            })),
            StructuralType::Union(vec![Primitive::String.into(), Primitive::Number.into()])
        );
    }

    #[test]
    fn test_nullable_union() {
        assert_eq!(
            synth(json!({ "anyOf": [{ "type": "string" }], "nullable": true })),
            StructuralType::Union(vec![Primitive::String.into()]).nullable()
        );
    }

    #[test]
    fn test_cycle_placeholder_is_any() {
        assert_eq!(
            synth(json!({ "$ref": "#/components/schemas/Node" })),
            StructuralType::any()
        );
    }

    #[test]
    fn test_synthesize_all() {
        let nodes: IndexMap<String, SchemaNode> = serde_json::from_value(json!({
            "id": { "type": "string", "nullable": true },
            "page": { "type": "integer" }
        }))
        .unwrap();
        assert_eq!(
            synthesize_all(&nodes),
            object(vec![
                ("id", StructuralType::Primitive(Primitive::String).nullable()),
                ("page", Primitive::Number.into())
            ])
        );
    }

    #[test]
    fn test_deterministic() {
        let value = json!({
            "type": "object",
            "properties": {
                "b": { "type": "array", "items": { "type": "boolean" } },
                "a": { "type": "object", "additionalProperties": { "type": "number" } }
            }
        });
        assert_eq!(synth(value.clone()), synth(value));
    }
}
