#![deny(missing_docs)]

//! # Code Generation
//!
//! Renders structural types as TypeScript type syntax and wraps the result into the
//! generated module text.
//!
//! - Object literals are brace-delimited, one `key: value` entry per line, nested
//!   with two spaces per level.
//! - Keys that are not plain identifiers are quoted with JSON string escaping.
//! - Nullable values render as `T | null | undefined`.

use crate::type_mapping::StructuralType;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Comment block placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "/**\n * GENERATED FILE\n * DO NOT EDIT\n */";

const INDENT: &str = "  ";

/// Renders a structural type at the given nesting level.
pub fn serialize(value: &StructuralType, indent: usize) -> String {
    match value {
        StructuralType::Nullable(inner) => {
            format!("{} | null | undefined", serialize(inner, indent))
        }
        StructuralType::Primitive(p) => p.as_str().to_string(),
        StructuralType::Array(element) => match element.as_ref() {
            StructuralType::Union(_) | StructuralType::Nullable(_) => {
                format!("({})[]", serialize(element, indent))
            }
            _ => format!("{}[]", serialize(element, indent)),
        },
        StructuralType::Record(element) => {
            format!("Record<string, {}>", serialize(element, indent))
        }
        StructuralType::Union(members) => {
            if members.is_empty() {
                return "any".to_string();
            }
            members
                .iter()
                .map(|m| serialize(m, indent))
                .collect::<Vec<_>>()
                .join(" | ")
        }
        StructuralType::Object(entries) => {
            if entries.is_empty() {
                return "{}".to_string();
            }

            let spaces = INDENT.repeat(indent);
            let lines: Vec<String> = entries
                .iter()
                .map(|(key, val)| {
                    format!(
                        "{}{}{}: {}",
                        spaces,
                        INDENT,
                        property_name(key),
                        serialize(val, indent + 1)
                    )
                })
                .collect();

            format!("{{\n{}\n{}}}", lines.join(",\n"), spaces)
        }
    }
}

/// Renders an optional value; absence renders as `any`.
pub fn serialize_optional(value: Option<&StructuralType>, indent: usize) -> String {
    value.map_or_else(|| "any".to_string(), |v| serialize(v, indent))
}

/// Produces the full generated file: header plus `export type <name> = <body>`.
pub fn render_type_module(type_name: &str, body: &str) -> String {
    format!("{GENERATED_HEADER}\n\nexport type {type_name} = {body}\n")
}

fn property_name(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        Value::String(key.to_string()).to_string()
    }
}

fn is_identifier(key: &str) -> bool {
    static IDENT_RE: OnceLock<Regex> = OnceLock::new();
    IDENT_RE
        .get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("Invalid regex"))
        .is_match(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::type_mapping::{synthesize, Primitive};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(entries: Vec<(&str, StructuralType)>) -> StructuralType {
        StructuralType::Object(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_object_round_trip() {
        let node = serde_json::from_value(json!({
            "type": "object",
            "properties": { "id": { "type": "string" } }
        }))
        .unwrap();
        assert_eq!(serialize(&synthesize(&node), 0), "{\n  id: string\n}");
    }

    #[test]
    fn test_nullable_property() {
        let node = serde_json::from_value(json!({
            "type": "object",
            "properties": { "id": { "type": "string", "nullable": true } }
        }))
        .unwrap();
        let text = serialize(&synthesize(&node), 0);
        assert!(text.contains("id: string | null | undefined"));
    }

    #[test]
    fn test_record() {
        let value = StructuralType::Record(Box::new(StructuralType::any()));
        assert_eq!(serialize(&value, 0), "Record<string, any>");
    }

    #[test]
    fn test_arrays() {
        let strings = StructuralType::Array(Box::new(Primitive::String.into()));
        assert_eq!(serialize(&strings, 0), "string[]");

        let nullable = StructuralType::Array(Box::new(
            StructuralType::Primitive(Primitive::String).nullable(),
        ));
        assert_eq!(serialize(&nullable, 0), "(string | null | undefined)[]");

        let union = StructuralType::Array(Box::new(StructuralType::Union(vec![
            Primitive::String.into(),
            Primitive::Number.into(),
        ])));
        assert_eq!(serialize(&union, 0), "(string | number)[]");
    }

    #[test]
    fn test_unions() {
        let union = StructuralType::Union(vec![Primitive::Boolean.into(), Primitive::Number.into()]);
        assert_eq!(serialize(&union, 0), "boolean | number");
        assert_eq!(serialize(&StructuralType::Union(vec![]), 0), "any");
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(serialize(&object(vec![]), 0), "{}");
    }

    #[test]
    fn test_quoted_keys() {
        let value = object(vec![
            ("/users/{id}", Primitive::String.into()),
            ("200", Primitive::Number.into()),
            ("with \"quote\"", Primitive::Boolean.into()),
            ("_ok9", Primitive::Any.into()),
        ]);
        assert_eq!(
            serialize(&value, 0),
            "{\n  \"/users/{id}\": string,\n  \"200\": number,\n  \"with \\\"quote\\\"\": boolean,\n  _ok9: any\n}"
        );
    }

    #[test]
    fn test_nested_indentation() {
        let value = object(vec![(
            "outer",
            object(vec![("inner", Primitive::String.into())]),
        )]);
        assert_eq!(
            serialize(&value, 0),
            "{\n  outer: {\n    inner: string\n  }\n}"
        );
    }

    #[test]
    fn test_nullable_object() {
        let value = object(vec![("a", Primitive::Number.into())]).nullable();
        assert_eq!(serialize(&value, 0), "{\n  a: number\n} | null | undefined");
    }

    #[test]
    fn test_serialize_optional() {
        assert_eq!(serialize_optional(None, 0), "any");
        assert_eq!(
            serialize_optional(Some(&Primitive::String.into()), 0),
            "string"
        );
    }

    #[test]
    fn test_render_type_module() {
        assert_eq!(
            render_type_module("PetStore", "{}"),
            "/**\n * GENERATED FILE\n * DO NOT EDIT\n */\n\nexport type PetStore = {}\n"
        );
    }
}
