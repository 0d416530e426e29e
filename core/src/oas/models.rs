#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! Definition of the Intermediate Representation (IR) structures for parsed OpenAPI elements.
//!
//! `SchemaNode` is the closed form of a JSON-Schema-like fragment: only the keywords
//! that influence the generated TypeScript shape are kept, everything else in the
//! document (descriptions, formats, examples) is dropped during deserialization.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use std::fmt;

/// The `type` keyword of a schema.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum SchemaType {
    /// `string`
    String,
    /// `number`
    Number,
    /// `integer`
    Integer,
    /// `boolean`
    Boolean,
    /// `object`
    Object,
    /// `array`
    Array,
    /// Anything else (`file`, `null`, vendor types). Synthesized as `any`.
    Other(String),
}

impl From<String> for SchemaType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "string" => SchemaType::String,
            "number" => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "boolean" => SchemaType::Boolean,
            "object" => SchemaType::Object,
            "array" => SchemaType::Array,
            _ => SchemaType::Other(value),
        }
    }
}

impl From<&str> for SchemaType {
    fn from(value: &str) -> Self {
        SchemaType::from(value.to_string())
    }
}

/// The `additionalProperties` keyword: either a flag or a value schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `additionalProperties: true | false`
    Allowed(bool),
    /// `additionalProperties: { ... }`
    Schema(Box<SchemaNode>),
}

/// A (possibly unresolved) schema fragment.
///
/// A node carrying `reference` is a pointer into the schema registry. After
/// resolution, a node that still carries `reference` is a cycle placeholder.
///
/// Boolean schemas (`true` / `false`) decode to the unconstrained default node.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(remote = "Self")]
pub struct SchemaNode {
    /// The `type` keyword.
    #[serde(rename = "type", default)]
    pub schema_type: Option<SchemaType>,
    /// The `$ref` pointer.
    #[serde(rename = "$ref", default)]
    pub reference: Option<String>,
    /// Object properties in document order.
    #[serde(default)]
    pub properties: Option<IndexMap<String, SchemaNode>>,
    /// Array element schema.
    #[serde(default)]
    pub items: Option<Box<SchemaNode>>,
    /// Open-index value schema.
    #[serde(rename = "additionalProperties", default)]
    pub additional_properties: Option<AdditionalProperties>,
    /// OpenAPI 3.0 `nullable` flag.
    #[serde(default)]
    pub nullable: bool,
    /// `anyOf` alternatives.
    #[serde(rename = "anyOf", default)]
    pub any_of: Option<Vec<SchemaNode>>,
    /// `oneOf` alternatives.
    #[serde(rename = "oneOf", default)]
    pub one_of: Option<Vec<SchemaNode>>,
    /// Names of required properties.
    #[serde(default, deserialize_with = "deserialize_required")]
    pub required: Vec<String>,
}

impl SchemaNode {
    /// A bare `{ "$ref": pointer }` node.
    pub fn reference(pointer: impl Into<String>) -> Self {
        Self {
            reference: Some(pointer.into()),
            ..Self::default()
        }
    }

    /// A node with only a `type`.
    pub fn typed(schema_type: impl Into<SchemaType>) -> Self {
        Self {
            schema_type: Some(schema_type.into()),
            ..Self::default()
        }
    }

    /// Whether the node declares `type: array`.
    pub fn is_array(&self) -> bool {
        matches!(self.schema_type, Some(SchemaType::Array))
    }

    /// The union alternatives, `anyOf` taking precedence over `oneOf`.
    pub fn union_members(&self) -> Option<&[SchemaNode]> {
        self.any_of.as_deref().or(self.one_of.as_deref())
    }
}

impl<'de> Deserialize<'de> for SchemaNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Bool(_) => Ok(SchemaNode::default()),
            other => SchemaNode::deserialize(other).map_err(serde::de::Error::custom),
        }
    }
}

/// Some documents misuse `required: true` on property schemas (Swagger 2.0 parameter style).
/// Anything that is not a list of names is treated as "nothing required".
fn deserialize_required<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RequiredField {
        Names(Vec<String>),
        Other(serde_json::Value),
    }

    Ok(match RequiredField::deserialize(deserializer)? {
        RequiredField::Names(names) => names,
        RequiredField::Other(_) => Vec::new(),
    })
}

/// HTTP methods that may appear as operations under a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Parses a path-item key (`get`, `post`, ...). Non-method keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "put" => Some(HttpMethod::Put),
            "post" => Some(HttpMethod::Post),
            "delete" => Some(HttpMethod::Delete),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "patch" => Some(HttpMethod::Patch),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }

    /// Uppercased method name, as used for keys of the aggregated tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Trace => "TRACE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
