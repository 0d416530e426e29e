#![deny(missing_docs)]

//! # OpenAPI Document
//!
//! Shim structs acting as an Intermediate Deserialization Layer. They map directly to
//! the objects of a Swagger 2.0 or OpenAPI 3.x document and capture only what endpoint
//! type generation needs.

use crate::error::{AppError, AppResult};
use crate::oas::models::{HttpMethod, SchemaNode};
use crate::oas::normalization::normalize_document;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Major OpenAPI version of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    /// `swagger: "2.0"`
    V2,
    /// `openapi: "3.x"`
    V3,
}

impl SpecVersion {
    /// Detects the version from the top-level `swagger` / `openapi` markers.
    pub fn detect(raw: &Value) -> AppResult<Self> {
        // Unquoted YAML markers (`swagger: 2.0`, `openapi: 3.1`) arrive as numbers.
        match raw.get("swagger") {
            Some(Value::String(s)) if s == "2.0" => return Ok(SpecVersion::V2),
            Some(Value::Number(n)) if n.as_f64() == Some(2.0) => return Ok(SpecVersion::V2),
            _ => {}
        }
        let openapi = match raw.get("openapi") {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        if openapi.is_some_and(|v| v.starts_with("3.")) {
            return Ok(SpecVersion::V3);
        }

        let marker = raw
            .get("openapi")
            .or_else(|| raw.get("swagger"))
            .map(|v| v.to_string())
            .unwrap_or_else(|| "missing version marker".to_string());
        Err(AppError::UnsupportedVersion(marker))
    }
}

/// Either an inline object or a `$ref` to a reusable one.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// `{ "$ref": "..." }`
    Ref(Reference),
    /// The inline object.
    Item(T),
}

/// A bare reference object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reference {
    /// The pointer text.
    #[serde(rename = "$ref")]
    pub pointer: String,
}

/// A single operation parameter (v2 and v3 share this shape).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    /// Name of the parameter.
    pub name: String,
    /// Location (`query`, `path`, `header`, `cookie`, `body`, `formData`).
    #[serde(rename = "in")]
    pub location: String,
    /// Swagger 2.0 primitive type declared directly on the parameter.
    #[serde(rename = "type", default)]
    pub param_type: Option<String>,
    /// Schema of the parameter (v3, or v2 body parameters).
    #[serde(default)]
    pub schema: Option<SchemaNode>,
    /// Whether the parameter is required.
    #[serde(default)]
    pub required: bool,
}

/// A media type entry under `content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    /// The payload schema.
    #[serde(default)]
    pub schema: Option<SchemaNode>,
}

/// An OpenAPI 3.x request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Payloads by media type.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A response entry. Swagger 2.0 places `schema` directly on it, OpenAPI 3.x
/// nests schemas under `content`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Swagger 2.0 response schema.
    #[serde(default)]
    pub schema: Option<SchemaNode>,
    /// OpenAPI 3.x payloads by media type.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

/// A single operation under a path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    /// Grouping tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Short summary.
    #[serde(default)]
    pub summary: Option<String>,
    /// Long description.
    #[serde(default)]
    pub description: Option<String>,
    /// Operation-level parameters.
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    /// OpenAPI 3.x request body.
    #[serde(rename = "requestBody", default)]
    pub request_body: Option<RefOr<RequestBody>>,
    /// Responses by status code, undecoded. Only the success entry is ever read,
    /// so the others are not required to be well-formed.
    #[serde(default)]
    pub responses: IndexMap<String, Value>,
}

/// A path item. Operations are kept as raw values so that their document order
/// survives; [`PathItem::operations`] decodes them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// Parameters shared by every operation of the path.
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    #[serde(flatten)]
    entries: IndexMap<String, Value>,
}

impl PathItem {
    /// Decodes the HTTP operations of this path in document order.
    ///
    /// Keys that are not HTTP methods (`summary`, `servers`, `$ref`, extensions) are skipped.
    pub fn operations(&self) -> AppResult<Vec<(HttpMethod, Operation)>> {
        let mut operations = Vec::new();
        for (key, value) in &self.entries {
            let Some(method) = HttpMethod::from_key(key) else {
                debug!(key = %key, "skipping non-operation path item key");
                continue;
            };
            let operation: Operation = serde_json::from_value(value.clone())?;
            operations.push((method, operation));
        }
        Ok(operations)
    }
}

/// The `components` section (OpenAPI 3.x).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Components {
    /// Named schemas.
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaNode>,
    /// Reusable parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
    /// Reusable request bodies.
    #[serde(rename = "requestBodies", default)]
    pub request_bodies: IndexMap<String, RequestBody>,
}

/// The root of a Swagger 2.0 / OpenAPI 3.x document.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenApiDocument {
    /// Paths in document order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Swagger 2.0 named schemas.
    #[serde(default)]
    pub definitions: IndexMap<String, SchemaNode>,
    /// Swagger 2.0 reusable parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, Parameter>,
    /// OpenAPI 3.x components.
    #[serde(default)]
    pub components: Components,
    /// Detected version; filled by [`OpenApiDocument::from_value`].
    #[serde(skip, default = "default_version")]
    pub version: SpecVersion,
}

fn default_version() -> SpecVersion {
    SpecVersion::V3
}

impl OpenApiDocument {
    /// Detects the version, normalizes and decodes a raw JSON document.
    ///
    /// Version detection happens first so that unsupported documents fail before
    /// anything else is looked at.
    pub fn from_value(mut raw: Value) -> AppResult<Self> {
        let version = SpecVersion::detect(&raw)?;
        normalize_document(&mut raw);

        let mut document: OpenApiDocument = serde_json::from_value(raw)?;
        document.version = version;
        Ok(document)
    }

    /// Parses a JSON string into a document.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let raw: Value = serde_json::from_str(json)?;
        Self::from_value(raw)
    }

    /// The named-schema section matching the document version.
    pub fn schemas(&self) -> &IndexMap<String, SchemaNode> {
        match self.version {
            SpecVersion::V2 => &self.definitions,
            SpecVersion::V3 => &self.components.schemas,
        }
    }

    /// The reusable-parameter section matching the document version.
    pub fn reusable_parameters(&self) -> &IndexMap<String, Parameter> {
        match self.version {
            SpecVersion::V2 => &self.parameters,
            SpecVersion::V3 => &self.components.parameters,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_detect_v2() {
        let raw = json!({ "swagger": "2.0" });
        assert_eq!(SpecVersion::detect(&raw).unwrap(), SpecVersion::V2);

        let unquoted = json!({ "swagger": 2.0 });
        assert_eq!(SpecVersion::detect(&unquoted).unwrap(), SpecVersion::V2);
    }

    #[test]
    fn test_detect_v3() {
        let raw = json!({ "openapi": "3.1.0" });
        assert_eq!(SpecVersion::detect(&raw).unwrap(), SpecVersion::V3);

        for unquoted in [json!({ "openapi": 3.0 }), json!({ "openapi": 3.1 })] {
            assert_eq!(SpecVersion::detect(&unquoted).unwrap(), SpecVersion::V3);
        }
        assert!(SpecVersion::detect(&json!({ "openapi": 4.0 })).is_err());
    }

    #[test]
    fn test_detect_unsupported() {
        let err = SpecVersion::detect(&json!({ "swagger": "1.2" })).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedVersion(ref m) if m == "\"1.2\""));

        let err = SpecVersion::detect(&json!({ "openapi": "4.0.0" })).unwrap_err();
        assert!(matches!(err, AppError::UnsupportedVersion(_)));

        let err = SpecVersion::detect(&json!({ "info": {} })).unwrap_err();
        assert!(err.to_string().contains("missing version marker"));
    }

    #[test]
    fn test_operations_keep_document_order() {
        let doc = OpenApiDocument::from_value(json!({
            "openapi": "3.0.0",
            "paths": {
                "/pets": {
                    "summary": "Pets",
                    "post": { "responses": {} },
                    "parameters": [{ "name": "x", "in": "query", "schema": { "type": "string" } }],
                    "get": { "tags": ["pets"], "responses": {} },
                    "x-internal": true
                }
            }
        }))
        .unwrap();

        let item = &doc.paths["/pets"];
        assert_eq!(item.parameters.len(), 1);

        let ops = item.operations().unwrap();
        let methods: Vec<HttpMethod> = ops.iter().map(|(m, _)| *m).collect();
        assert_eq!(methods, vec![HttpMethod::Post, HttpMethod::Get]);
        assert_eq!(ops[1].1.tags, vec!["pets".to_string()]);
    }

    #[test]
    fn test_parameter_refs_and_inline() {
        let op: Operation = serde_json::from_value(json!({
            "parameters": [
                { "$ref": "#/components/parameters/Limit" },
                { "name": "id", "in": "path", "required": true, "schema": { "type": "string" } }
            ]
        }))
        .unwrap();

        assert!(matches!(&op.parameters[0], RefOr::Ref(r) if r.pointer == "#/components/parameters/Limit"));
        assert!(matches!(&op.parameters[1], RefOr::Item(p) if p.name == "id" && p.required));
    }

    #[test]
    fn test_schemas_follow_version() {
        let v2 = OpenApiDocument::from_value(json!({
            "swagger": "2.0",
            "definitions": { "Pet": { "type": "object" } }
        }))
        .unwrap();
        assert!(v2.schemas().contains_key("Pet"));

        let v3 = OpenApiDocument::from_value(json!({
            "openapi": "3.0.3",
            "components": { "schemas": { "User": { "type": "object" } } }
        }))
        .unwrap();
        assert!(v3.schemas().contains_key("User"));
        assert!(v3.definitions.is_empty());
    }
}
