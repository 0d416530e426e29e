#![deny(missing_docs)]

//! # Schema Registry
//!
//! The named-schema lookup table of one document (`definitions` for Swagger 2.0,
//! `components.schemas` for OpenAPI 3.x). Built once per generation run and
//! read-only afterwards.

use crate::oas::document::OpenApiDocument;
use crate::oas::models::SchemaNode;
use indexmap::IndexMap;

/// Read-only mapping from schema name to its (unresolved) definition.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: IndexMap<String, SchemaNode>,
}

impl SchemaRegistry {
    /// Creates a registry from an explicit name -> schema mapping.
    pub fn new(schemas: IndexMap<String, SchemaNode>) -> Self {
        Self { schemas }
    }

    /// Creates the registry for a decoded document, picking the section by version.
    pub fn from_document(document: &OpenApiDocument) -> Self {
        Self::new(document.schemas().clone())
    }

    /// Looks up a schema by name.
    pub fn get(&self, name: &str) -> Option<&SchemaNode> {
        self.schemas.get(name)
    }

    /// Number of named schemas.
    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    /// Whether the registry holds no schemas.
    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

impl FromIterator<(String, SchemaNode)> for SchemaRegistry {
    fn from_iter<I: IntoIterator<Item = (String, SchemaNode)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
