#![deny(missing_docs)]

//! # Type Generator
//!
//! Entry points that turn an OpenAPI document into the text of a TypeScript
//! module exporting one type alias for the whole API.

use crate::casing::pascal_case;
use crate::codegen::render_type_module;
use crate::error::AppResult;
use crate::oas::document::OpenApiDocument;
use crate::oas::routes::{collect_endpoints, transform_endpoints};
use crate::source::DocumentSource;
use serde_json::Value;
use tracing::info;

/// Options for a single generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Where the document lives (URL or path), passed to the source.
    pub location: String,
    /// API domain name, e.g. `booking-service`. PascalCased into the type name.
    pub domain: String,
}

/// Fetches the document from `source` and generates the module text.
pub fn generate(source: &impl DocumentSource, options: &GenerateOptions) -> AppResult<String> {
    let raw = source.fetch(&options.location)?;
    generate_from_value(raw, &options.domain)
}

/// Generates the module text from an already decoded document.
///
/// # Errors
///
/// * `AppError::UnsupportedVersion` when neither `swagger: "2.0"` nor `openapi: "3.x"` is declared.
/// * `AppError::UnresolvedRef` when a schema reference names a missing schema.
pub fn generate_from_value(raw: Value, domain: &str) -> AppResult<String> {
    let document = OpenApiDocument::from_value(raw)?;
    let endpoints = collect_endpoints(&document)?;
    let type_name = pascal_case(domain);

    info!(
        domain,
        type_name = %type_name,
        endpoints = endpoints.len(),
        "generated API types"
    );

    Ok(render_type_module(&type_name, &transform_endpoints(&endpoints)))
}
