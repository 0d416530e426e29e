#![deny(missing_docs)]

//! # IPA Core
//!
//! Generates a single TypeScript type describing every endpoint of an OpenAPI
//! (Swagger 2.0 or OpenAPI 3.x) document.
//!
//! The pipeline is: decode and normalize the document, resolve `$ref`s, collect
//! one record per operation, synthesize structural types, then serialize.

/// Shared error types.
pub mod error;

/// Domain name casing.
pub mod casing;

/// TypeScript rendering.
pub mod codegen;

/// OpenAPI document model, resolution and endpoint collection.
pub mod oas;

/// Document source abstraction.
pub mod source;

/// Structural type synthesis from resolved schemas.
pub mod type_mapping;

/// Generation entry points.
pub mod type_generator;

pub use casing::{kebab_case, pascal_case};
pub use error::{AppError, AppResult};
pub use oas::{collect_endpoints, transform_endpoints, EndpointRecord, OpenApiDocument};
pub use source::{DocumentSource, StaticSource};
pub use type_generator::{generate, generate_from_value, GenerateOptions};
pub use type_mapping::{synthesize, Primitive, StructuralType};
