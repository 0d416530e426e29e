#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! - **document**: Typed model of Swagger 2.0 / OpenAPI 3.x documents.
//! - **models**: Schema nodes and HTTP methods.
//! - **normalization**: Rewrites of dialect variants before decoding.
//! - **ref_utils**: `$ref` pointer parsing.
//! - **registry**: Named schema lookup.
//! - **resolver**: Reference resolution for schemas, parameters, bodies and responses.
//! - **routes**: Endpoint collection and aggregation.

pub mod document;
pub mod models;
pub(crate) mod normalization;
pub mod ref_utils;
pub mod registry;
pub mod resolver;
pub mod routes;

pub use document::{OpenApiDocument, SpecVersion};
pub use models::{AdditionalProperties, HttpMethod, SchemaNode, SchemaType};
pub use registry::SchemaRegistry;
pub use resolver::{Resolver, VisitedSet};
pub use routes::{aggregate, collect_endpoints, transform_endpoints, EndpointRecord};
