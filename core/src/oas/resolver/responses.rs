#![deny(missing_docs)]

//! # Response Resolution
//!
//! Only the `200` response is collected. Other status codes are not part of the
//! generated types.

use crate::error::AppResult;
use crate::oas::document::{Response, SpecVersion};
use crate::oas::models::SchemaNode;
use crate::oas::resolver::body::JSON_MEDIA_TYPE;
use crate::oas::resolver::Resolver;
use indexmap::IndexMap;
use serde_json::Value;

/// The status code whose schema is collected.
pub const SUCCESS_STATUS: &str = "200";

/// Resolves the schema of the `200` response.
///
/// Swagger 2.0 reads `schema` directly; OpenAPI 3.x reads the `application/json`
/// content schema. Anything missing yields `None`. Only the `200` entry is decoded.
pub fn resolve_success_response(
    responses: &IndexMap<String, Value>,
    version: SpecVersion,
    resolver: &mut Resolver<'_>,
) -> AppResult<Option<SchemaNode>> {
    let Some(raw) = responses.get(SUCCESS_STATUS) else {
        return Ok(None);
    };
    let response: Response = serde_json::from_value(raw.clone())?;

    let schema = match version {
        SpecVersion::V2 => response.schema.as_ref(),
        SpecVersion::V3 => response
            .content
            .get(JSON_MEDIA_TYPE)
            .and_then(|media| media.schema.as_ref()),
    };

    schema.map(|s| resolver.resolve_root(s)).transpose()
}
