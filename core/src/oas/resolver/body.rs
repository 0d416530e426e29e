#![deny(missing_docs)]

//! # Body Resolution
//!
//! Logic for extracting request body schemas from OpenAPI definitions.

use crate::error::AppResult;
use crate::oas::document::{OpenApiDocument, Parameter, RefOr, RequestBody};
use crate::oas::models::SchemaNode;
use crate::oas::ref_utils::{component_name, REQUEST_BODY_SECTIONS};
use crate::oas::resolver::Resolver;
use tracing::warn;

/// The only media type whose schema is used for bodies and responses.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// Resolves an OpenAPI 3.x request body.
///
/// - `application/json` content: its schema, resolved (`None` if it has no schema).
/// - Any other content: an opaque schema, which synthesizes to `any`.
/// - No request body: `None`.
pub fn resolve_request_body(
    request_body: Option<&RefOr<RequestBody>>,
    document: &OpenApiDocument,
    resolver: &mut Resolver<'_>,
) -> AppResult<Option<SchemaNode>> {
    let Some(request_body) = request_body else {
        return Ok(None);
    };

    let body = match request_body {
        RefOr::Item(body) => body,
        RefOr::Ref(r) => {
            let found = component_name(&r.pointer, REQUEST_BODY_SECTIONS)
                .and_then(|name| document.components.request_bodies.get(&name));
            match found {
                Some(body) => body,
                None => {
                    warn!(pointer = %r.pointer, "request body reference not found, typing it as any");
                    return Ok(Some(SchemaNode::default()));
                }
            }
        }
    };

    match body.content.get(JSON_MEDIA_TYPE) {
        Some(media) => media
            .schema
            .as_ref()
            .map(|schema| resolver.resolve_root(schema))
            .transpose(),
        None => Ok(Some(SchemaNode::default())),
    }
}

/// Resolves the schema of the Swagger 2.0 `in: body` parameter, if there is one.
pub fn resolve_body_parameter(
    parameters: &[Parameter],
    resolver: &mut Resolver<'_>,
) -> AppResult<Option<SchemaNode>> {
    parameters
        .iter()
        .find(|p| p.location == "body")
        .and_then(|p| p.schema.as_ref())
        .map(|schema| resolver.resolve_root(schema))
        .transpose()
}
