#![deny(missing_docs)]

//! Collection and aggregation of API endpoints.
//!
//! Iterates over the `paths` section of the document and turns every operation
//! (GET, POST, etc.) into an `EndpointRecord` with resolved parameters, body and
//! response schemas. Records sharing a URL are then merged into one method-keyed
//! structural type.

use crate::error::AppResult;
use crate::oas::document::{OpenApiDocument, Operation, Parameter, PathItem, SpecVersion};
use crate::oas::models::{HttpMethod, SchemaNode};
use crate::oas::registry::SchemaRegistry;
use crate::oas::resolver::params::ResolvedParameters;
use crate::oas::resolver::{
    collect_parameters, resolve_body_parameter, resolve_parameters, resolve_parameters_v2,
    resolve_request_body, resolve_success_response, ParamLocation, Resolver, SUCCESS_STATUS,
};
use crate::codegen::serialize;
use crate::type_mapping::{synthesize, synthesize_all, StructuralType};
use indexmap::IndexMap;
use tracing::debug;

/// One HTTP operation with its resolved shapes.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointRecord {
    /// The URL path (e.g. "/users/{id}").
    pub url: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Tags associated with the operation.
    pub tags: Vec<String>,
    /// Operation summary.
    pub summary: Option<String>,
    /// Operation description.
    pub description: Option<String>,
    /// Synthesized query parameters.
    pub query: Option<StructuralType>,
    /// Synthesized path parameters.
    pub params: Option<StructuralType>,
    /// Resolved request body schema. Always `None` for GET.
    pub body: Option<SchemaNode>,
    /// Resolved response schema by status code.
    pub response: IndexMap<String, Option<SchemaNode>>,
}

/// Collects one `EndpointRecord` per (path, method) pair of the document.
pub fn collect_endpoints(document: &OpenApiDocument) -> AppResult<Vec<EndpointRecord>> {
    let registry = SchemaRegistry::from_document(document);
    let mut resolver = Resolver::new(&registry);

    let mut endpoints = Vec::new();
    for (url, item) in &document.paths {
        for (method, operation) in item.operations()? {
            let endpoint = build_endpoint(url, method, &operation, item, document, &mut resolver)?;
            debug!(url = %endpoint.url, method = %endpoint.method, "collected endpoint");
            endpoints.push(endpoint);
        }
    }

    Ok(endpoints)
}

fn build_endpoint(
    url: &str,
    method: HttpMethod,
    operation: &Operation,
    item: &PathItem,
    document: &OpenApiDocument,
    resolver: &mut Resolver<'_>,
) -> AppResult<EndpointRecord> {
    let parameters = collect_parameters(&item.parameters, &operation.parameters, document);

    let query = resolve_location(document.version, ParamLocation::Query, &parameters, resolver)?
        .map(|resolved| synthesize_all(&resolved));
    let params = resolve_location(document.version, ParamLocation::Path, &parameters, resolver)?
        .map(|resolved| synthesize_all(&resolved));

    let body = if method == HttpMethod::Get {
        None
    } else {
        match document.version {
            SpecVersion::V2 => resolve_body_parameter(&parameters, resolver)?,
            SpecVersion::V3 => {
                resolve_request_body(operation.request_body.as_ref(), document, resolver)?
            }
        }
    };

    let mut response = IndexMap::new();
    response.insert(
        SUCCESS_STATUS.to_string(),
        resolve_success_response(&operation.responses, document.version, resolver)?,
    );

    Ok(EndpointRecord {
        url: url.to_string(),
        method,
        tags: operation.tags.clone(),
        summary: operation.summary.clone(),
        description: operation.description.clone(),
        query,
        params,
        body,
        response,
    })
}

fn resolve_location(
    version: SpecVersion,
    location: ParamLocation,
    parameters: &[Parameter],
    resolver: &mut Resolver<'_>,
) -> AppResult<Option<ResolvedParameters>> {
    match version {
        SpecVersion::V2 => resolve_parameters_v2(location, Some(parameters), resolver),
        SpecVersion::V3 => resolve_parameters(location, Some(parameters), resolver),
    }
}

/// Merges endpoint records into `URL -> METHOD -> { query?, body?, response }`.
///
/// Bodies and responses are synthesized here; GET definitions never carry `body`.
pub fn aggregate(endpoints: &[EndpointRecord]) -> StructuralType {
    let mut tree: IndexMap<String, IndexMap<String, StructuralType>> = IndexMap::new();

    for endpoint in endpoints {
        let mut definition = IndexMap::new();

        if let Some(query) = &endpoint.query {
            definition.insert("query".to_string(), query.clone());
        }

        if endpoint.method != HttpMethod::Get {
            if let Some(body) = &endpoint.body {
                definition.insert("body".to_string(), synthesize(body));
            }
        }

        let response = endpoint
            .response
            .iter()
            .map(|(status, schema)| {
                let ty = schema.as_ref().map_or_else(StructuralType::any, synthesize);
                (status.clone(), ty)
            })
            .collect();
        definition.insert("response".to_string(), StructuralType::Object(response));

        tree.entry(endpoint.url.clone())
            .or_default()
            .insert(endpoint.method.as_str().to_string(), StructuralType::Object(definition));
    }

    StructuralType::Object(
        tree.into_iter()
            .map(|(url, methods)| (url, StructuralType::Object(methods)))
            .collect(),
    )
}

/// Aggregates and serializes endpoint records. No endpoints yields `{}`.
pub fn transform_endpoints(endpoints: &[EndpointRecord]) -> String {
    serialize(&aggregate(endpoints), 0)
}
