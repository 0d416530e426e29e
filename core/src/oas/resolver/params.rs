#![deny(missing_docs)]

//! # Parameter Resolution
//!
//! Extracts query and path parameters of an operation into a mapping from parameter
//! name to resolved schema.
//!
//! - OpenAPI 3.x nests every parameter type under `schema`.
//! - Swagger 2.0 declares primitive parameters with a direct `type` and only uses
//!   `schema` for body parameters.
//! - Parameters may be `$ref`s to reusable definitions and may be declared on the
//!   path item, in which case operations inherit them.

use crate::error::AppResult;
use crate::oas::document::{OpenApiDocument, Parameter, RefOr};
use crate::oas::models::SchemaNode;
use crate::oas::ref_utils::{component_name, PARAMETER_SECTIONS};
use crate::oas::resolver::Resolver;
use indexmap::IndexMap;
use std::collections::HashSet;
use tracing::warn;

/// Parameter name -> resolved schema, in declaration order.
pub type ResolvedParameters = IndexMap<String, SchemaNode>;

/// The parameter locations that end up in the generated types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// `in: query`
    Query,
    /// `in: path`
    Path,
}

impl ParamLocation {
    /// The `in` value of this location.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamLocation::Query => "query",
            ParamLocation::Path => "path",
        }
    }

    fn matches(&self, location: &str) -> bool {
        location == self.as_str()
    }
}

/// Resolves the OpenAPI 3.x parameters found at `location`.
///
/// Returns `None` when `parameters` is absent, when no parameter sits at `location`,
/// or when none of the matching parameters carries a schema.
pub fn resolve_parameters(
    location: ParamLocation,
    parameters: Option<&[Parameter]>,
    resolver: &mut Resolver<'_>,
) -> AppResult<Option<ResolvedParameters>> {
    let Some(parameters) = parameters else {
        return Ok(None);
    };

    let mut result = ResolvedParameters::new();
    for parameter in parameters.iter().filter(|p| location.matches(&p.location)) {
        if let Some(schema) = &parameter.schema {
            result.insert(parameter.name.clone(), resolver.resolve_root(schema)?);
        }
    }

    Ok(non_empty(result))
}

/// Resolves the Swagger 2.0 parameters found at `location`.
///
/// Same contract as [`resolve_parameters`], plus parameters with a direct `type`
/// are stored as `{ type }` without resolution.
pub fn resolve_parameters_v2(
    location: ParamLocation,
    parameters: Option<&[Parameter]>,
    resolver: &mut Resolver<'_>,
) -> AppResult<Option<ResolvedParameters>> {
    let Some(parameters) = parameters else {
        return Ok(None);
    };

    let mut result = ResolvedParameters::new();
    for parameter in parameters.iter().filter(|p| location.matches(&p.location)) {
        if let Some(schema) = &parameter.schema {
            result.insert(parameter.name.clone(), resolver.resolve_root(schema)?);
        } else if let Some(param_type) = &parameter.param_type {
            result.insert(
                parameter.name.clone(),
                SchemaNode::typed(param_type.as_str()),
            );
        }
    }

    Ok(non_empty(result))
}

/// Builds the effective parameter list of an operation.
///
/// References are replaced by their reusable definitions (unresolvable ones are
/// skipped). Path-level parameters are appended unless the operation declares a
/// parameter with the same `name` and `in`.
pub fn collect_parameters(
    common: &[RefOr<Parameter>],
    operation: &[RefOr<Parameter>],
    document: &OpenApiDocument,
) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut seen = HashSet::new();

    for p in operation.iter().filter_map(|p| dereference(p, document)) {
        seen.insert((p.name.clone(), p.location.clone()));
        params.push(p);
    }
    for p in common.iter().filter_map(|p| dereference(p, document)) {
        if !seen.contains(&(p.name.clone(), p.location.clone())) {
            params.push(p);
        }
    }

    params
}

fn dereference(parameter: &RefOr<Parameter>, document: &OpenApiDocument) -> Option<Parameter> {
    match parameter {
        RefOr::Item(p) => Some(p.clone()),
        RefOr::Ref(r) => {
            let found = component_name(&r.pointer, PARAMETER_SECTIONS)
                .and_then(|name| document.reusable_parameters().get(&name).cloned());
            if found.is_none() {
                warn!(pointer = %r.pointer, "skipping unresolvable parameter reference");
            }
            found
        }
    }
}

fn non_empty(result: ResolvedParameters) -> Option<ResolvedParameters> {
    if result.is_empty() {
        None
    } else {
        Some(result)
    }
}
