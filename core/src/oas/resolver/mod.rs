#![deny(missing_docs)]

//! # Resolver Module
//!
//! Replaces `$ref` pointers with the schemas they name.
//!
//! Handles:
//! - Recursive expansion of `properties`, array `items`, union members and
//!   `additionalProperties` of every referenced schema.
//! - Cycle breaking: a reference to a schema that is already being expanded on the
//!   current path is kept as a terminal `{ "$ref": ... }` placeholder.
//! - Memoization of finished expansions by schema name.
//!
//! Submodules apply the resolver to parameters, request bodies and responses.

pub mod body;
pub mod params;
pub mod responses;

pub use body::{resolve_body_parameter, resolve_request_body, JSON_MEDIA_TYPE};
pub use params::{collect_parameters, resolve_parameters, resolve_parameters_v2, ParamLocation};
pub use responses::{resolve_success_response, SUCCESS_STATUS};

use crate::error::{AppError, AppResult};
use crate::oas::models::{AdditionalProperties, SchemaNode};
use crate::oas::ref_utils::schema_name;
use crate::oas::registry::SchemaRegistry;
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, trace};

/// Schema names being expanded on the current resolution path.
///
/// Each descent receives its own copy, so sibling branches only ever see the
/// names of their ancestors.
pub type VisitedSet = BTreeSet<String>;

/// Resolves references against a [`SchemaRegistry`].
///
/// One resolver lives for one generation run. The registry is never mutated;
/// finished expansions are cached by schema name and reused.
pub struct Resolver<'a> {
    registry: &'a SchemaRegistry,
    cache: HashMap<String, SchemaNode>,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver with an empty cache.
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self {
            registry,
            cache: HashMap::new(),
        }
    }

    /// Resolves a node starting from an empty visited set.
    pub fn resolve_root(&mut self, node: &SchemaNode) -> AppResult<SchemaNode> {
        self.resolve(node, &VisitedSet::new())
    }

    /// Resolves `node` given the names already being expanded on this path.
    ///
    /// A node without `$ref` is returned unchanged. A reference whose name is in
    /// `visited` becomes a `{ "$ref": pointer }` placeholder.
    ///
    /// # Errors
    ///
    /// `AppError::UnresolvedRef` if the pointer does not name a schema of the registry.
    pub fn resolve(&mut self, node: &SchemaNode, visited: &VisitedSet) -> AppResult<SchemaNode> {
        let Some(pointer) = node.reference.as_deref() else {
            return Ok(node.clone());
        };

        let name =
            schema_name(pointer).ok_or_else(|| AppError::UnresolvedRef(pointer.to_string()))?;

        if visited.contains(&name) {
            trace!(schema = %name, "cycle detected, keeping reference");
            return Ok(SchemaNode::reference(pointer));
        }

        if let Some(cached) = self.cache.get(&name) {
            trace!(schema = %name, "reusing resolved schema");
            return Ok(cached.clone());
        }

        let registry = self.registry;
        let target = registry
            .get(&name)
            .ok_or_else(|| AppError::UnresolvedRef(pointer.to_string()))?;

        let mut path = visited.clone();
        path.insert(name.clone());

        // An alias (`A: { $ref: B }`) is followed before its children are walked.
        let mut resolved = if target.reference.is_some() {
            self.resolve(target, &path)?
        } else {
            target.clone()
        };
        self.resolve_children(&mut resolved, &path)?;

        debug!(schema = %name, "resolved schema reference");
        self.cache.insert(name, resolved.clone());
        Ok(resolved)
    }

    /// Expands one level of references below an extracted target.
    ///
    /// Deeper levels are reached through the recursive `resolve` calls, which walk
    /// their own targets the same way.
    fn resolve_children(&mut self, target: &mut SchemaNode, path: &VisitedSet) -> AppResult<()> {
        if let Some(properties) = target.properties.as_mut() {
            for property in properties.values_mut() {
                if property.reference.is_some() {
                    *property = self.resolve(property, path)?;
                } else if property.is_array() {
                    if let Some(items) = property.items.as_mut() {
                        let resolved = self.resolve(items, path)?;
                        **items = resolved;
                    }
                }
            }
        }

        if target.is_array() {
            if let Some(items) = target.items.as_mut() {
                let resolved = self.resolve(items, path)?;
                **items = resolved;
            }
        }

        for members in [target.any_of.as_mut(), target.one_of.as_mut()]
            .into_iter()
            .flatten()
        {
            for member in members.iter_mut() {
                *member = self.resolve(member, path)?;
            }
        }

        if let Some(AdditionalProperties::Schema(schema)) = target.additional_properties.as_mut() {
            let resolved = self.resolve(schema, path)?;
            **schema = resolved;
        }

        Ok(())
    }
}
