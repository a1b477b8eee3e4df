use std::collections::HashSet;

use indexmap::IndexMap;
use log::{debug, warn};

use crate::config::DuplicatePolicy;
use crate::error::{ParseError, TransformError};
use crate::ir::{HttpMethod, IrEndpoint, IrInfo, IrSpec, ResourceModel};
use crate::parse::operation::Operation;
use crate::parse::spec::SwaggerSpec;

use super::endpoint::normalize_endpoint;
use super::name_normalizer::normalize_name;
use super::path_classifier::resource_key;

/// Options controlling how method names are resolved and checked.
#[derive(Debug, Clone, Default)]
pub struct TransformOptions {
    pub aliases: IndexMap<String, String>,
    pub duplicate_operation_ids: DuplicatePolicy,
}

/// One operation tagged with the path it was declared under.
struct PathEntry<'a> {
    full_path: &'a str,
    method: HttpMethod,
    operation: &'a Operation,
}

/// Transform a parsed Swagger spec into one resource model per first path segment.
pub fn transform(spec: &SwaggerSpec) -> Result<IrSpec, TransformError> {
    transform_with_options(spec, &TransformOptions::default())
}

/// Transform with explicit naming options.
pub fn transform_with_options(
    spec: &SwaggerSpec,
    options: &TransformOptions,
) -> Result<IrSpec, TransformError> {
    let groups = group_by_resource(spec)?;

    let mut resources = Vec::with_capacity(groups.len());
    for (resource, entries) in groups {
        resources.push(build_resource(resource, &entries, options)?);
    }

    let info = spec
        .info
        .as_ref()
        .map(|i| IrInfo {
            title: i.title.clone(),
            version: i.version.clone(),
            base_path: spec.base_path.clone(),
        })
        .unwrap_or_else(|| IrInfo {
            base_path: spec.base_path.clone(),
            ..IrInfo::default()
        });

    Ok(IrSpec { info, resources })
}

/// Group every (path, verb) pair by resource, keeping discovery order both
/// across and within groups.
fn group_by_resource(
    spec: &SwaggerSpec,
) -> Result<IndexMap<&str, Vec<PathEntry<'_>>>, TransformError> {
    let mut groups: IndexMap<&str, Vec<PathEntry<'_>>> = IndexMap::new();

    for (full_path, item) in &spec.paths {
        let entries = groups.entry(resource_key(full_path)).or_default();
        for (verb, operation) in item {
            let method = verb
                .parse::<HttpMethod>()
                .map_err(|_| ParseError::UnknownMethod {
                    path: full_path.clone(),
                    method: verb.clone(),
                })?;
            entries.push(PathEntry {
                full_path,
                method,
                operation,
            });
        }
    }

    Ok(groups)
}

fn build_resource(
    resource: &str,
    entries: &[PathEntry<'_>],
    options: &TransformOptions,
) -> Result<ResourceModel, TransformError> {
    let apis = entries
        .iter()
        .map(|e| normalize_endpoint(e.full_path, e.method, e.operation, options))
        .collect::<Result<Vec<_>, _>>()?;

    check_duplicate_names(resource, &apis, options.duplicate_operation_ids)?;

    debug!("resource `{resource}`: {} endpoint(s)", apis.len());

    Ok(ResourceModel {
        name: normalize_name(resource),
        apis,
    })
}

fn check_duplicate_names(
    resource: &str,
    apis: &[IrEndpoint],
    policy: DuplicatePolicy,
) -> Result<(), TransformError> {
    let mut seen = HashSet::new();
    for api in apis {
        if seen.insert(api.method_name.as_str()) {
            continue;
        }
        match policy {
            DuplicatePolicy::Warn => warn!(
                "operationId `{}` is used more than once in resource `{resource}`",
                api.method_name
            ),
            DuplicatePolicy::Error => {
                return Err(TransformError::DuplicateOperationId {
                    resource: resource.to_string(),
                    name: api.method_name.clone(),
                });
            }
        }
    }
    Ok(())
}
