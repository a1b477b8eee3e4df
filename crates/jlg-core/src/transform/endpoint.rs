use log::debug;

use crate::error::TransformError;
use crate::ir::{
    HttpMethod, IrEndpoint, IrParameter, IrResponse, JavadocParameter, ParameterLocation,
};
use crate::parse::operation::Operation;
use crate::parse::parameter::Parameter;

use super::name_normalizer::{camel_case, pascal_case, route_to_name};
use super::path_classifier::extract_api_path;
use super::spec_to_ir::TransformOptions;
use super::type_resolver::resolve_response_type;

const SUCCESS_STATUS: &str = "200";

/// Java type used for a path/query parameter that declares no `type`.
const FALLBACK_PARAMETER_TYPE: &str = "Object";

/// Flatten one operation into an `IrEndpoint`.
///
/// Fails when the operation has no `200` response.
pub fn normalize_endpoint(
    full_path: &str,
    method: HttpMethod,
    op: &Operation,
    options: &TransformOptions,
) -> Result<IrEndpoint, TransformError> {
    let success = op.responses.get(SUCCESS_STATUS).ok_or_else(|| {
        TransformError::MissingSuccessResponse {
            path: full_path.to_string(),
            method: method.to_string(),
        }
    })?;

    let raw_name = op
        .operation_id
        .clone()
        .unwrap_or_else(|| route_to_name(method, full_path));
    let method_name = options.aliases.get(&raw_name).cloned().unwrap_or(raw_name);

    let javadoc_parameters = op
        .parameters
        .iter()
        .map(|p| JavadocParameter {
            param: p.name.clone(),
            param_description: p.description.clone(),
        })
        .collect();

    let last = op.parameters.len().saturating_sub(1);
    let parameters = op
        .parameters
        .iter()
        .enumerate()
        .map(|(i, p)| build_parameter(p, i == last))
        .collect();

    let response = IrResponse {
        description: success.description.clone(),
        response_type: resolve_response_type(success.schema.as_ref()),
    };

    debug!("{method} {full_path} → {method_name}");

    Ok(IrEndpoint {
        description: op.description.clone(),
        summary: op.summary.clone(),
        produces: op.produces.clone(),
        http_method: method,
        method_name,
        full_path: full_path.to_string(),
        path: extract_api_path(full_path).to_string(),
        has_response_body: success.schema.is_some(),
        deprecated: op.deprecated.unwrap_or(false),
        javadoc_parameters,
        parameters,
        response,
    })
}

fn build_parameter(param: &Parameter, is_last: bool) -> IrParameter {
    let location = ParameterLocation::from(param.location);

    // Bound parameters use their declared scalar type; anything else (body,
    // header, form) is typed after its own name.
    let parameter_type = match location {
        ParameterLocation::Path | ParameterLocation::Query => param
            .param_type
            .as_ref()
            .map(|t| pascal_case(t.as_str()))
            .unwrap_or_else(|| FALLBACK_PARAMETER_TYPE.to_string()),
        ParameterLocation::Other => pascal_case(&param.name),
    };

    let mut parameter_variable = camel_case(&param.name);
    if !is_last {
        parameter_variable.push_str(", ");
    }

    IrParameter {
        name: param.name.clone(),
        description: param.description.clone(),
        location,
        parameter_type,
        parameter_annotation: location.annotation(&param.name),
        parameter_variable,
    }
}
