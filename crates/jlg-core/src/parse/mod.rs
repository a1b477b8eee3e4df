pub mod operation;
pub mod parameter;
pub mod response;
pub mod schema;
pub mod spec;

use crate::error::ParseError;
use crate::ir::HttpMethod;
use spec::SwaggerSpec;

/// Parse a Swagger 2.0 spec from YAML.
pub fn from_yaml(input: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_yaml_ng::from_str(input)?;
    validate(&spec)?;
    Ok(spec)
}

/// Parse a Swagger 2.0 spec from JSON.
pub fn from_json(input: &str) -> Result<SwaggerSpec, ParseError> {
    let spec: SwaggerSpec = serde_json::from_str(input)?;
    validate(&spec)?;
    Ok(spec)
}

fn validate(spec: &SwaggerSpec) -> Result<(), ParseError> {
    if let Some(version) = &spec.swagger {
        if !version.starts_with("2.") {
            return Err(ParseError::UnsupportedVersion(version.clone()));
        }
    }

    for (path, item) in &spec.paths {
        for method in item.keys() {
            if method.parse::<HttpMethod>().is_err() {
                return Err(ParseError::UnknownMethod {
                    path: path.clone(),
                    method: method.clone(),
                });
            }
        }
    }
    Ok(())
}
