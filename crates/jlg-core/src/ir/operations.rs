use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::parse::parameter::ParameterIn;

/// Marker text used wherever a response shape cannot be mapped to a Java type.
pub const UNSUPPORTED_TYPE: &str = "unsupported type";

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
}

impl HttpMethod {
    /// The constant-case form used in JAX-RS annotations.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            "options" => Ok(HttpMethod::Options),
            "head" => Ok(HttpMethod::Head),
            other => Err(format!("unknown HTTP method: {other}")),
        }
    }
}

/// Where a parameter is read from, as far as the generated code cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Path,
    Query,
    Other,
}

impl From<ParameterIn> for ParameterLocation {
    fn from(value: ParameterIn) -> Self {
        match value {
            ParameterIn::Path => ParameterLocation::Path,
            ParameterIn::Query => ParameterLocation::Query,
            ParameterIn::Header
            | ParameterIn::FormData
            | ParameterIn::Body
            | ParameterIn::Other => ParameterLocation::Other,
        }
    }
}

impl ParameterLocation {
    /// The JAX-RS annotation (with trailing space) binding a parameter by name.
    pub fn annotation(&self, name: &str) -> Option<String> {
        match self {
            ParameterLocation::Path => Some(format!("@PathParam(\"{name}\") ")),
            ParameterLocation::Query => Some(format!("@QueryParam(\"{name}\") ")),
            ParameterLocation::Other => None,
        }
    }
}

/// A resolved Java return type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// `List<Name>`
    List(String),
    /// A definition name, PascalCased.
    Named(String),
    String,
    Unsupported,
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolvedType::List(inner) => write!(f, "List<{inner}>"),
            ResolvedType::Named(name) => f.write_str(name),
            ResolvedType::String => f.write_str("String"),
            ResolvedType::Unsupported => f.write_str(UNSUPPORTED_TYPE),
        }
    }
}

impl Serialize for ResolvedType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A `@param` line for the method's javadoc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JavadocParameter {
    pub param: String,
    pub param_description: Option<String>,
}

/// A method argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrParameter {
    /// Name as declared in the spec.
    pub name: String,
    pub description: Option<String>,
    pub location: ParameterLocation,
    pub parameter_type: String,
    pub parameter_annotation: Option<String>,
    /// camelCase name, followed by `", "` unless this is the last argument.
    pub parameter_variable: String,
}

/// The `200` response of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IrResponse {
    #[serde(rename = "returnDescription")]
    pub description: Option<String>,
    /// `None` when the response declares no schema.
    #[serde(rename = "responseValue")]
    pub response_type: Option<ResolvedType>,
}

/// One operation, flattened for the templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IrEndpoint {
    pub description: Option<String>,
    pub summary: Option<String>,
    #[serde(rename = "produce")]
    pub produces: Vec<String>,
    pub http_method: HttpMethod,
    pub method_name: String,
    pub full_path: String,
    /// Path below the resource segment.
    pub path: String,
    #[serde(rename = "existResponse")]
    pub has_response_body: bool,
    pub deprecated: bool,
    pub javadoc_parameters: Vec<JavadocParameter>,
    pub parameters: Vec<IrParameter>,
    pub response: IrResponse,
}
