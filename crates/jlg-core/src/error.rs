use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported Swagger version: {0}")]
    UnsupportedVersion(String),

    #[error("unknown HTTP method `{method}` under path {path}")]
    UnknownMethod { path: String, method: String },
}

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("{method} {path} has no \"200\" response")]
    MissingSuccessResponse { path: String, method: String },

    #[error("operationId `{name}` is used more than once in resource `{resource}`")]
    DuplicateOperationId { resource: String, name: String },
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to render template `{name}`: {message}")]
    Template { name: String, message: String },

    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml_ng::Error,
    },
}
