use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;

/// Top-level project configuration loaded from `.jlg.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JlgConfig {
    /// Spec file used when `--input` is not given. Prompted for when absent.
    pub input: Option<String>,
    pub output: String,
    pub naming: NamingConfig,
    pub validation: ValidationConfig,
    pub java: GeneratorConfig,
}

impl Default for JlgConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: "api".to_string(),
            naming: NamingConfig::default(),
            validation: ValidationConfig::default(),
            java: GeneratorConfig::default(),
        }
    }
}

/// Method name aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Map from resolved method name (operationId or route-derived) to custom alias.
    pub aliases: IndexMap<String, String>,
}

/// Checks applied while building the resource models.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub duplicate_operation_ids: DuplicatePolicy,
}

/// What to do when two operations of one resource share a method name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Warn,
    Error,
}

/// Options for the Java layer generator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Java package prefix; the resource name is appended.
    pub package: String,
    pub layout: OutputLayout,
    /// Directory holding `<role>.java.j2` overrides for the built-in templates.
    pub templates_dir: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package: "com.example.api".to_string(),
            layout: OutputLayout::PerResource,
            templates_dir: None,
        }
    }
}

/// How generated files are laid out on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputLayout {
    /// `<resource>/<Resource><Role>.java`
    #[default]
    PerResource,
    /// `<role>/<Resource><Role>.java`
    PerRole,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".jlg.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<JlgConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: JlgConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# jlg configuration
# input: sample.yaml    # spec file; prompted for when omitted
output: api

naming:
  aliases: {}
    # getOrder: findOrder    # operationId → custom method name

validation:
  duplicate_operation_ids: warn   # warn | error

java:
  package: com.example.api
  layout: per_resource   # per_resource | per_role
  # templates_dir: templates   # controller.java.j2, service.java.j2, business.java.j2, dao.java.j2
"#
}
