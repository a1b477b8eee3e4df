use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::operations::IrEndpoint;

/// The generator-ready model of a Swagger spec: one entry per resource.
#[derive(Debug, Clone, serde::Serialize)]
pub struct IrSpec {
    pub info: IrInfo,
    pub resources: Vec<ResourceModel>,
}

impl IrSpec {
    /// Total number of endpoints across all resources.
    pub fn endpoint_count(&self) -> usize {
        self.resources.iter().map(|r| r.apis.len()).sum()
    }
}

/// API metadata.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct IrInfo {
    pub title: String,
    pub version: String,
    #[serde(rename = "basePath", skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,
}

/// All endpoints sharing a first path segment, rendered as one class per role.
#[derive(Debug, Clone)]
pub struct ResourceModel {
    pub name: NormalizedName,
    pub apis: Vec<IrEndpoint>,
}

// Templates address the resource by these keys.
impl Serialize for ResourceModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ResourceModel", 4)?;
        s.serialize_field("resource", &self.name.original)?;
        s.serialize_field("pascalClassname", &self.name.pascal_case)?;
        s.serialize_field("camelClassname", &self.name.camel_case)?;
        s.serialize_field("apis", &self.apis)?;
        s.end()
    }
}

/// A resource name with its Java class and variable spellings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedName {
    pub original: String,
    pub pascal_case: String,
    pub camel_case: String,
}

impl fmt::Display for NormalizedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}
