use log::debug;

use crate::ir::ResolvedType;
use crate::parse::schema::{Schema, SchemaType};

use super::name_normalizer::pascal_case;

const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// The response schema shapes the resolver distinguishes.
#[derive(Debug, Clone, Copy, PartialEq)]
enum SchemaShape<'a> {
    /// `{type: array, items: {$ref}}`
    Array { items_ref: Option<&'a str> },
    /// `{type: string, ...}`, binary payloads included.
    String,
    /// `{type: object, properties: {...}}`; only the first property counts.
    Object { first_property: Option<&'a Schema> },
    /// Any other declared `type`, including ones outside Swagger 2.0.
    Scalar(&'a SchemaType),
    /// `{$ref}` without a `type`.
    Ref(&'a str),
    Unknown,
}

fn classify(schema: &Schema) -> SchemaShape<'_> {
    match (schema.schema_type.as_ref(), schema.ref_path.as_deref()) {
        (Some(SchemaType::Array), _) => SchemaShape::Array {
            items_ref: items_ref(schema),
        },
        (Some(SchemaType::String), _) => SchemaShape::String,
        (Some(SchemaType::Object), _) => SchemaShape::Object {
            first_property: schema.properties.values().next(),
        },
        (Some(other), _) => SchemaShape::Scalar(other),
        (None, Some(ref_path)) => SchemaShape::Ref(ref_path),
        (None, None) => SchemaShape::Unknown,
    }
}

fn items_ref(schema: &Schema) -> Option<&str> {
    schema.items.as_deref().and_then(|i| i.ref_path.as_deref())
}

/// Infer the Java return type of a `200` response from its schema.
///
/// Returns `None` only when there is no schema at all; every schema that is
/// present resolves to a type, with `ResolvedType::Unsupported` for shapes
/// that have no mapping.
pub fn resolve_response_type(schema: Option<&Schema>) -> Option<ResolvedType> {
    let schema = schema?;

    let resolved = match classify(schema) {
        SchemaShape::Array { items_ref } => list_of(items_ref),
        SchemaShape::String => ResolvedType::Unsupported,
        SchemaShape::Object {
            first_property: Some(property),
        } => resolve_property(property),
        SchemaShape::Object {
            first_property: None,
        } => ResolvedType::Unsupported,
        SchemaShape::Scalar(_) => ResolvedType::Unsupported,
        SchemaShape::Ref(ref_path) => ResolvedType::Named(definition_name(ref_path)),
        SchemaShape::Unknown => ResolvedType::Unsupported,
    };

    if resolved == ResolvedType::Unsupported {
        debug!("unsupported response schema: {schema:?}");
    }
    Some(resolved)
}

/// An object response is typed by its first property alone.
fn resolve_property(property: &Schema) -> ResolvedType {
    match property.schema_type.as_ref() {
        Some(SchemaType::Array) => list_of(items_ref(property)),
        Some(SchemaType::String) => ResolvedType::String,
        _ => ResolvedType::Unsupported,
    }
}

fn list_of(items_ref: Option<&str>) -> ResolvedType {
    match items_ref {
        Some(ref_path) => ResolvedType::List(definition_name(ref_path)),
        None => ResolvedType::Unsupported,
    }
}

/// `#/definitions/rebate_statement` → `RebateStatement`
pub fn definition_name(ref_path: &str) -> String {
    pascal_case(ref_path.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(ref_path))
}
