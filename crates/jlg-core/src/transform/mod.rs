pub mod endpoint;
pub mod name_normalizer;
pub mod path_classifier;
pub mod spec_to_ir;
pub mod type_resolver;

pub use spec_to_ir::{TransformOptions, transform, transform_with_options};
