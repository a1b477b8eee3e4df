use std::path::Path;

use jlg_core::config::GeneratorConfig;
use jlg_core::ir::IrSpec;
use jlg_core::{CodeGenerator, GeneratedFile, GeneratorError};

use crate::emitters::layers::emit_resource;
use crate::emitters::templates::Templates;

/// Layered Java generator: a controller, service, business and dao class per resource.
pub struct JavaLayersGenerator;

impl JavaLayersGenerator {
    fn load_templates(config: &GeneratorConfig) -> Result<Templates, GeneratorError> {
        match config.templates_dir.as_deref() {
            Some(dir) => Templates::with_overrides(Path::new(dir)),
            None => Ok(Templates::builtin()),
        }
    }
}

impl CodeGenerator for JavaLayersGenerator {
    fn id(&self) -> &'static str {
        "java-layers"
    }

    fn generate(
        &self,
        ir: &IrSpec,
        config: &GeneratorConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        let templates = Self::load_templates(config)?;
        let env = templates.environment()?;

        let mut files = Vec::new();
        for resource in &ir.resources {
            files.extend(emit_resource(&env, resource, &config.package, config.layout)?);
        }
        Ok(files)
    }
}
