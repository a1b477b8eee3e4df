use std::fs;
use std::path::Path;

use jlg_core::GeneratorError;
use log::debug;
use minijinja::{AutoEscape, Environment};

use super::layers::Role;

/// Template sources for the four roles.
#[derive(Debug, Clone)]
pub struct Templates {
    controller: String,
    service: String,
    business: String,
    dao: String,
}

impl Templates {
    /// The templates shipped with the generator.
    pub fn builtin() -> Self {
        Self {
            controller: include_str!("../../templates/controller.java.j2").to_string(),
            service: include_str!("../../templates/service.java.j2").to_string(),
            business: include_str!("../../templates/business.java.j2").to_string(),
            dao: include_str!("../../templates/dao.java.j2").to_string(),
        }
    }

    /// Built-in templates, with any `<role>.java.j2` found in `dir` taking
    /// precedence.
    pub fn with_overrides(dir: &Path) -> Result<Self, GeneratorError> {
        let mut templates = Self::builtin();
        for role in Role::ALL {
            let path = dir.join(role.template_name());
            if !path.is_file() {
                continue;
            }
            let source = fs::read_to_string(&path)
                .map_err(|source| GeneratorError::TemplateRead {
                    path: path.clone(),
                    source,
                })?;
            debug!("using template override {}", path.display());
            *templates.source_mut(role) = source;
        }
        Ok(templates)
    }

    pub fn source(&self, role: Role) -> &str {
        match role {
            Role::Controller => &self.controller,
            Role::Service => &self.service,
            Role::Business => &self.business,
            Role::Dao => &self.dao,
        }
    }

    fn source_mut(&mut self, role: Role) -> &mut String {
        match role {
            Role::Controller => &mut self.controller,
            Role::Service => &mut self.service,
            Role::Business => &mut self.business,
            Role::Dao => &mut self.dao,
        }
    }

    /// Compile all role templates into one environment.
    pub fn environment(&self) -> Result<Environment<'_>, GeneratorError> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        // Java generics must come through as written.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for role in Role::ALL {
            env.add_template(role.template_name(), self.source(role))
                .map_err(|e| GeneratorError::Template {
                    name: role.template_name().to_string(),
                    message: e.to_string(),
                })?;
        }
        Ok(env)
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_templates_compile() {
        let templates = Templates::builtin();
        let env = templates.environment().unwrap();
        for role in Role::ALL {
            assert!(env.get_template(role.template_name()).is_ok());
        }
    }

    #[test]
    fn test_override_replaces_only_present_roles() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("dao.java.j2"), "// custom dao\n").unwrap();

        let templates = Templates::with_overrides(tmp.path()).unwrap();
        assert_eq!(templates.source(Role::Dao), "// custom dao\n");
        assert_eq!(
            templates.source(Role::Controller),
            Templates::builtin().source(Role::Controller)
        );
    }

    #[test]
    fn test_invalid_override_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("service.java.j2"), "{% for %}").unwrap();

        let templates = Templates::with_overrides(tmp.path()).unwrap();
        let err = templates.environment().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::Template { ref name, .. } if name == "service.java.j2"
        ));
    }
}
