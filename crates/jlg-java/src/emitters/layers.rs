use jlg_core::config::OutputLayout;
use jlg_core::ir::ResourceModel;
use jlg_core::{GeneratedFile, GeneratorError};
use log::debug;
use minijinja::{Environment, context};

use super::output_path;

/// One generated architectural layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Controller,
    Service,
    Business,
    Dao,
}

impl Role {
    /// Emission order.
    pub const ALL: [Role; 4] = [Role::Controller, Role::Service, Role::Business, Role::Dao];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Controller => "controller",
            Role::Service => "service",
            Role::Business => "business",
            Role::Dao => "dao",
        }
    }

    pub fn pascal_case(&self) -> &'static str {
        match self {
            Role::Controller => "Controller",
            Role::Service => "Service",
            Role::Business => "Business",
            Role::Dao => "Dao",
        }
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            Role::Controller => "controller.java.j2",
            Role::Service => "service.java.j2",
            Role::Business => "business.java.j2",
            Role::Dao => "dao.java.j2",
        }
    }
}

/// `OrdersController.java`
pub fn file_name(resource: &ResourceModel, role: Role) -> String {
    format!("{}{}.java", resource.name.pascal_case, role.pascal_case())
}

/// Render all four layers of one resource.
pub fn emit_resource(
    env: &Environment<'_>,
    resource: &ResourceModel,
    package: &str,
    layout: OutputLayout,
) -> Result<Vec<GeneratedFile>, GeneratorError> {
    let mut files = Vec::with_capacity(Role::ALL.len());

    for role in Role::ALL {
        let tmpl = env
            .get_template(role.template_name())
            .map_err(|e| template_error(role, &e))?;
        let content = tmpl
            .render(context! {
                classObject => resource,
                package => package,
            })
            .map_err(|e| template_error(role, &e))?;

        let dir = match layout {
            OutputLayout::PerResource => resource.name.original.as_str(),
            OutputLayout::PerRole => role.as_str(),
        };
        let path = output_path(dir, &file_name(resource, role));
        debug!("rendered {path}");

        files.push(GeneratedFile { path, content });
    }

    Ok(files)
}

fn template_error(role: Role, err: &minijinja::Error) -> GeneratorError {
    GeneratorError::Template {
        name: role.template_name().to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitters::templates::Templates;
    use jlg_core::parse;
    use jlg_core::transform;

    const ORDERS: &str = r##"
paths:
  /orders/{id}:
    get:
      summary: Find an order
      operationId: getOrder
      produces: [application/json]
      parameters:
        - name: id
          in: path
          type: string
          description: order id
      responses:
        "200":
          description: the order
          schema:
            $ref: "#/definitions/order"
    delete:
      operationId: cancelOrder
      parameters:
        - name: id
          in: path
          type: string
      responses:
        "200":
          description: cancelled
"##;

    fn orders() -> ResourceModel {
        let spec = parse::from_yaml(ORDERS).unwrap();
        let mut ir = transform::transform(&spec).unwrap();
        ir.resources.remove(0)
    }

    fn render(layout: OutputLayout) -> Vec<GeneratedFile> {
        let templates = Templates::builtin();
        let env = templates.environment().unwrap();
        emit_resource(&env, &orders(), "com.example.api", layout).unwrap()
    }

    #[test]
    fn test_role_order_and_names() {
        let paths: Vec<String> = render(OutputLayout::PerResource)
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "orders/OrdersController.java",
                "orders/OrdersService.java",
                "orders/OrdersBusiness.java",
                "orders/OrdersDao.java",
            ]
        );
    }

    #[test]
    fn test_per_role_layout() {
        let paths: Vec<String> = render(OutputLayout::PerRole)
            .into_iter()
            .map(|f| f.path)
            .collect();
        assert_eq!(
            paths,
            vec![
                "controller/OrdersController.java",
                "service/OrdersService.java",
                "business/OrdersBusiness.java",
                "dao/OrdersDao.java",
            ]
        );
    }

    #[test]
    fn test_controller_content() {
        let files = render(OutputLayout::PerResource);
        let controller = &files[0].content;
        assert!(controller.starts_with("package com.example.api.orders;\n"));
        assert!(controller.contains("@Path(\"/orders\")\npublic class OrdersController {"));
        assert!(controller.contains("    @GET\n    @Path(\"/{id}\")\n"));
        assert!(controller.contains("    @Produces({ \"application/json\" })\n"));
        assert!(controller.contains("     * Find an order\n"));
        assert!(controller.contains("     * @param id order id\n"));
        assert!(controller.contains("     * @return the order\n"));
        assert!(controller.contains("    public Order getOrder(@PathParam(\"id\") String id) {\n"));
        assert!(controller.contains("        return ordersService.getOrder(id);\n"));
        assert!(controller.contains("    @DELETE\n"));
        assert!(controller.contains("    public void cancelOrder(@PathParam(\"id\") String id) {\n"));
        assert!(controller.contains("        ordersService.cancelOrder(id);\n"));
        assert!(!controller.contains("none"));
        assert!(controller.ends_with("}\n"));
    }

    #[test]
    fn test_lower_layers_delegate() {
        let files = render(OutputLayout::PerResource);
        assert!(files[1].content.contains("return ordersBusiness.getOrder(id);"));
        assert!(files[2].content.contains("return ordersDao.getOrder(id);"));
        assert!(
            files[3]
                .content
                .contains("throw new UnsupportedOperationException(\"GET /orders/{id}\");")
        );
        assert!(files[3].content.contains("public class OrdersDao {"));
    }

    #[test]
    fn test_empty_resource_segment() {
        let spec = parse::from_yaml(
            "paths:\n  /:\n    get:\n      operationId: root\n      responses:\n        \"200\":\n          description: ok\n",
        )
        .unwrap();
        let ir = transform::transform(&spec).unwrap();
        let templates = Templates::builtin();
        let env = templates.environment().unwrap();
        let files = emit_resource(
            &env,
            &ir.resources[0],
            "com.example.api",
            OutputLayout::PerResource,
        )
        .unwrap();
        assert_eq!(files[0].path, "UnnamedController.java");
    }
}
