use jlg_core::error::ParseError;
use jlg_core::parse;
use jlg_core::parse::parameter::ParameterIn;
use jlg_core::parse::schema::SchemaType;

const SHOP: &str = include_str!("fixtures/shop.yaml");

#[test]
fn parse_shop_yaml() {
    let spec = parse::from_yaml(SHOP).expect("should parse shop.yaml");
    assert_eq!(spec.swagger.as_deref(), Some("2.0"));
    assert_eq!(spec.info.as_ref().unwrap().title, "Shop API");
    assert_eq!(spec.base_path.as_deref(), Some("/v1"));
    assert_eq!(spec.paths.len(), 5);
    assert_eq!(spec.definitions.len(), 3);

    let orders = spec.paths.get("/orders").expect("should have /orders");
    let verbs: Vec<&str> = orders.keys().map(String::as_str).collect();
    assert_eq!(verbs, vec!["get", "post"]);

    let list = &orders["get"];
    assert_eq!(list.operation_id.as_deref(), Some("listOrders"));
    assert_eq!(list.produces, vec!["application/json".to_string()]);
    assert_eq!(list.parameters.len(), 3);
    assert_eq!(list.parameters[0].location, ParameterIn::Query);
    assert_eq!(list.parameters[0].param_type, Some(SchemaType::Integer));

    let ok = list.responses.get("200").expect("should have 200 response");
    let schema = ok.schema.as_ref().expect("should have schema");
    assert_eq!(schema.schema_type, Some(SchemaType::Array));
    assert_eq!(
        schema.items.as_ref().unwrap().ref_path.as_deref(),
        Some("#/definitions/order")
    );
}

#[test]
fn parse_preserves_path_order() {
    let spec = parse::from_yaml(SHOP).unwrap();
    let paths: Vec<&str> = spec.paths.keys().map(String::as_str).collect();
    assert_eq!(
        paths,
        vec![
            "/orders",
            "/orders/{id}",
            "/rebates/statements/{year}",
            "/rebates/export",
            "/orders/{id}/items",
        ]
    );
}

#[test]
fn parse_json() {
    let json = r##"{
  "swagger": "2.0",
  "paths": {
    "/orders/{id}": {
      "get": {
        "operationId": "getOrder",
        "parameters": [{"name": "id", "in": "path", "type": "string"}],
        "responses": {"200": {"description": "ok", "schema": {"$ref": "#/definitions/order"}}}
      }
    }
  }
}"##;
    let spec = parse::from_json(json).expect("should parse JSON");
    assert_eq!(spec.paths.len(), 1);
    assert!(spec.info.is_none());
}

#[test]
fn parse_without_version() {
    let yaml = r#"
paths:
  /ping:
    get:
      responses:
        "200":
          description: pong
"#;
    let spec = parse::from_yaml(yaml).expect("version is optional");
    assert!(spec.swagger.is_none());
}

#[test]
fn parse_invalid_version() {
    let yaml = r#"
swagger: "3.0"
paths: {}
"#;
    let err = parse::from_yaml(yaml).unwrap_err();
    assert!(matches!(err, ParseError::UnsupportedVersion(ref v) if v == "3.0"));
}

#[test]
fn parse_unknown_method() {
    let yaml = r#"
swagger: "2.0"
paths:
  /orders:
    fetch:
      responses:
        "200":
          description: ok
"#;
    let err = parse::from_yaml(yaml).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnknownMethod { ref path, ref method } if path == "/orders" && method == "fetch"
    ));
}

#[test]
fn parse_nonstandard_type_and_location() {
    let yaml = r#"
swagger: "2.0"
paths:
  /events:
    get:
      operationId: listEvents
      parameters:
        - { name: session, in: cookie, type: string }
      responses:
        "200":
          description: ok
          schema:
            type: date
definitions:
  event:
    type: timestamp
"#;
    let spec = parse::from_yaml(yaml).expect("unknown keywords should not abort parsing");
    let op = &spec.paths["/events"]["get"];
    assert_eq!(op.parameters[0].location, ParameterIn::Other);

    let schema = op.responses["200"].schema.as_ref().unwrap();
    assert_eq!(schema.schema_type, Some(SchemaType::Other("date".to_string())));
    assert_eq!(
        spec.definitions["event"].schema_type.as_ref().map(SchemaType::as_str),
        Some("timestamp")
    );

    let ir = jlg_core::transform::transform(&spec).expect("should transform");
    let api = &ir.resources[0].apis[0];
    assert_eq!(
        api.response.response_type,
        Some(jlg_core::ir::ResolvedType::Unsupported)
    );
    assert_eq!(api.parameters[0].parameter_type, "Session");
}

#[test]
fn parse_malformed_yaml() {
    let err = parse::from_yaml("paths: [unclosed").unwrap_err();
    assert!(matches!(err, ParseError::Yaml(_)));
}
