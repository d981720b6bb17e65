use crate::introspection::Schema;
use crate::introspection::SchemaParseError;
use crate::introspection::TypeKind;

type Result<T> = std::result::Result<T, SchemaParseError>;

const MINIMAL_DOCUMENT: &str = r#"{
  "data": {
    "__schema": {
      "types": [
        {
          "kind": "OBJECT",
          "name": "Query",
          "description": "The root of all queries.",
          "fields": [
            {
              "name": "container",
              "description": null,
              "args": [
                {
                  "name": "platform",
                  "description": "",
                  "type": { "kind": "SCALAR", "name": "Platform", "ofType": null },
                  "defaultValue": null
                }
              ],
              "type": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": { "kind": "OBJECT", "name": "Container", "ofType": null }
              },
              "isDeprecated": false,
              "deprecationReason": null
            }
          ],
          "inputFields": null,
          "interfaces": [],
          "enumValues": null,
          "possibleTypes": null
        },
        {
          "kind": "OBJECT",
          "name": "Container",
          "fields": [
            {
              "name": "withExec",
              "args": [
                {
                  "name": "args",
                  "type": {
                    "kind": "NON_NULL",
                    "ofType": {
                      "kind": "LIST",
                      "ofType": {
                        "kind": "NON_NULL",
                        "ofType": { "kind": "SCALAR", "name": "String" }
                      }
                    }
                  }
                },
                {
                  "name": "expand",
                  "type": { "kind": "SCALAR", "name": "Boolean" },
                  "defaultValue": "false"
                },
                {
                  "name": "stdin",
                  "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "String" } }
                }
              ],
              "type": {
                "kind": "NON_NULL",
                "ofType": { "kind": "OBJECT", "name": "Container" }
              },
              "isDeprecated": false
            },
            {
              "name": "id",
              "args": null,
              "type": {
                "kind": "NON_NULL",
                "ofType": { "kind": "SCALAR", "name": "ContainerID" }
              }
            }
          ]
        },
        { "kind": "SCALAR", "name": "ContainerID" },
        { "kind": "SCALAR", "name": "Platform" },
        { "kind": "SCALAR", "name": "String" },
        {
          "kind": "ENUM",
          "name": "CacheSharingMode",
          "enumValues": [
            { "name": "SHARED", "isDeprecated": false },
            { "name": "LOCKED", "isDeprecated": true, "deprecationReason": "Use PRIVATE." }
          ]
        },
        {
          "kind": "INPUT_OBJECT",
          "name": "BuildArg",
          "inputFields": [
            { "name": "name", "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "String" } } },
            { "name": "value", "type": { "kind": "NON_NULL", "ofType": { "kind": "SCALAR", "name": "String" } } }
          ]
        },
        { "kind": "ENUM", "name": "__TypeKind", "enumValues": [] },
        { "kind": "SOMETHING_NEW", "name": "Mystery" }
      ]
    }
  }
}"#;

#[test]
fn loads_types_in_document_order() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;

    let names: Vec<&str> = schema.types().map(|type_| type_.name()).collect();
    assert_eq!(names, vec![
        "Query",
        "Container",
        "ContainerID",
        "Platform",
        "String",
        "CacheSharingMode",
        "BuildArg",
        "__TypeKind",
        "Mystery",
    ]);

    Ok(())
}

#[test]
fn null_child_lists_load_as_empty() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;

    let query = schema.query_type().expect("Query type should be present");
    assert!(query.input_fields().is_empty());
    assert!(query.enum_values().is_empty());

    let id_field = schema
        .get_type("Container")
        .and_then(|container| container.get_field("id"))
        .expect("Container.id should be present");
    assert!(id_field.args().is_empty());

    // Neither `fields` nor `enumValues` were present at all here.
    let scalar = schema.get_type("ContainerID").expect("scalar should be present");
    assert!(scalar.fields().is_empty());

    Ok(())
}

#[test]
fn empty_descriptions_are_treated_as_absent() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;

    let query = schema.query_type().expect("Query type should be present");
    assert_eq!(query.description(), Some("The root of all queries."));

    let container_field = query.get_field("container").expect("field should be present");
    assert_eq!(container_field.description(), None);
    assert_eq!(container_field.args()[0].description(), None);

    Ok(())
}

#[test]
fn required_and_optional_args_follow_nullability_not_position() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;
    let with_exec = schema
        .get_type("Container")
        .and_then(|container| container.get_field("withExec"))
        .expect("Container.withExec should be present");

    let required: Vec<&str> = with_exec.required_args().map(|arg| arg.name()).collect();
    let optional: Vec<&str> = with_exec.optional_args().map(|arg| arg.name()).collect();

    // `stdin` is declared after the optional `expand` but is still required.
    assert_eq!(required, vec!["args", "stdin"]);
    assert_eq!(optional, vec!["expand"]);
    assert_eq!(with_exec.args()[1].default_value(), Some("false"));

    Ok(())
}

#[test]
fn kind_filters_and_identifiers() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;

    let objects: Vec<&str> = schema.objects().map(|type_| type_.name()).collect();
    assert_eq!(objects, vec!["Query", "Container"]);

    let enums: Vec<&str> = schema.enums().map(|type_| type_.name()).collect();
    assert_eq!(enums, vec!["CacheSharingMode", "__TypeKind"]);

    let inputs: Vec<&str> = schema.inputs().map(|type_| type_.name()).collect();
    assert_eq!(inputs, vec!["BuildArg"]);

    let ids: Vec<&str> = schema
        .scalars()
        .filter(|type_| type_.is_id())
        .map(|type_| type_.name())
        .collect();
    assert_eq!(ids, vec!["ContainerID"]);

    assert!(schema.get_type("String").is_some_and(|type_| type_.is_builtin_scalar()));
    assert!(schema.get_type("__TypeKind").is_some_and(|type_| type_.is_introspection_type()));

    Ok(())
}

#[test]
fn enum_value_deprecation_is_loaded() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;
    let values = schema
        .get_type("CacheSharingMode")
        .expect("enum should be present")
        .enum_values();

    assert!(!values[0].is_deprecated());
    assert!(values[1].is_deprecated());
    assert_eq!(values[1].deprecation_reason(), Some("Use PRIVATE."));

    Ok(())
}

#[test]
fn unknown_kinds_are_preserved() -> Result<()> {
    let schema = Schema::from_json_str(MINIMAL_DOCUMENT)?;

    let mystery = schema.get_type("Mystery").expect("type should be present");
    assert_eq!(
        mystery.kind(),
        &TypeKind::Unrecognized("SOMETHING_NEW".to_string()),
    );
    assert_eq!(mystery.kind().to_string(), "SOMETHING_NEW");

    Ok(())
}

#[test]
fn missing_schema_key_is_reported_with_its_path() {
    let result = Schema::from_json_str(r#"{"data": {"types": []}}"#);

    match result {
        Err(SchemaParseError::MissingKey { path }) => {
            assert_eq!(path, "data.__schema");
        },
        other => panic!("Expected a MissingKey error, got {other:?}"),
    }
}

#[test]
fn null_types_list_is_a_missing_key() {
    let result = Schema::from_json_str(r#"{"data": {"__schema": {"types": null}}}"#);

    match result {
        Err(SchemaParseError::MissingKey { path }) => {
            assert_eq!(path, "data.__schema.types");
        },
        other => panic!("Expected a MissingKey error, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_reported() {
    let result = Schema::from_json_str("{\"data\": ");
    assert!(matches!(result, Err(SchemaParseError::Json(_))));
}

#[test]
fn malformed_type_entries_are_reported() {
    let result = Schema::from_json_str(
        r#"{"data": {"__schema": {"types": [{"kind": "OBJECT"}]}}}"#,
    );
    assert!(matches!(result, Err(SchemaParseError::InvalidTypes(_))));
}

#[test]
fn unreadable_file_is_reported() {
    let result = Schema::from_file("/this/path/does/not/exist/introspection.json");
    assert!(matches!(result, Err(SchemaParseError::FileRead { .. })));
}
