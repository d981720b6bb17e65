use crate::bindings::connect_with;
use crate::bindings::BuildArg;
use crate::bindings::CacheSharingMode;
use crate::bindings::CacheVolumeId;
use crate::bindings::DirectoryId;
use crate::bindings::Platform;
use daggerql::engine::DynClient;
use daggerql::engine::Object;
use daggerql::value::InputObject;
use daggerql::value::Value;
use daggerql_core::engine::MockClient;
use std::sync::Arc;

fn client() -> DynClient {
    Arc::new(MockClient::with_data(serde_json::Value::Null))
}

#[test]
fn optional_arguments_are_sent_only_when_given() {
    let root = connect_with(client());

    assert_eq!(root.container(None).query().render(), "container");
    assert_eq!(
        root.container(Some(Platform::from("linux/arm64"))).query().render(),
        "container(platform:\"linux/arm64\")",
    );
}

#[test]
fn booleans_and_lists_are_literals() {
    let container = connect_with(client())
        .container(None)
        .with_exec(&["echo", "a \"quoted\" word"], Some(true));

    assert_eq!(
        container.query().render(),
        "container{withExec(args:[\"echo\",\"a \\\"quoted\\\" word\"],insecureRootCapabilities:true)}",
    );
}

#[test]
fn ids_and_enums_are_quoted_strings() {
    let container = connect_with(client()).container(None).with_mounted_cache(
        "/cache",
        CacheVolumeId::from("volume-1"),
        Some(CacheSharingMode::Locked),
    );

    assert_eq!(
        container.query().render(),
        "container{withMountedCache(path:\"/cache\",cache:\"volume-1\",sharing:\"LOCKED\")}",
    );
}

#[test]
fn input_objects_are_object_literals() {
    let container = connect_with(client()).container(None).build(
        DirectoryId::from("dir-1"),
        Some("Dockerfile.dev"),
        Some(&[
            BuildArg::new("VERSION".to_string(), "1.2".to_string()),
            BuildArg::new("DEBUG".to_string(), "".to_string()),
        ]),
    );

    assert_eq!(
        container.query().render(),
        concat!(
            "container{build(context:\"dir-1\",dockerfile:\"Dockerfile.dev\",",
            "buildArgs:[{name:\"VERSION\",value:\"1.2\"},{name:\"DEBUG\",value:\"\"}])}",
        ),
    );
}

#[test]
fn input_object_pairs_follow_declared_order() {
    let build_arg = BuildArg::new("NAME".to_string(), "VALUE".to_string());

    assert_eq!(build_arg.to_wire_pairs(), vec![
        ("name".to_string(), Value::String("NAME".to_string())),
        ("value".to_string(), Value::String("VALUE".to_string())),
    ]);
}
