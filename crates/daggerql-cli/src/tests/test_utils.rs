use std::path::PathBuf;

pub(super) const SMALL_DOCUMENT: &str = r#"{
  "data": {
    "__schema": {
      "types": [
        {
          "kind": "SCALAR",
          "name": "String",
          "fields": null,
          "inputFields": null,
          "enumValues": null
        },
        {
          "kind": "SCALAR",
          "name": "ContainerID",
          "fields": null,
          "inputFields": null,
          "enumValues": null
        },
        {
          "kind": "OBJECT",
          "name": "Query",
          "fields": [
            {
              "name": "container",
              "args": [],
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
          "enumValues": null
        },
        {
          "kind": "OBJECT",
          "name": "Container",
          "fields": [
            {
              "name": "id",
              "args": [],
              "type": {
                "kind": "NON_NULL",
                "name": null,
                "ofType": { "kind": "SCALAR", "name": "ContainerID", "ofType": null }
              },
              "isDeprecated": false,
              "deprecationReason": null
            }
          ],
          "inputFields": null,
          "enumValues": null
        }
      ]
    }
  }
}"#;

/// A fresh, empty directory under the system temp dir.
pub(super) fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "daggerql-cli-{name}-{}",
        std::process::id(),
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
