use crate::bindings::CacheSharingMode;
use crate::bindings::ContainerId;
use crate::bindings::Id;
use crate::bindings::ImageLayerCompression;
use crate::bindings::Platform;
use daggerql::value::ToValue;
use daggerql::value::Value;
use serde_json::json;

#[test]
fn id_scalars_are_transparent_strings() -> serde_json::Result<()> {
    let id: ContainerId = serde_json::from_value(json!("ctr-1"))?;

    assert_eq!(id.as_str(), "ctr-1");
    assert_eq!(id.to_string(), "ctr-1");
    assert_eq!(serde_json::to_value(&id)?, json!("ctr-1"));
    assert_eq!(id.to_value(), Value::String("ctr-1".to_string()));
    Ok(())
}

#[test]
fn builtin_id_becomes_a_newtype() {
    assert_eq!(Id::from("node-1".to_string()).0, "node-1");
}

#[test]
fn custom_scalars_are_newtypes() {
    assert_eq!(Platform::from("linux/amd64").as_str(), "linux/amd64");
}

#[test]
fn enum_variants_keep_their_schema_names() -> serde_json::Result<()> {
    assert_eq!(CacheSharingMode::Private.as_str(), "PRIVATE");
    assert_eq!(CacheSharingMode::Shared.to_value(), Value::String("SHARED".to_string()));
    assert_eq!(serde_json::to_value(CacheSharingMode::Locked)?, json!("LOCKED"));

    let mode: CacheSharingMode = serde_json::from_value(json!("SHARED"))?;
    assert_eq!(mode, CacheSharingMode::Shared);
    Ok(())
}

#[test]
fn enum_values_differing_only_in_case_stay_distinct() -> serde_json::Result<()> {
    assert_eq!(ImageLayerCompression::Gzip.as_str(), "Gzip");
    assert_eq!(ImageLayerCompression::Gzip2.as_str(), "GZIP");
    assert_eq!(ImageLayerCompression::Estargz.as_str(), "ESTARGZ");

    let mode: ImageLayerCompression = serde_json::from_value(json!("ZSTD"))?;
    assert_eq!(mode, ImageLayerCompression::Zstd2);
    assert_eq!(serde_json::to_value(ImageLayerCompression::Uncompressed2)?, json!("UNCOMPRESSED"));
    Ok(())
}
