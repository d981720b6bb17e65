use crate::input_paths::find_introspection_files;
use crate::tests::test_utils::scratch_dir;
use crate::tests::test_utils::SMALL_DOCUMENT;

#[test]
fn directories_are_searched_recursively() -> anyhow::Result<()> {
    let dir = scratch_dir("recursive");
    std::fs::create_dir_all(dir.join("a/b"))?;
    std::fs::write(dir.join("a/b/introspection.json"), SMALL_DOCUMENT)?;
    std::fs::write(dir.join("a/other.json"), SMALL_DOCUMENT)?;

    let found = find_introspection_files(&[dir.clone()], "introspection.json")?;
    assert_eq!(found, vec![std::fs::canonicalize(dir.join("a/b/introspection.json"))?]);
    Ok(())
}

#[test]
fn explicit_files_are_accepted_with_any_name() -> anyhow::Result<()> {
    let dir = scratch_dir("explicit");
    let path = dir.join("schema.json");
    std::fs::write(&path, SMALL_DOCUMENT)?;

    let found = find_introspection_files(&[path.clone()], "introspection.json")?;
    assert_eq!(found, vec![std::fs::canonicalize(path)?]);
    Ok(())
}

#[test]
fn missing_paths_are_errors() {
    let dir = scratch_dir("missing");
    let result = find_introspection_files(&[dir.join("nope")], "introspection.json");
    assert!(result.is_err());
}
