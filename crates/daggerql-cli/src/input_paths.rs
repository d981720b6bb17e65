use anyhow::Context;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Finds every file named `file_name` at or under each of `paths`.
///
/// A path naming a file is always accepted, whatever its name.
pub(crate) fn find_introspection_files(
    paths: &[PathBuf],
    file_name: &str,
) -> anyhow::Result<Vec<PathBuf>> {
    log::debug!("Scanning {} input paths...", paths.len());

    let mut file_paths = vec![];
    for path in paths {
        if path.is_file() {
            file_paths.push(canonicalize(path)?);
            continue;
        }

        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to scan the filesystem at/under {path:#?}")
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if entry.file_name().to_string_lossy() == file_name {
                log::trace!("Found introspection document at {entry_path:#?}.");
                file_paths.push(canonicalize(entry_path)?);
            }
        }
    }

    log::debug!("Found {} introspection documents.", file_paths.len());
    Ok(file_paths)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!("Failed to resolve {path:#?}"))
}
