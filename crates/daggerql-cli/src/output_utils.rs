pub(crate) const GREEN_CHECK: &str = "\u{2705}";
pub(crate) const RED_X: &str = "\u{274C}";

/// Writes `contents` to `path`, or to stdout when no path is given.
pub(crate) fn write_output(
    path: Option<&std::path::Path>,
    contents: &str,
) -> anyhow::Result<()> {
    use anyhow::Context;
    use std::io::Write;

    match path {
        Some(path) => std::fs::write(path, contents)
            .with_context(|| format!("Failed to write {path:#?}")),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.write_all(b"\n")?;
            Ok(())
        },
    }
}
