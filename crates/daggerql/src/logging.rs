const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

/// Installs a `tracing` subscriber for the process.
///
/// `verbose` forces `DEBUG`; otherwise the level comes from the `LOG_LEVEL`
/// environment variable, defaulting to `INFO`. Calling this when a
/// subscriber is already installed leaves that subscriber in place.
pub fn setup_logger(verbose: bool) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if verbose {
            tracing::Level::DEBUG
        } else {
            let env_val =
                std::env::var("LOG_LEVEL")
                    .map(|s| s.trim().to_string());

            match env_val.as_deref() {
                Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
                Ok("ERROR" | "error") => tracing::Level::ERROR,
                Ok("INFO" | "info") => tracing::Level::INFO,
                Ok("TRACE" | "trace") => tracing::Level::TRACE,
                Ok("VERBOSE" | "verbose") => tracing::Level::DEBUG,
                Ok("WARN" | "warn") => tracing::Level::WARN,
                Ok(other) => {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{other}`"
                    ));
                    DEFAULT_LOG_LEVEL
                },
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    // Module functions report their results over stdout, so logs go to
    // stderr.
    let installed = tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        log::debug!("A logger is already installed; keeping it.");
        return;
    }
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}
