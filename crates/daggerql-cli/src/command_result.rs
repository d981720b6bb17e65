use std::process::ExitCode;

#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    /// A failure, reported on stderr.
    pub fn stderr(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{fmt_args}")),
            stdout: None,
        }
    }

    /// A success, reported on stdout.
    pub fn stdout(fmt_args: std::fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{fmt_args}")),
        }
    }

    /// A success with nothing left to print.
    pub fn silent() -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: None,
        }
    }

    pub fn from_anyhow(result: anyhow::Result<Self>) -> Self {
        result.unwrap_or_else(|err| Self::stderr(format_args!(
            "{} {err:#}",
            crate::output_utils::RED_X,
        )))
    }
}
