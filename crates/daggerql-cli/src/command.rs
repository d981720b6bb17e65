use crate::Cli;
use crate::CommandResult;

/// A subcommand. Failures are reported through the returned
/// [`CommandResult`] rather than by panicking, so `main` can print them and
/// pick the exit code.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
