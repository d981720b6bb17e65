use clap::CommandFactory;
use crate::commands;

/// Generates, checks and fetches the GraphQL schemas `daggerql` bindings
/// are compiled from.
#[derive(clap::Parser, Debug)]
#[command(name = "daggerql", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output. Overrides the `LOG_LEVEL` environment \
             variable.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Without a subcommand there is nothing to run, so print usage.
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        println!();
        Ok(())
    }
}
