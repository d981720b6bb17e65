mod check;
mod generate;
mod introspect;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use generate::GenerateCmd;
use introspect::IntrospectCmd;

pub(crate) const DEFAULT_FILE_NAME: &str = "introspection.json";

#[derive(Debug, clap::Parser)]
#[command(name = "daggerql")]
pub(crate) enum CommandEnum {
    /// Loads introspection documents and checks that bindings can be
    /// generated for them.
    Check(Box<CheckCmd>),

    /// Generates Rust bindings for an introspection document.
    Generate(Box<GenerateCmd>),

    /// Fetches the introspection document of the current engine session.
    Introspect(Box<IntrospectCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Introspect(cmd) => cmd.run(cli).await,
        }
    }
}
