use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use daggerql::engine::DynClient;
use daggerql::engine::shared_client;
use daggerql::introspection::INTROSPECTION_QUERY;
use daggerql::introspection::Schema;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct IntrospectCmd {
    #[arg(
        help="File to write the introspection document to. Defaults to stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,
}
impl IntrospectCmd {
    pub(crate) async fn introspect(
        &self,
        client: DynClient,
    ) -> anyhow::Result<CommandResult> {
        log::debug!("Requesting the session's introspection document.");
        let document = client.request(INTROSPECTION_QUERY).await?;
        if let Some(errors) = document.get("errors").filter(|errors| !errors.is_null()) {
            anyhow::bail!("Introspection failed: {errors}");
        }

        // Only documents the generator can load are written.
        let schema = Schema::from_json_value(document.clone())?;
        log::debug!("Introspected {} types.", schema.types().count());

        let json = serde_json::to_string_pretty(&document)?;
        output_utils::write_output(self.output.as_deref(), json.as_str())?;

        Ok(match &self.output {
            Some(output) => CommandResult::stdout(format_args!(
                "{} Wrote the introspection document to {output:#?}.",
                output_utils::GREEN_CHECK,
            )),
            None => CommandResult::silent(),
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for IntrospectCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let result = match shared_client() {
            Ok(client) => self.introspect(client).await,
            Err(err) => Err(err.into()),
        };
        CommandResult::from_anyhow(result)
    }
}
