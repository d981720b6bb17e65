use crate::commands::DEFAULT_FILE_NAME;
use crate::input_paths::find_introspection_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use daggerql::introspection::Schema;
use daggerql_codegen::BindingGenerator;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value=DEFAULT_FILE_NAME,
        help="Name of the introspection files to look for when searching \
             within a directory.",
        long,
    )]
    file_name: String,

    #[arg(
        help="File to write the generated bindings to. Defaults to stdout.",
        long,
        short='o',
    )]
    output: Option<PathBuf>,

    #[arg(
        default_value="daggerql",
        help="Path generated code uses to reach the `daggerql` runtime crate.",
        long,
    )]
    runtime_path: String,

    #[arg(
        help="Path to an introspection document, or a directory containing \
             exactly one.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl GenerateCmd {
    fn generate(self) -> anyhow::Result<CommandResult> {
        let file_paths = find_introspection_files(
            self.file_or_dir_paths.as_slice(),
            self.file_name.as_str(),
        )?;
        let file_path = match file_paths.as_slice() {
            [file_path] => file_path,
            [] => anyhow::bail!("No `{}` file found.", self.file_name),
            _ => anyhow::bail!(
                "Expected exactly one introspection document, found {}: {file_paths:#?}",
                file_paths.len(),
            ),
        };

        let schema = Schema::from_file(file_path)?;
        log::debug!("Loaded {} types from {file_path:#?}.", schema.types().count());

        let source = BindingGenerator::new()
            .with_runtime_path(self.runtime_path.as_str())?
            .generate(&schema)
            .with_context(|| format!("Failed to generate bindings for {file_path:#?}"))?;
        output_utils::write_output(self.output.as_deref(), source.as_str())?;

        Ok(match &self.output {
            Some(output) => CommandResult::stdout(format_args!(
                "{} Wrote bindings to {output:#?}.",
                output_utils::GREEN_CHECK,
            )),
            None => CommandResult::silent(),
        })
    }
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        CommandResult::from_anyhow(self.generate())
    }
}
