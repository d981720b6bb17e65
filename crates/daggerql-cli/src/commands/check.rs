use crate::commands::DEFAULT_FILE_NAME;
use crate::input_paths::find_introspection_files;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use daggerql::introspection::Schema;
use daggerql_codegen::BindingGenerator;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_value=DEFAULT_FILE_NAME,
        help="Name of the introspection files to look for when searching \
             within a directory.",
        long,
    )]
    file_name: String,

    #[arg(
        help="Paths to one or more introspection documents or directories \
             containing them.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[derive(Debug, Default)]
struct Counts {
    enums: usize,
    input_objects: usize,
    objects: usize,
    scalars: usize,
}
impl Counts {
    fn add(&mut self, schema: &Schema) {
        self.enums += schema.enums().count();
        self.input_objects += schema.inputs().count();
        self.objects += schema.objects().count();
        self.scalars += schema.scalars().count();
    }
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_paths = match find_introspection_files(
            self.file_or_dir_paths.as_slice(),
            self.file_name.as_str(),
        ) {
            Ok(file_paths) => file_paths,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        };

        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No `{}` files found.",
                output_utils::RED_X,
                self.file_name,
            ));
        }

        let generator = BindingGenerator::new();
        let mut counts = Counts::default();
        let mut errors: Vec<(PathBuf, Box<dyn Error>)> = vec![];
        for file_path in file_paths.iter() {
            let schema = match Schema::from_file(file_path) {
                Ok(schema) => schema,
                Err(err) => {
                    errors.push((file_path.clone(), Box::new(err)));
                    continue;
                },
            };
            match generator.generate(&schema) {
                Ok(_) => counts.add(&schema),
                Err(err) => errors.push((file_path.clone(), Box::new(err))),
            }
        }

        if !errors.is_empty() {
            let details = errors
                .iter()
                .map(|(path, err)| format!("  * {path:#?}: {err}"))
                .collect::<Vec<_>>()
                .join("\n");
            return CommandResult::stderr(format_args!(
                "{} {} of {} introspection documents failed:\n{details}",
                output_utils::RED_X,
                errors.len(),
                file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} Bindings can be generated for every document:\n",
                "  * Checked {} files.\n",
                "  * Found {} scalars.\n",
                "  * Found {} enums.\n",
                "  * Found {} input objects.\n",
                "  * Found {} objects.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            counts.scalars,
            counts.enums,
            counts.input_objects,
            counts.objects,
        ))
    }
}
