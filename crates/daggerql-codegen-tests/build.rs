use daggerql_codegen::BindingGenerator;
use daggerql_core::introspection::Schema;
use std::path::PathBuf;

const FIXTURE: &str = "fixtures/introspection.json";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo::rerun-if-changed={FIXTURE}");

    let schema = Schema::from_file(FIXTURE)?;
    let source = BindingGenerator::new().generate(&schema)?;

    let out_dir = PathBuf::from(std::env::var("OUT_DIR")?);
    std::fs::write(out_dir.join("bindings.rs"), source)?;
    Ok(())
}
