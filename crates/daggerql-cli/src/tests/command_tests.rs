use crate::commands::CommandEnum;
use crate::tests::test_utils::scratch_dir;
use crate::tests::test_utils::SMALL_DOCUMENT;
use crate::Cli;
use clap::Parser;
use daggerql_core::engine::DynClient;
use daggerql_core::engine::MockClient;
use std::process::ExitCode;
use std::sync::Arc;

fn parse(args: &[&str]) -> (Cli, CommandEnum) {
    let mut cli = Cli::try_parse_from(args).unwrap();
    let cmd = cli.cmd.take().unwrap();
    (cli, cmd)
}

#[test]
fn verbose_flag_is_parsed() {
    let cli = Cli::try_parse_from(["daggerql", "-v"]).unwrap();
    assert!(cli.verbose);
    assert!(cli.cmd.is_none());
}

#[tokio::test]
async fn generate_writes_bindings_to_the_output_file() {
    let dir = scratch_dir("generate");
    std::fs::write(dir.join("introspection.json"), SMALL_DOCUMENT).unwrap();
    let output = dir.join("bindings.rs");

    let (cli, cmd) = parse(&[
        "daggerql",
        "generate",
        dir.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    let result = cmd.run(cli).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS, "{:?}", result.stderr);
    let source = std::fs::read_to_string(output).unwrap();
    assert!(source.contains("pub struct Container"));
    assert!(source.contains("pub fn connect_with"));
}

#[tokio::test]
async fn generate_rejects_more_than_one_document() {
    let dir = scratch_dir("generate-many");
    std::fs::create_dir_all(dir.join("a")).unwrap();
    std::fs::create_dir_all(dir.join("b")).unwrap();
    std::fs::write(dir.join("a/introspection.json"), SMALL_DOCUMENT).unwrap();
    std::fs::write(dir.join("b/introspection.json"), SMALL_DOCUMENT).unwrap();

    let (cli, cmd) = parse(&["daggerql", "generate", dir.to_str().unwrap()]);
    let result = cmd.run(cli).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.unwrap().contains("exactly one"));
}

#[tokio::test]
async fn generate_rejects_invalid_runtime_paths() {
    let dir = scratch_dir("generate-runtime-path");
    std::fs::write(dir.join("introspection.json"), SMALL_DOCUMENT).unwrap();

    let (cli, cmd) = parse(&[
        "daggerql",
        "generate",
        dir.to_str().unwrap(),
        "--runtime-path",
        "not a path",
    ]);
    let result = cmd.run(cli).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
}

#[tokio::test]
async fn check_reports_counts() {
    let dir = scratch_dir("check");
    std::fs::write(dir.join("introspection.json"), SMALL_DOCUMENT).unwrap();

    let (cli, cmd) = parse(&["daggerql", "check", dir.to_str().unwrap()]);
    let result = cmd.run(cli).await;

    assert_eq!(result.exit_code, ExitCode::SUCCESS, "{:?}", result.stderr);
    let stdout = result.stdout.unwrap();
    assert!(stdout.contains("Checked 1 files."));
    assert!(stdout.contains("Found 2 scalars."));
    assert!(stdout.contains("Found 2 objects."));
}

#[tokio::test]
async fn check_reports_unloadable_documents() {
    let dir = scratch_dir("check-broken");
    std::fs::write(dir.join("introspection.json"), "{\"data\": {}}").unwrap();

    let (cli, cmd) = parse(&["daggerql", "check", dir.to_str().unwrap()]);
    let result = cmd.run(cli).await;

    assert_eq!(result.exit_code, ExitCode::FAILURE);
    assert!(result.stderr.unwrap().contains("1 of 1"));
}

#[tokio::test]
async fn introspect_writes_the_session_document() {
    let dir = scratch_dir("introspect");
    let output = dir.join("introspection.json");
    let document: serde_json::Value = serde_json::from_str(SMALL_DOCUMENT).unwrap();
    let mock = Arc::new(MockClient::new(move |_| document.clone()));
    let client: DynClient = mock.clone();

    let (_cli, cmd) = parse(&[
        "daggerql",
        "introspect",
        "--output",
        output.to_str().unwrap(),
    ]);
    let CommandEnum::Introspect(cmd) = cmd else {
        panic!("Expected the introspect command");
    };
    let result = cmd.introspect(client).await.unwrap();

    assert_eq!(result.exit_code, ExitCode::SUCCESS);
    assert_eq!(mock.requests().len(), 1);
    assert!(mock.requests()[0].contains("__schema"));
    let written: serde_json::Value =
        serde_json::from_str(std::fs::read_to_string(output).unwrap().as_str()).unwrap();
    assert_eq!(written["data"]["__schema"]["types"][2]["name"], "Query");
}

#[tokio::test]
async fn introspect_reports_query_errors() {
    let client: DynClient = Arc::new(MockClient::new(|_| serde_json::json!({
        "data": null,
        "errors": [{ "message": "no session" }],
    })));

    let (_cli, cmd) = parse(&["daggerql", "introspect"]);
    let CommandEnum::Introspect(cmd) = cmd else {
        panic!("Expected the introspect command");
    };
    let result = cmd.introspect(client).await;

    assert!(result.is_err());
}
