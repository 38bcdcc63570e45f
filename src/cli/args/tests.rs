use super::Cli;
use crate::project_identity;
use clap::{CommandFactory, Parser};

#[test]
fn parser_accepts_action_and_packages() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "install", "vim", "git"])
        .expect("install with packages should parse");
    assert_eq!(parsed.action, "install");
    assert_eq!(parsed.args, vec!["vim", "git"]);
}

#[test]
fn parser_accepts_bare_list() {
    let parsed = Cli::try_parse_from([project_identity::BINARY_NAME, "list"]).unwrap();
    assert_eq!(parsed.action, "list");
    assert!(parsed.args.is_empty());
}

#[test]
fn parser_requires_action() {
    assert!(Cli::try_parse_from([project_identity::BINARY_NAME]).is_err());
}

#[test]
fn parser_counts_debug_and_verbose() {
    let parsed = Cli::try_parse_from([
        project_identity::BINARY_NAME,
        "-vv",
        "--debug",
        "find",
        "nginx",
        "--refresh",
        "--names-only",
    ])
    .unwrap();
    assert_eq!(parsed.global.verbose, 2);
    assert_eq!(parsed.global.debug, 1);
    assert!(parsed.global.refresh);
    assert!(parsed.global.names_only);
    assert_eq!(parsed.args, vec!["nginx"]);
}

#[test]
fn parser_takes_output_and_backend() {
    let parsed = Cli::try_parse_from([
        project_identity::BINARY_NAME,
        "-q",
        "-o",
        "/tmp/out.txt",
        "--backend",
        "dnf",
        "list",
    ])
    .unwrap();
    assert!(parsed.global.quiet);
    assert_eq!(
        parsed.global.output.as_deref(),
        Some(std::path::Path::new("/tmp/out.txt"))
    );
    assert_eq!(parsed.global.backend.as_deref(), Some("dnf"));
}

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}
