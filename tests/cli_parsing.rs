use clap::Parser;
use std::path::PathBuf;
use vcap_env::cli::{Cli, Commands};

#[test]
fn test_parse_plan() {
    let cli = Cli::try_parse_from(["vcap-env", "plan"]).unwrap();

    assert!(!cli.json);
    match cli.command {
        Commands::Plan(args) => assert!(!args.reveal),
        Commands::Exec(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_plan_with_global_flags() {
    let cli = Cli::try_parse_from([
        "vcap-env",
        "plan",
        "--reveal",
        "--json",
        "--config",
        "vcap-env.yaml",
    ])
    .unwrap();

    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("vcap-env.yaml")));
    match cli.command {
        Commands::Plan(args) => assert!(args.reveal),
        Commands::Exec(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_exec_passes_through_program_flags() {
    let cli = Cli::try_parse_from(["vcap-env", "exec", "--", "server", "--port", "8080", "-v"])
        .unwrap();

    match cli.command {
        Commands::Exec(args) => {
            assert_eq!(args.command, vec!["server", "--port", "8080", "-v"]);
        }
        Commands::Plan(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_exec_without_separator() {
    let cli = Cli::try_parse_from(["vcap-env", "exec", "env"]).unwrap();

    match cli.command {
        Commands::Exec(args) => assert_eq!(args.command, vec!["env"]),
        Commands::Plan(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_exec_requires_a_program() {
    assert!(Cli::try_parse_from(["vcap-env", "exec"]).is_err());
}

#[test]
fn test_unknown_command() {
    assert!(Cli::try_parse_from(["vcap-env", "serve"]).is_err());
}
