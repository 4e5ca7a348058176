//! vcap-env CLI entry point.

use anyhow::Result;
use clap::Parser;

use vcap_env::cli::{commands, handle_error, Cli, Commands};
use vcap_env::infrastructure::logging::LoggerImpl;
use vcap_env::ConfigLoader;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            handle_error(&err, json);
            1
        }
    };

    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = ConfigLoader::load(cli.config.as_deref())?;
    let _logger = LoggerImpl::init(&config.logging)?;

    match cli.command {
        Commands::Plan(args) => commands::plan::execute(&args, &config, cli.json).map(|()| 0),
        Commands::Exec(args) => commands::exec::execute(&args, &config),
    }
}
