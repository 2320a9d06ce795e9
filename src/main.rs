// logtool - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Running the read -> filter -> print pipeline
// 4. Exiting with the status `app::run::report` decides

use clap::{CommandFactory, Parser};
use logtool::app::run;
use logtool::cli::Cli;
use logtool::util;
use std::io;

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    let command_name = cli.command.name();
    tracing::debug!(
        version = util::constants::APP_VERSION,
        command = command_name,
        "logtool starting"
    );

    let config = match cli.command.into_run_config() {
        Ok(config) => config,
        Err(e) => Cli::command()
            .error(clap::error::ErrorKind::ValueValidation, e)
            .exit(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = run::execute(&config, &mut out);
    let status = run::report(&config, result, &mut out);
    drop(out);

    tracing::debug!(command = command_name, status, "logtool finished");
    std::process::exit(status);
}
