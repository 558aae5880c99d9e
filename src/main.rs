//! `lighty-domains` binary.
use std::process::ExitCode;

use clap::Parser;

use lighty_domains::cli::{Action, Cli};
use lighty_domains::{commands, logging};

fn main() -> ExitCode {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = Cli::parse();
    let action = args.action().unwrap_or_else(|e| e.exit());
    logging::init_subscriber(args.verbosity());
    let log = logging::Logger::new();

    let config = match args.config() {
        Ok(config) => config,
        Err(e) if e.is_usage() => Cli::usage_error(&e).exit(),
        Err(e) => {
            log.error(&e.to_string());
            return ExitCode::FAILURE;
        }
    };

    let result = match action {
        Action::Init => commands::init::run(&config, &log),
        Action::Update(mode) => commands::update::run(&config, &args.domains, mode, &log),
    };
    if let Err(e) = result {
        log.error(&format!("{e:#}"));
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
