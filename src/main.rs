use clap::Parser;

mod cli;
mod commands;
mod domain;
mod lines;
mod services;

use crate::cli::Cli;
use crate::lines::LineError;
use crate::services::config::ConfigError;
use crate::services::logging::init_tracing;
use crate::services::output::print_error;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = commands::handle_commands(&cli) {
        let code = error_code(&err);
        tracing::debug!(code, error = ?err, "command failed");
        print_error(cli.json, code, &format!("{:#}", err));
        std::process::exit(1);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<LineError>() {
        return e.code();
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return "CONFIG";
    }
    "INTERNAL"
}
