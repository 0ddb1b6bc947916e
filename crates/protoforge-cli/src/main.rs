//! `protoforge` command line tool
//!
//! Generates starter prototypes from sprite bundle folders and appends them
//! to YAML prototype documents.

mod cli;
mod commands;
mod config;
mod logging;

use anyhow::Context;
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let matches = cli::command().get_matches();
    let Some((name, args)) = matches.subcommand() else {
        return ExitCode::FAILURE;
    };

    logging::init_tracing(args.get_flag("verbose"));

    let result = config::load_config(args.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("loading configuration")
        .and_then(|config| commands::run(name, args, &config, &mut std::io::stdout().lock()));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
