//! The `arbor` binary.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use arbor_cli::{Args, CliError, error_adapter::to_reportables};

/// Falls back to `warn` when the requested level is not recognised.
fn init_logger(level: &str) -> LevelFilter {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Unknown log level '{level}', logging warnings and errors only");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
    filter
}

fn report(err: &CliError) {
    let handler = miette::GraphicalReportHandler::new();
    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        match handler.render_report(&mut rendered, &reportable) {
            Ok(()) => error!("{rendered}"),
            Err(_) => error!("{reportable}"),
        }
    }
}

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    let log_level = init_logger(&args.log_level);
    info!(log_level:?; "arbor starting");
    debug!(args:?; "Command line");

    if let Err(err) = arbor_cli::run(&args) {
        report(&err);
        process::exit(1);
    }

    info!(output = args.output; "Tree drawn");
}
