//! Pinker CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use pinker::PinkerError;
use pinker_cli::{Args, error_adapter::to_reportables, exit_code};

fn main() {
    // Panics get the same graphical report as diagnostics
    miette::set_panic_hook();

    let args = Args::parse();

    // Fall back to warn when the requested level is unknown
    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Pinker");
    debug!(args:?; "Parsed arguments");

    let Err(err) = pinker_cli::run(&args) else {
        info!("Completed successfully");
        return;
    };

    let reporter = miette::GraphicalReportHandler::new();
    for reportable in to_reportables(&err) {
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &reportable)
            .expect("Writing to String buffer is infallible");

        error!("{writer}");
    }

    if let PinkerError::Diagnostics { .. } = err {
        error!(output_file = args.output; "Strict mode: no output written");
    }
    process::exit(exit_code(&err));
}
