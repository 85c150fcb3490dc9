//! The Stylekit Command-Line Interface.
//!
//! Entry points for both binaries: parse arguments, set up logging, run the
//! library operation and turn any error into a diagnostic plus exit status 1.

use std::process;

use clap::Parser;
use log::LevelFilter;

use crate::bundle::collect_bundle;
use crate::config::PublishTarget;
use crate::errors::{print_error, StyleKitResult};
use crate::publish::publisher_for;
use crate::stylesheet::normalize_file;

pub mod args;
pub mod output;

use args::{CollectArgs, CssArgs};
use output::{StatusPrinter, StatusStream};

/// Entry point for `css-single-line`.
pub fn run_css_single_line() {
    let args = CssArgs::parse();
    init_logging(args.verbose);
    exit_on_error(css_single_line(&args));
}

/// Entry point for `collect-sources`.
pub fn run_collect_sources() {
    let args = CollectArgs::parse();
    init_logging(args.verbose);
    exit_on_error(collect_sources(&args));
}

fn css_single_line(args: &CssArgs) -> StyleKitResult<()> {
    let report = normalize_file(&args.to_config())?;
    StatusPrinter::new(StatusStream::Stdout).success(&format!(
        "Single-line CSS written to {}",
        report.output_path.display()
    ));
    Ok(())
}

fn collect_sources(args: &CollectArgs) -> StyleKitResult<()> {
    let config = args.to_config();
    let mut publisher = publisher_for(config.publish);
    let bundle = collect_bundle(&config, publisher.as_mut())?;

    let stream = match config.publish {
        PublishTarget::Stdout => StatusStream::Stderr,
        _ => StatusStream::Stdout,
    };
    let mut status = StatusPrinter::new(stream);
    status.success(&format!(
        "Copied {} JSX/CSS files into {}",
        bundle.len(),
        config.output_path.display()
    ));
    if config.publish == PublishTarget::Clipboard {
        status.note("Contents also copied to clipboard");
    }
    Ok(())
}

fn exit_on_error(result: StyleKitResult<()>) {
    if let Err(e) = result {
        print_error(e);
        process::exit(1);
    }
}

/// Logs go to stderr. `RUST_LOG` wins over the `-v` count.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
