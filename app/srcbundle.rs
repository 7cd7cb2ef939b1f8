//! Command-line entry point for srcbundle.
//!
//! Bundles the current working directory into `./現在の開発状況.txt` using
//! the filters compiled into the library defaults. There are no options
//! besides `--help` and `--version`.

use clap::Parser;
use srcbundle::{BundleBuilder, BundleError, bundle, output};
use std::env;
use std::process::exit;

/// srcbundle — collect a project's sources and tree into one text file
#[derive(Parser)]
#[command(name = "srcbundle", version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        exit(1);
    }
}

fn run() -> Result<(), BundleError> {
    let root = env::current_dir().map_err(|e| BundleError::Io {
        path: ".".into(),
        source: e,
    })?;
    let options = BundleBuilder::new(root).build();

    println!("{}", output::startup_message(&options)?);
    let report = bundle(&options)?;
    println!(
        "{}",
        output::completion_message(report.file_count(), &report.output)
    );
    Ok(())
}
