//! Lexis CLI binary.

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use lexis::cli::args::*;
use lexis::cli::commands::*;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments using clap
    let args = LexisArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace, // Per n-gram match weights
    };

    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let command = args.command.name();
    execute_command(args).with_context(|| format!("lexis {command} failed"))?;

    Ok(())
}
