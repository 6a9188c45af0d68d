//! Markdown documentation generator - command-line tool.
//!
//! This binary generates structured Markdown documentation from the doc comments
//! in a Rust project. It statically analyzes the source code, reformats recognized
//! docstring conventions into uniform Markdown and writes one document per module
//! plus an index (or a single unified document).
//!
//! # Usage
//!
//! ```bash
//! markdown-from-source [OPTIONS] <SOURCE_DIR>
//! ```
//!
//! # Examples
//!
//! Generate one document per module plus an index:
//! ```bash
//! markdown-from-source ./my-project -t "My Project" -d "What it does" -o docs/
//! ```
//!
//! Generate a single unified document with embedded source code:
//! ```bash
//! markdown-from-source ./my-project -t "My Project" -d "What it does" -s -c
//! ```
//!
//! Enable verbose logging:
//! ```bash
//! markdown-from-source ./my-project -t T -d D -v
//! ```

mod assembler;
mod cli;
mod config;
mod crosscheck;
mod docstring;
mod error;
mod parser;
mod renderer;
mod scanner;
mod symbols;
mod writer;

use anyhow::Result;
use clap::Parser;
use log::info;

fn main() -> Result<()> {
    // We need to parse args twice: once to get verbose flag, then again after logger init
    // First, do a quick parse just to check for verbose flag
    let args_for_verbose = cli::CliArgs::parse();

    // Initialize logger based on verbose flag
    let log_level = if args_for_verbose.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    info!("Markdown documentation generator starting...");

    // Now do the full parse with validation
    let args = cli::parse_args_from_parsed(args_for_verbose)?;

    // Run the main workflow
    cli::run(args)?;

    info!("Markdown document generation completed successfully");

    Ok(())
}
