use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::path::{Path, PathBuf};

use crate::assembler::{Assembler, RenderedFile};
use crate::config::{Config, CONFIG_FILE_NAME};
use crate::parser::{AstParser, ParsedFile};
use crate::renderer::Renderer;
use crate::scanner::FileScanner;
use crate::symbols::SymbolTreeBuilder;
use crate::writer::write_document;

/// Markdown documentation generator - turns doc comments in Rust source into Markdown documents
#[derive(Parser, Debug)]
#[command(name = "markdown-from-source")]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the directory containing the source files to document
    #[arg(value_name = "SOURCE_DIR")]
    pub directory: PathBuf,

    /// Title of the documentation, usually the project name
    #[arg(short = 't', long = "title")]
    pub title: Option<String>,

    /// Description shown under the title
    #[arg(short = 'd', long = "description")]
    pub description: Option<String>,

    /// Directory to write the documents to (created if it doesn't exist)
    #[arg(short = 'o', long = "destination", value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Write the entire documentation into a single file instead of one per module
    #[arg(short = 's', long = "single-doc")]
    pub single_doc: bool,

    /// Include function source code in the documents as code blocks
    #[arg(short = 'c', long = "show-source")]
    pub show_source: bool,

    /// Path to the JSON settings file
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write the effective settings back to the settings file
    #[arg(long = "save-config")]
    pub save_config: bool,

    /// Enable verbose output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Result<CliArgs> {
    let args = CliArgs::parse();
    parse_args_from_parsed(args)
}

/// Validate and log already-parsed arguments
pub fn parse_args_from_parsed(args: CliArgs) -> Result<CliArgs> {
    debug!("Parsed arguments: {:?}", args);

    // Validate source path exists
    if !args.directory.exists() {
        anyhow::bail!("Source path does not exist: {}", args.directory.display());
    }

    // Validate source path is a directory
    if !args.directory.is_dir() {
        anyhow::bail!(
            "Source path is not a directory: {}",
            args.directory.display()
        );
    }

    info!("Source path: {}", args.directory.display());
    if let Some(ref destination) = args.destination {
        info!("Destination: {}", destination.display());
    }
    info!(
        "Mode: {}",
        if args.single_doc {
            "single document"
        } else {
            "one document per module"
        }
    );

    Ok(args)
}

/// Layers command-line flags over the loaded configuration.
fn effective_config(args: &CliArgs, mut config: Config) -> Config {
    config.directory = args.directory.clone();
    if args.title.is_some() {
        config.title = args.title.clone();
    }
    if args.description.is_some() {
        config.description = args.description.clone();
    }
    if let Some(destination) = &args.destination {
        config.destination = destination.clone();
    }
    if args.single_doc {
        config.single_doc_mode = true;
    }
    if args.show_source {
        config.show_source = true;
    }
    config
}

/// Dotted module name for a source file, derived from its relative path.
fn module_name_for(rel_path: &Path) -> String {
    rel_path
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(".")
}

/// Display form of a relative path, used for the `FILE:` links.
fn link_path_for(rel_path: &Path) -> String {
    rel_path
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Run the main workflow
pub fn run(args: CliArgs) -> Result<()> {
    info!("Starting Markdown document generation...");

    // Step 1: Resolve configuration: settings file, then CLI flags on top
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
    let loaded = Config::load(&config_path)?.unwrap_or_default();
    let config = effective_config(&args, loaded);

    if args.save_config {
        config.save(&config_path)?;
    }

    // Step 2: Validate configuration before any rendering work (fail fast)
    let assembler = Assembler::new(&config)?;

    // Step 3: Scan directory for Rust files
    info!("Scanning source directory...");
    let scanner = FileScanner::new(config.directory.clone(), config.excluded_prefixes.clone());
    let scan_result = scanner.scan()?;

    info!("Found {} Rust files", scan_result.rust_files.len());
    for warning in &scan_result.warnings {
        log::warn!("{}", warning);
    }

    if scan_result.rust_files.is_empty() {
        anyhow::bail!("No Rust files found in the source directory");
    }

    // Step 4: Parse files into ASTs, skipping files with syntax errors
    info!("Parsing Rust files...");
    let parse_results = AstParser::parse_files(&scan_result.rust_files);

    let parsed_files: Vec<ParsedFile> = parse_results
        .into_iter()
        .filter_map(|r| match r {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                debug!("Skipping file due to parse error: {}", e);
                None
            }
        })
        .collect();

    info!("Successfully parsed {} files", parsed_files.len());

    if parsed_files.is_empty() {
        anyhow::bail!("No files could be parsed successfully");
    }

    // Step 5: Build symbol trees and render each file
    info!("Rendering documentation...");
    let renderer = Renderer::new(config.show_source);
    let mut rendered_files = Vec::new();
    let mut diagnostic_count = 0;

    for parsed in &parsed_files {
        let rel_path = parsed
            .path
            .strip_prefix(&config.directory)
            .unwrap_or(&parsed.path)
            .to_path_buf();
        let module_name = module_name_for(&rel_path);

        let module = SymbolTreeBuilder::build_module(&module_name, parsed);
        let output = renderer.render_module(&module);
        diagnostic_count += output.diagnostics.len();

        rendered_files.push(RenderedFile {
            module_name,
            rel_path: link_path_for(&rel_path),
            module_doc: module.doc_text.clone(),
            blocks: output.blocks,
        });
    }

    // Step 6: Assemble documents
    info!("Assembling documents...");
    let documents = assembler.assemble(&rendered_files);

    // Step 7: Write documents to the destination directory
    info!("Writing {} documents to {}", documents.len(), config.destination.display());
    for document in &documents {
        write_document(document, &config.destination)?;
    }

    // Step 8: Display summary
    info!("Generation complete!");
    info!("Summary:");
    info!("  - Files scanned: {}", scan_result.rust_files.len());
    info!("  - Files rendered: {}", rendered_files.len());
    info!("  - Documents written: {}", documents.len());
    info!("  - Diagnostics: {}", diagnostic_count);

    Ok(())
}
