//! Markdown documentation generator - structured Markdown from Rust doc comments.
//!
//! This library turns a tree of documented source symbols (modules, types, functions,
//! their doc comments and declared parameters) into structured Markdown documentation.
//! It uses static code analysis: source files are parsed with `syn`, never loaded or
//! executed.
//!
//! # Recognized docstring conventions
//!
//! - **Plain prose**: passed through with leading indentation stripped
//! - **Google-style**: indented `Args:` / `Returns:` section headers with indented entries
//! - **Sphinx-style**: `:param name:` / `:return:` field markers
//!
//! Recognized constructs are rewritten into uniform Markdown, and the documented
//! parameter names are cross-checked against the declared signature.
//!
//! # Architecture
//!
//! The library is organized into several modules that work together:
//!
//! 1. [`scanner`] - Recursively scans project directories for Rust files
//! 2. [`parser`] - Parses Rust source files into Abstract Syntax Trees (AST)
//! 3. [`symbols`] - Builds the symbol tree of modules, types and functions
//! 4. [`docstring`] - Reformats docstring conventions into Markdown
//! 5. [`crosscheck`] - Reconciles declared and documented parameters
//! 6. [`renderer`] - Walks the symbol tree into ordered Markdown blocks
//! 7. [`assembler`] - Wraps blocks into finished documents with title, index and footer
//! 8. [`writer`] - Persists the finished documents
//!
//! # Example Usage
//!
//! ```no_run
//! use markdown_from_source::{
//!     assembler::{Assembler, RenderedFile},
//!     config::Config,
//!     parser::AstParser,
//!     renderer::Renderer,
//!     scanner::FileScanner,
//!     symbols::SymbolTreeBuilder,
//! };
//! use std::path::PathBuf;
//!
//! // Scan the project directory
//! let scanner = FileScanner::new(PathBuf::from("./my-project"), FileScanner::default_excluded());
//! let scan_result = scanner.scan().unwrap();
//!
//! // Parse files
//! let parse_results = AstParser::parse_files(&scan_result.rust_files);
//! let parsed_files: Vec<_> = parse_results.into_iter().filter_map(Result::ok).collect();
//!
//! // Build symbol trees and render
//! let renderer = Renderer::new(false);
//! let mut rendered = Vec::new();
//! for parsed in &parsed_files {
//!     let module = SymbolTreeBuilder::build_module("my_module", parsed);
//!     let output = renderer.render_module(&module);
//!     rendered.push(RenderedFile {
//!         module_name: module.name.clone(),
//!         rel_path: "my_module.rs".to_string(),
//!         module_doc: module.doc_text.clone(),
//!         blocks: output.blocks,
//!     });
//! }
//!
//! // Assemble the final documents
//! let config = Config {
//!     title: Some("My Project".to_string()),
//!     description: Some("What it does".to_string()),
//!     ..Config::default()
//! };
//! let assembler = Assembler::new(&config).unwrap();
//! let documents = assembler.assemble(&rendered);
//! for document in &documents {
//!     println!("{}: {} bytes", document.file_name, document.content.len());
//! }
//! ```
//!
//! # Command-Line Interface
//!
//! For command-line usage, see the [`cli`] module which provides a complete CLI application.

pub mod assembler;
pub mod cli;
pub mod config;
pub mod crosscheck;
pub mod docstring;
pub mod error;
pub mod parser;
pub mod renderer;
pub mod scanner;
pub mod symbols;
pub mod writer;
