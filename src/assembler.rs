//! Output assembler: wraps rendered blocks into finished documents.
//!
//! In multi-file mode every source file becomes its own document plus one index
//! document with a bullet line per file. In single-doc mode everything lands in
//! one document with a single title and a single footer. Assembly is a plain
//! sequential pass over the rendered blocks; given the same input it produces
//! byte-identical documents.

use crate::config::Config;
use crate::docstring::{self, MISSING_DOCSTRING_SENTINEL};
use crate::error::Result;
use log::debug;

/// Name of the tool, used in the footer attribution
pub const GENERATOR_NAME: &str = "markdown-from-source";
/// Repository link used in the footer attribution
pub const GENERATOR_URL: &str = "https://github.com/markdown-from-source/markdown-from-source";
/// Document name used in single-doc mode
pub const SINGLE_DOC_NAME: &str = "API.md";
/// Document name of the generated index in multi-file mode
pub const INDEX_DOC_NAME: &str = "index.md";

/// One rendered source file, ready for assembly.
#[derive(Debug)]
pub struct RenderedFile {
    /// Dotted module name derived from the relative file path
    pub module_name: String,
    /// Relative path of the source file, used for the `FILE:` link
    pub rel_path: String,
    /// The file's top-level doc comment, if any
    pub module_doc: Option<String>,
    /// Ordered Markdown blocks produced by the renderer
    pub blocks: Vec<String>,
}

/// One assembled Markdown document, ready for writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputDocument {
    /// File name of the document, relative to the destination directory
    pub file_name: String,
    /// Complete document content: title, body and footer
    pub content: String,
}

/// Assembles rendered blocks into [`OutputDocument`]s.
pub struct Assembler {
    title: String,
    description: String,
    single_doc_mode: bool,
    timestamp: String,
}

impl Assembler {
    /// Creates an assembler from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::ConfigurationInvalid`] when the
    /// configuration is missing its title or description. This is the fatal,
    /// fail-fast check: no document is produced from an invalid configuration.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            // validate() guarantees both are present
            title: config.title.clone().unwrap_or_default(),
            description: config.description.clone().unwrap_or_default(),
            single_doc_mode: config.single_doc_mode,
            timestamp: chrono::Local::now().format("%d %B %Y").to_string(),
        })
    }

    /// Overrides the footer timestamp. Repeated runs with the same timestamp
    /// produce byte-identical documents.
    pub fn with_timestamp(mut self, timestamp: String) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Assembles all rendered files into finished documents, in input order.
    pub fn assemble(&self, files: &[RenderedFile]) -> Vec<OutputDocument> {
        if self.single_doc_mode {
            self.assemble_single(files)
        } else {
            self.assemble_multi(files)
        }
    }

    fn assemble_multi(&self, files: &[RenderedFile]) -> Vec<OutputDocument> {
        let mut documents = Vec::new();
        let mut index_lines = Vec::new();

        for file in files {
            debug!("Assembling document for module: {}", file.module_name);

            let mut content = self.format_title();
            content.push_str(&self.format_body(file));
            content.push_str(&self.format_footer());

            documents.push(OutputDocument {
                file_name: format!("{}.md", file.module_name),
                content,
            });

            index_lines.push(format!(
                "- [{name}.md]({name}.md): {summary}\n",
                name = file.module_name,
                summary = module_summary(file),
            ));
        }

        let mut index = self.format_title();
        for line in &index_lines {
            index.push_str(line);
        }
        index.push_str(&self.format_footer());

        documents.push(OutputDocument {
            file_name: INDEX_DOC_NAME.to_string(),
            content: index,
        });

        documents
    }

    fn assemble_single(&self, files: &[RenderedFile]) -> Vec<OutputDocument> {
        debug!("Assembling single document for {} files", files.len());

        let mut content = self.format_title();
        let bodies: Vec<String> = files.iter().map(|file| self.format_body(file)).collect();
        content.push_str(&bodies.join("\n"));
        content.push_str(&self.format_footer());

        vec![OutputDocument {
            file_name: SINGLE_DOC_NAME.to_string(),
            content,
        }]
    }

    /// The body of one file: its module header followed by its rendered blocks.
    fn format_body(&self, file: &RenderedFile) -> String {
        let mut pieces = vec![self.format_file_header(file)];
        pieces.extend(file.blocks.iter().cloned());
        pieces.join("\n")
    }

    fn format_title(&self) -> String {
        format!("# {}\n\n{}\n\n", self.title, self.description)
    }

    fn format_file_header(&self, file: &RenderedFile) -> String {
        let doc = match &file.module_doc {
            Some(doc) if !doc.is_empty() => docstring::reformat(doc).markdown,
            _ => MISSING_DOCSTRING_SENTINEL.to_string(),
        };
        format!(
            "## FILE: [{}]({})\n\n{}\n",
            file.module_name, file.rel_path, doc
        )
    }

    fn format_footer(&self) -> String {
        format!(
            "\n\n*Automatically generated by [{}]({}) {}*\n",
            GENERATOR_NAME, GENERATOR_URL, self.timestamp
        )
    }
}

/// First non-empty docstring line, for index bullets.
fn module_summary(file: &RenderedFile) -> String {
    file.module_doc
        .as_deref()
        .and_then(|doc| doc.lines().map(str::trim).find(|line| !line.is_empty()))
        .unwrap_or(MISSING_DOCSTRING_SENTINEL)
        .to_string()
}
