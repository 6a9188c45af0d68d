//! Writer module for persisting assembled documents.
//!
//! The core pipeline never touches the filesystem; finished [`OutputDocument`]s
//! are handed here for writing.

use crate::assembler::OutputDocument;
use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

/// Writes one finished document into the destination directory.
///
/// The destination directory is created if it doesn't exist. An existing
/// document with the same name is overwritten.
///
/// # Arguments
///
/// * `document` - The assembled document to persist
/// * `destination` - Directory the document is written into
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot be
/// written.
pub fn write_document(document: &OutputDocument, destination: &Path) -> Result<()> {
    let path = destination.join(&document.file_name);
    debug!("Writing document to: {}", path.display());

    // Documents may carry path components in their names (nested modules)
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    fs::write(&path, &document.content)
        .with_context(|| format!("Failed to write to file: {}", path.display()))?;

    debug!(
        "Successfully wrote {} bytes to {}",
        document.content.len(),
        path.display()
    );
    Ok(())
}
