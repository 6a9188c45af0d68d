use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for traversing project directories.
///
/// The `FileScanner` recursively walks through a project directory to find all Rust source files.
/// It skips entries whose name starts with one of the configured excluded prefixes (by default
/// `.`, `__` and `test_`, which also covers hidden directories) as well as the `target` directory.
///
/// # Example
///
/// ```no_run
/// use markdown_from_source::scanner::FileScanner;
/// use std::path::PathBuf;
///
/// let scanner = FileScanner::new(PathBuf::from("./my-project"), FileScanner::default_excluded());
/// let result = scanner.scan().unwrap();
/// println!("Found {} Rust files", result.rust_files.len());
/// ```
pub struct FileScanner {
    root_path: PathBuf,
    excluded_prefixes: Vec<String>,
}

/// Result of directory scanning operation.
///
/// Contains the list of discovered Rust files and any warnings encountered during scanning.
pub struct ScanResult {
    /// List of paths to all discovered `.rs` files, in a stable traversal order
    pub rust_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl FileScanner {
    /// Creates a new `FileScanner` for the specified root directory.
    ///
    /// # Arguments
    ///
    /// * `root_path` - The root directory to scan for Rust files
    /// * `excluded_prefixes` - File/directory name prefixes to skip
    pub fn new(root_path: PathBuf, excluded_prefixes: Vec<String>) -> Self {
        Self {
            root_path,
            excluded_prefixes,
        }
    }

    /// The default excluded-prefix list: hidden entries, dunder-style names and test files.
    pub fn default_excluded() -> Vec<String> {
        vec![".".to_string(), "__".to_string(), "test_".to_string()]
    }

    /// Scans the directory tree and collects all `.rs` files.
    ///
    /// This method recursively traverses the directory tree starting from the root path,
    /// collecting all files with the `.rs` extension. Entries are visited in file-name
    /// order so that repeated runs discover files in the same order. It automatically skips:
    /// - The `target` directory (build artifacts)
    /// - Any entry whose name starts with an excluded prefix
    ///
    /// If any directories or files cannot be accessed, warnings are logged and added to
    /// the result, but scanning continues.
    ///
    /// # Returns
    ///
    /// Returns a `ScanResult` containing the list of discovered files and any warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be accessed.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut rust_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| {
                // Don't filter the root directory itself
                if e.path() == self.root_path {
                    return true;
                }

                let file_name = e.file_name().to_string_lossy();
                if file_name == "target" {
                    return false;
                }

                !self
                    .excluded_prefixes
                    .iter()
                    .any(|prefix| file_name.starts_with(prefix.as_str()))
            })
        {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("rs") {
                        rust_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    // Record warning for inaccessible directories/files
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult {
            rust_files,
            warnings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn scan_all(root: &std::path::Path) -> ScanResult {
        FileScanner::new(root.to_path_buf(), FileScanner::default_excluded())
            .scan()
            .unwrap()
    }

    #[test]
    fn test_scan_normal_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("lib.rs"), "pub fn helper() {}").unwrap();
        fs::write(root.join("readme.md"), "# README").unwrap();

        let result = scan_all(root);

        assert_eq!(result.rust_files.len(), 2);
        assert!(result.warnings.is_empty());

        let file_names: Vec<String> = result
            .rust_files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert!(file_names.contains(&"main.rs".to_string()));
        assert!(file_names.contains(&"lib.rs".to_string()));
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = scan_all(temp_dir.path());

        assert_eq!(result.rust_files.len(), 0);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("src")).unwrap();
        fs::create_dir(root.join("src/models")).unwrap();

        fs::write(root.join("main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("src/lib.rs"), "pub fn helper() {}").unwrap();
        fs::write(root.join("src/models/user.rs"), "struct User {}").unwrap();

        let result = scan_all(root);

        assert_eq!(result.rust_files.len(), 3);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_order_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("zebra.rs"), "").unwrap();
        fs::write(root.join("alpha.rs"), "").unwrap();
        fs::write(root.join("mid.rs"), "").unwrap();

        let first = scan_all(root).rust_files;
        let second = scan_all(root).rust_files;

        assert_eq!(first, second);
        let names: Vec<_> = first
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["alpha.rs", "mid.rs", "zebra.rs"]);
    }

    #[test]
    fn test_scan_skips_target_directory() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("target")).unwrap();
        fs::write(root.join("target/build.rs"), "fn main() {}").unwrap();
        fs::write(root.join("main.rs"), "fn main() {}").unwrap();

        let result = scan_all(root);

        assert_eq!(result.rust_files.len(), 1);
        assert_eq!(
            result.rust_files[0].file_name().unwrap().to_string_lossy(),
            "main.rs"
        );
    }

    #[test]
    fn test_scan_skips_excluded_prefixes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join(".git")).unwrap();
        fs::write(root.join(".git/config.rs"), "// config").unwrap();
        fs::write(root.join("__generated.rs"), "// generated").unwrap();
        fs::write(root.join("test_helpers.rs"), "// tests").unwrap();
        fs::write(root.join("main.rs"), "fn main() {}").unwrap();

        let result = scan_all(root);

        assert_eq!(result.rust_files.len(), 1);
        assert_eq!(
            result.rust_files[0].file_name().unwrap().to_string_lossy(),
            "main.rs"
        );
    }

    #[test]
    fn test_scan_custom_excluded_prefixes() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("vendored_dep.rs"), "").unwrap();
        fs::write(root.join("main.rs"), "fn main() {}").unwrap();

        let scanner = FileScanner::new(root.to_path_buf(), vec!["vendored_".to_string()]);
        let result = scanner.scan().unwrap();

        assert_eq!(result.rust_files.len(), 1);
        assert_eq!(
            result.rust_files[0].file_name().unwrap().to_string_lossy(),
            "main.rs"
        );
    }

    #[test]
    fn test_scan_filters_non_rust_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::write(root.join("main.rs"), "fn main() {}").unwrap();
        fs::write(root.join("readme.md"), "# README").unwrap();
        fs::write(root.join("config.toml"), "[package]").unwrap();

        let result = scan_all(root);

        assert_eq!(result.rust_files.len(), 1);
        assert_eq!(
            result.rust_files[0].file_name().unwrap().to_string_lossy(),
            "main.rs"
        );
    }
}
