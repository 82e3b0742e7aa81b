use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Manifest file name every Swift package carries at its root.
pub const MANIFEST_FILE_NAME: &str = "Package.swift";

pub struct ManifestScanner;

impl ManifestScanner {
    pub fn new() -> Self {
        Self
    }

    /// Recursively collects every `Package.swift` reachable from `root`.
    ///
    /// A nonexistent or unreadable root yields an empty list; unreadable
    /// subtrees are skipped rather than failing the scan. Traversal order is
    /// whatever the filesystem enumeration yields.
    pub fn scan_directory(&self, root: &Path) -> Vec<PathBuf> {
        let root = absolute_root(root);

        WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.file_name() == OsStr::new(MANIFEST_FILE_NAME))
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl Default for ManifestScanner {
    fn default() -> Self {
        Self::new()
    }
}

// Scan roots are anchored to the working directory before walking; the path
// itself need not exist.
fn absolute_root(path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}
