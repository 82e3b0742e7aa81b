use anyhow::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

use super::graph::{DependencySet, LocalDependency};

// `.package(url: "https://host/path/Name.git", ...)`; the repository name is
// the final URL segment before the `.git` suffix. Trailing arguments before
// the closing parenthesis are ignored. The dot does not cross newlines, so a
// declaration only matches on a single line.
const REMOTE_DEPENDENCY_PATTERN: &str =
    r#"\.package\(.*?url: "https?://(?:[^/]+/)+([^/]+)\.git".*?\)"#;

// `.package(name: "Name", path: "...")`; name and path are captured verbatim.
const LOCAL_DEPENDENCY_PATTERN: &str = r#"\.package\(name: "(.*?)", path: "(.*?)"\)"#;

/// Extracts dependency declarations from `Package.swift` contents.
///
/// Both patterns are compiled once here and reused for every manifest.
pub struct DependencyExtractor {
    remote: Regex,
    local: Regex,
}

impl DependencyExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            remote: Regex::new(REMOTE_DEPENDENCY_PATTERN)?,
            local: Regex::new(LOCAL_DEPENDENCY_PATTERN)?,
        })
    }

    /// Returns all remote and local declarations found in `content`, each
    /// sequence in order of appearance. Duplicates are kept.
    pub fn extract(&self, content: &str) -> DependencySet {
        let remote = self
            .remote
            .captures_iter(content)
            .map(|captures| captures[1].to_string())
            .collect();

        let local = self
            .local
            .captures_iter(content)
            .map(|captures| {
                LocalDependency::new(captures[1].to_string(), captures[2].to_string())
            })
            .collect();

        DependencySet { remote, local }
    }

    /// Reads a manifest and extracts its dependencies. Read and decode
    /// failures degrade to an empty set so one bad manifest never aborts the
    /// scan.
    pub fn extract_file(&self, manifest: &Path) -> DependencySet {
        match fs::read_to_string(manifest) {
            Ok(content) => self.extract(&content),
            Err(err) => {
                eprintln!("Warning: Failed to read {}: {}", manifest.display(), err);
                DependencySet::default()
            }
        }
    }
}
