use anyhow::Result;
use std::path::Path;

use super::graph::GraphBuilder;
use super::{DependencyExtractor, DependencyGraph, ManifestScanner};

/// Ties the pipeline together: scan for manifests, extract each one's
/// dependencies, and build the graph.
pub struct WorkspaceAnalyzer {
    scanner: ManifestScanner,
    extractor: DependencyExtractor,
}

impl WorkspaceAnalyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            scanner: ManifestScanner::new(),
            extractor: DependencyExtractor::new()?,
        })
    }

    pub fn analyze(&self, root: &Path) -> DependencyGraph {
        println!("Scanning for Package.swift manifests...");
        let manifests = self.scanner.scan_directory(root);
        println!("Found {} manifests to analyze", manifests.len());

        let mut graph_builder = GraphBuilder::new();

        for manifest in &manifests {
            // The project is named after the manifest's enclosing directory.
            // Same-named directories at different depths collide on one key;
            // the record scanned last wins.
            let project = match project_name(manifest) {
                Some(name) => name,
                None => {
                    eprintln!(
                        "Warning: Cannot derive a project name for {}",
                        manifest.display()
                    );
                    continue;
                }
            };

            let dependencies = self.extractor.extract_file(manifest);
            graph_builder.add_project(project, dependencies);
        }

        graph_builder.build()
    }
}

fn project_name(manifest: &Path) -> Option<String> {
    manifest
        .parent()?
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
}
