pub mod analyzer;
pub mod extractor;
pub mod graph;
pub mod scanner;

pub use analyzer::WorkspaceAnalyzer;
pub use extractor::DependencyExtractor;
pub use graph::{DependencyGraph, DependencySet, GraphBuilder, LocalDependency};
pub use scanner::{ManifestScanner, MANIFEST_FILE_NAME};
