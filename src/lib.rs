//! # SPMGRAPH
//!
//! Dependency graph generation for Swift Package Manager workspaces.
//!
//! spmgraph scans a directory tree for `Package.swift` manifests, extracts each
//! package's remote (URL) and local (path) dependency declarations, and renders
//! the collected graph as Graphviz DOT text plus a PNG image.
//!
//! ## Pipeline
//!
//! - **Scanner**: recursive `Package.swift` discovery
//! - **Extractor**: pattern-based dependency extraction
//! - **Graph**: per-project dependency records keyed by directory name
//! - **DOT formatter**: deterministic Graphviz serialization

pub mod core;
pub mod formatters;
pub mod render;
