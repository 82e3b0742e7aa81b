use spmgraph::core::WorkspaceAnalyzer;
use spmgraph::formatters::DotFormatter;
use std::fs;

fn write_manifest(dir: &std::path::Path, body: &str) {
    fs::create_dir_all(dir).unwrap();
    let content = format!(
        "// swift-tools-version: 5.10\n\
         import PackageDescription\n\n\
         let package = Package(\n    dependencies: [\n        {}\n    ]\n)\n",
        body
    );
    fs::write(dir.join("Package.swift"), content).unwrap();
}

#[test]
fn analyzer_end_to_end_on_two_package_tree() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path();
    write_manifest(
        &root.join("A"),
        r#".package(url: "https://example.com/X.git", from: "1.0.0"),"#,
    );
    write_manifest(&root.join("B"), r#".package(name: "Y", path: "../Y"),"#);

    let analyzer = WorkspaceAnalyzer::new().unwrap();
    let graph = analyzer.analyze(root);

    assert_eq!(graph.project_count(), 2);
    assert_eq!(graph.get("A").unwrap().remote, vec!["X"]);
    assert!(graph.get("A").unwrap().local.is_empty());
    assert_eq!(graph.get("B").unwrap().local[0].name, "Y");
    assert_eq!(graph.get("B").unwrap().local[0].path, "../Y");

    let out = root.join("deps.dot");
    DotFormatter::new(
        "lightcoral".to_string(),
        "lightblue".to_string(),
        "lightgreen".to_string(),
    )
    .format_to_file(&graph, &out)
    .unwrap();
    let dot = fs::read_to_string(&out).unwrap();

    assert!(dot.contains("\"A\" [color=\"lightcoral\"];"));
    assert!(dot.contains("\"X\" [color=\"lightgreen\"];"));
    assert!(dot.contains("\"A\" -> \"X\";"));
    assert!(dot.contains("\"B\" [color=\"lightcoral\"];"));
    assert!(dot.contains("\"Y\" [color=\"lightblue\"];"));
    assert!(dot.contains("\"B\" -> \"Y\";"));
    assert_eq!(dot.matches("->").count(), 2);
}

#[test]
fn analyzer_names_projects_after_parent_directory() {
    let dir = tempfile::TempDir::new().unwrap();
    write_manifest(
        &dir.path().join("Modules/FeatureKit"),
        r#".package(url: "https://github.com/apple/swift-collections.git", from: "1.0.0"),"#,
    );

    let graph = WorkspaceAnalyzer::new().unwrap().analyze(dir.path());
    assert_eq!(graph.project_count(), 1);
    assert!(graph.get("FeatureKit").is_some());
    assert!(graph.get("Modules").is_none());
}

#[test]
fn analyzer_keeps_project_with_empty_deps_for_undecodable_manifest() {
    let dir = tempfile::TempDir::new().unwrap();
    let pkg = dir.path().join("Broken");
    fs::create_dir_all(&pkg).unwrap();
    fs::write(pkg.join("Package.swift"), [0xff, 0xfe, 0xfd]).unwrap();

    let graph = WorkspaceAnalyzer::new().unwrap().analyze(dir.path());
    assert_eq!(graph.project_count(), 1);

    let deps = graph.get("Broken").unwrap();
    assert!(deps.remote.is_empty());
    assert!(deps.local.is_empty());
}

#[test]
fn analyzer_yields_empty_graph_for_missing_root() {
    let graph = WorkspaceAnalyzer::new()
        .unwrap()
        .analyze(std::path::Path::new("/definitely/not/a/real/root"));
    assert!(graph.is_empty());
}
