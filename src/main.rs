use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod formatters;
mod render;

use crate::core::WorkspaceAnalyzer;
use crate::formatters::DotFormatter;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "spmgraph",
    version = "0.1.0",
    author = "spmgraph developers",
    about = "Dependency graph generator for Swift Package Manager workspaces"
)]
struct Cli {
    /// Output file name for the generated graph (without extension)
    #[arg(short, long, value_name = "NAME", default_value = "dependencies_graph")]
    output: String,

    /// Fill color for project nodes
    #[arg(short, long, value_name = "COLOR", default_value = "lightcoral")]
    project_color: String,

    /// Fill color for local dependency nodes
    #[arg(short, long, value_name = "COLOR", default_value = "lightblue")]
    local_color: String,

    /// Fill color for remote dependency nodes
    #[arg(short, long, value_name = "COLOR", default_value = "lightgreen")]
    remote_color: String,

    /// Path to the directory to scan for Package.swift files
    #[arg(long, value_name = "PATH", default_value = ".")]
    path: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        output,
        project_color,
        local_color,
        remote_color,
        path,
    } = cli;

    let start_time = Instant::now();

    println!("SPMGRAPH - Swift package dependency graphs");
    println!("Scan root: {}", path.display());
    println!("Output base name: {}", output);

    let analyzer = WorkspaceAnalyzer::new()?;
    let graph = analyzer.analyze(&path);
    println!("Collected {} project(s)", graph.project_count());

    let formatter = DotFormatter::new(project_color, local_color, remote_color);
    let dot_path = PathBuf::from(format!("{}.dot", output));
    formatter.format_to_file(&graph, &dot_path)?;
    println!("DOT file created: {}", dot_path.display());

    // Rendering failure is reported but does not fail the run.
    let png_path = PathBuf::from(format!("{}.png", output));
    match render::render_png(&dot_path, &png_path) {
        Ok(()) => println!("Dependency graph created: {}", png_path.display()),
        Err(err) => eprintln!(
            "Warning: Failed to render {}: {}",
            png_path.display(),
            err
        ),
    }

    println!(
        "Total execution time: {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
