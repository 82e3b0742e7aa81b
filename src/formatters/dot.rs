//! Graphviz DOT output formatter.
//!
//! Serializes a [`DependencyGraph`] into the textual digraph syntax consumed
//! by the Graphviz `dot` binary. Projects, remote dependencies, and local
//! dependencies each get their own fill color; everything else about the
//! layout is fixed in the preamble.

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::core::DependencyGraph;

pub struct DotFormatter {
    project_color: String,
    local_color: String,
    remote_color: String,
}

impl DotFormatter {
    pub fn new(project_color: String, local_color: String, remote_color: String) -> Self {
        Self {
            project_color,
            local_color,
            remote_color,
        }
    }

    pub fn format_to_file(&self, graph: &DependencyGraph, output_path: &Path) -> Result<()> {
        fs::write(output_path, self.format_graph(graph))?;
        Ok(())
    }

    /// Renders the graph as DOT text, projects in ascending name order.
    ///
    /// Node declarations are emitted once per reference, not deduplicated:
    /// a dependency shared by several projects is declared several times and
    /// Graphviz keeps the last declaration it parses. Names are embedded in
    /// double quotes verbatim, with no escaping.
    pub fn format_graph(&self, graph: &DependencyGraph) -> String {
        let mut dot = String::from("digraph dependencies {\n");
        dot.push_str("    graph [rankdir=LR, splines=polyline, nodesep=1.0, ranksep=1.0];\n");
        dot.push_str(
            "    node [shape=box, style=filled, fontsize=12, fontcolor=black, width=2.0, height=1.0];\n",
        );
        dot.push_str("    edge [color=gray, fontsize=10, fontcolor=black];\n");

        for (project, dependencies) in graph.projects() {
            dot.push_str(&format!(
                "    \"{}\" [color=\"{}\"];\n",
                project, self.project_color
            ));
            for dep in &dependencies.remote {
                dot.push_str(&format!(
                    "    \"{}\" [color=\"{}\"];\n",
                    dep, self.remote_color
                ));
                dot.push_str(&format!("    \"{}\" -> \"{}\";\n", project, dep));
            }
            for dep in &dependencies.local {
                dot.push_str(&format!(
                    "    \"{}\" [color=\"{}\"];\n",
                    dep.name, self.local_color
                ));
                dot.push_str(&format!("    \"{}\" -> \"{}\";\n", project, dep.name));
            }
        }

        dot.push_str("}\n");
        dot
    }
}
