use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Renders a DOT file to PNG through the Graphviz `dot` binary on PATH.
pub fn render_png(dot_file: &Path, output: &Path) -> Result<()> {
    let result = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_file)
        .arg("-o")
        .arg(output)
        .output()
        .with_context(|| format!("failed launching dot for {}", dot_file.display()))?;

    if !result.status.success() {
        anyhow::bail!(
            "dot -Tpng {} failed: {}",
            dot_file.display(),
            String::from_utf8_lossy(&result.stderr).trim()
        );
    }

    Ok(())
}
