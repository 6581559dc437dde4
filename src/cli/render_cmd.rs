//! The `render` and `check` commands
//!
//! Reading the description file, loading the optional `mikado.toml` next to
//! it, running the parser, and writing the Graphviz artifacts.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{parse_description, MikadoGraph, ParseConfig, CONFIG_FILE};
use crate::render::render_dot;

/// Loads the parse configuration for a description file.
///
/// Looks for `mikado.toml` in the description's directory; absent that,
/// defaults apply.
fn load_config(description: &Path) -> Result<ParseConfig> {
    let dir = match description.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(ParseConfig::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;

    ParseConfig::from_toml(&content)
        .with_context(|| format!("Invalid config: {}", path.display()))
}

/// Reads and parses a description file into a graph
pub fn load_graph(output: &Output, file: &Path) -> Result<MikadoGraph> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read description: {}", file.display()))?;

    let config = load_config(file)?;
    output.verbose_ctx(
        "parse",
        &format!(
            "Parsing {} ({} bytes, indent width {})",
            file.display(),
            text.len(),
            config.indent_width
        ),
    );

    let (nodes, edges) = parse_description(&text, &config)
        .with_context(|| format!("Failed to parse description: {}", file.display()))?;

    output.verbose_ctx(
        "parse",
        &format!("Parsed {} node(s), {} edge(s)", nodes.len(), edges.len()),
    );

    MikadoGraph::from_parts(nodes, edges).context("Failed to assemble graph")
}

/// Output base name: explicit `-o` value, or the description file stem
fn output_base(file: &Path, output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| file.with_extension(""))
}

/// Renders a description file to DOT (and optionally through Graphviz)
pub fn render(
    output: &Output,
    file: &Path,
    out: Option<PathBuf>,
    graph_format: Option<String>,
    view: bool,
) -> Result<()> {
    let graph = load_graph(output, file)?;
    let dot = render_dot(&graph);

    let base = output_base(file, out);
    let gv_path = base.with_extension("gv");
    fs::write(&gv_path, &dot)
        .with_context(|| format!("Failed to write graph: {}", gv_path.display()))?;

    let artifact = match &graph_format {
        Some(fmt) => Some(run_graphviz(&gv_path, fmt)?),
        None => None,
    };

    if output.is_json() {
        output.data(&serde_json::json!({
            "graph": gv_path.display().to_string(),
            "artifact": artifact.as_ref().map(|p| p.display().to_string()),
            "nodes": graph.nodes().len(),
            "edges": graph.edges().len(),
        }));
    } else {
        output.success(&format!("Wrote {}", gv_path.display()));
        if let Some(path) = &artifact {
            output.success(&format!("Wrote {}", path.display()));
        }
    }

    if view {
        let target = artifact.as_deref().unwrap_or(&gv_path);
        open_artifact(target)?;
    }

    Ok(())
}

/// Parses a description and reports statistics, or the parse failure
pub fn check(output: &Output, file: &Path) -> Result<()> {
    let graph = load_graph(output, file)?;

    let goals: Vec<&str> = graph.goals().map(|n| n.name.as_str()).collect();
    let done = graph.done_count();
    let total = graph.nodes().len();

    if output.is_json() {
        output.data(&serde_json::json!({
            "tasks": graph.len(),
            "goals": goals,
            "done": done,
            "remaining": total - done,
            "nodes": graph.nodes(),
            "edges": graph.edges(),
        }));
    } else {
        println!("Description: {}", file.display());
        println!("Tasks: {} ({} done, {} remaining)", graph.len(), done, total - done);
        println!("Edges: {}", graph.edges().len());
        match goals.as_slice() {
            [] => println!("Goals: none"),
            goals => println!("Goals: {}", goals.join(", ")),
        }
    }

    Ok(())
}

/// Runs the Graphviz `dot` executable on a .gv file
fn run_graphviz(gv_path: &Path, format: &str) -> Result<PathBuf> {
    let out_path = gv_path.with_extension(format);

    let status = Command::new("dot")
        .arg(format!("-T{}", format))
        .arg(gv_path)
        .arg("-o")
        .arg(&out_path)
        .status()
        .context("Failed to run Graphviz 'dot' (is Graphviz installed?)")?;

    if !status.success() {
        anyhow::bail!("Graphviz 'dot' failed with {}", status);
    }

    Ok(out_path)
}

/// Opens a rendered artifact with the platform opener
fn open_artifact(path: &Path) -> Result<()> {
    #[cfg(target_os = "macos")]
    let mut cmd = {
        let mut c = Command::new("open");
        c.arg(path);
        c
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut cmd = {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };

    #[cfg(windows)]
    let mut cmd = {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    };

    cmd.spawn()
        .with_context(|| format!("Failed to open {}", path.display()))?;

    Ok(())
}
