//! Watch mode
//!
//! Watches the description file's directory and re-renders on change,
//! debounced. Rebuilds are serialized over the event channel; a parse
//! failure is logged and watching continues.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use anyhow::{Context, Result};
use notify::RecursiveMode;
use notify_debouncer_mini::new_debouncer;

use super::output::Output;
use super::render_cmd;

pub fn run(
    output: &Output,
    file: &Path,
    out: Option<PathBuf>,
    graph_format: Option<String>,
    debounce_ms: u64,
) -> Result<()> {
    let file = file
        .canonicalize()
        .with_context(|| format!("Failed to resolve description: {}", file.display()))?;
    let dir = file
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    // Initial render; failures here should not kill the watcher
    if let Err(e) = render_cmd::render(output, &file, out.clone(), graph_format.clone(), false) {
        log(output, &format!("Render failed: {:#}", e));
    }

    let (tx, rx) = mpsc::channel();
    let mut debouncer =
        new_debouncer(Duration::from_millis(debounce_ms), tx).context("Failed to create watcher")?;

    // Editors often replace the file on save, so watch the directory and
    // filter, rather than watching the file inode itself.
    debouncer
        .watcher()
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch: {}", dir.display()))?;

    log(
        output,
        &format!("Watching {} (debounce {}ms)", file.display(), debounce_ms),
    );

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                if events.iter().all(|e| e.path != file) {
                    continue;
                }

                log(output, "Change detected, rebuilding");
                match render_cmd::render(output, &file, out.clone(), graph_format.clone(), false) {
                    Ok(()) => log(output, "Rebuild complete"),
                    Err(e) => log(output, &format!("Rebuild failed: {:#}", e)),
                }
            }
            Ok(Err(error)) => {
                log(output, &format!("Watch error: {:?}", error));
            }
            Err(e) => {
                log(output, &format!("Watch channel closed: {}", e));
                break;
            }
        }
    }

    Ok(())
}

/// Logs a timestamped watch-loop message
fn log(output: &Output, message: &str) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    if output.is_json() {
        output.data(&serde_json::json!({
            "time": timestamp.to_string(),
            "message": message,
        }));
    } else {
        eprintln!("[{}] {}", timestamp, message);
    }
}
