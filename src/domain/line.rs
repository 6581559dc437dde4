//! Line normalization and depth tagging
//!
//! Raw description text is cleaned up line by line before tree
//! reconstruction: comment lines are dropped, characters that would break
//! Graphviz DOT syntax are escaped, and tabs are expanded to spaces. Each
//! surviving line is then tagged with its nesting depth.

use super::config::ParseConfig;

/// One task line after normalization: nesting depth plus the trimmed text
/// with its leading marker token still attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskLine {
    pub depth: usize,
    pub text: String,
}

/// Normalizes description text into comment-free, escaped, non-empty lines.
///
/// Tabs expand to `indent_width` spaces so depth tagging only ever sees
/// space indentation.
pub fn normalize(text: &str, config: &ParseConfig) -> Vec<String> {
    text.lines()
        .filter(|line| {
            let stripped = line.trim_start();
            config
                .comment_markers
                .iter()
                .all(|marker| !stripped.contains(marker.as_str()))
        })
        .map(escape_for_dot)
        .map(|line| line.replace('\t', &" ".repeat(config.indent_width)))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Replaces characters that would corrupt DOT node identifiers.
///
/// A colon inside a node name is DOT port syntax, so it gets a lookalike
/// substitute instead of an escape.
fn escape_for_dot(line: &str) -> String {
    line.replace(':', "Ë").replace('(', "\\(").replace(')', "\\)")
}

/// Tags a normalized line with its nesting depth.
///
/// Depth is leading spaces divided by `indent_width`, truncating toward
/// zero. Misaligned indentation is not an error; it silently rounds down.
pub fn tag(line: &str, config: &ParseConfig) -> TaskLine {
    let indentation = line.chars().take_while(|c| *c == ' ').count();

    TaskLine {
        depth: indentation / config.indent_width,
        text: line.trim_start().to_string(),
    }
}

/// Returns true if the task text starts with a done marker.
pub fn is_done(task: &str, config: &ParseConfig) -> bool {
    config
        .done_markers
        .iter()
        .any(|marker| task.starts_with(marker.as_str()))
}

/// Extracts the canonical task name by dropping the leading marker token.
///
/// The format requires exactly one token before the task text, whether it
/// is a done marker or a placeholder.
pub fn task_name(task: &str) -> String {
    let mut tokens = task.split(' ');
    tokens.next();
    tokens.collect::<Vec<_>>().join(" ").trim_start().to_string()
}
