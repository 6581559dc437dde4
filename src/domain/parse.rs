//! Mikado description parsing
//!
//! The tree reconstructor: walks the ordered (task, depth) sequence while
//! maintaining an ancestor stack indexed by depth, emitting one
//! parent-depends-on-child edge per nested line. Nodes and edges are
//! deduplicated preserving first-occurrence order, so identical input always
//! produces identical output.

use std::collections::HashSet;

use thiserror::Error;

use super::config::ParseConfig;
use super::graph::{Edge, Node};
use super::line::{self, TaskLine};

#[derive(Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("no ancestor one level up for task {line:?} at depth {depth}; description skips an indentation level")]
    MalformedHierarchy { line: String, depth: usize },
}

/// Parses a mikado description into deduplicated node and edge sets.
///
/// Pure and deterministic: the same text and configuration always yield the
/// same (nodes, edges) in the same order. The only failure is
/// [`ParseError::MalformedHierarchy`], raised when a line is indented more
/// than one level past its deepest recorded ancestor.
pub fn parse_description(
    text: &str,
    config: &ParseConfig,
) -> Result<(Vec<Node>, Vec<Edge>), ParseError> {
    let tasks: Vec<TaskLine> = line::normalize(text, config)
        .iter()
        .map(|l| line::tag(l, config))
        .collect();

    let pairs = ancestor_pairs(&tasks)?;

    let mut nodes = Vec::new();
    let mut seen_nodes = HashSet::new();
    for task in &tasks {
        let node = Node {
            name: line::task_name(&task.text),
            done: line::is_done(&task.text, config),
            goal: task.depth == 0,
        };
        if seen_nodes.insert(node.clone()) {
            nodes.push(node);
        }
    }

    let mut edges = Vec::new();
    let mut seen_edges = HashSet::new();
    for (parent, child) in pairs {
        let edge = Edge {
            done: line::is_done(&parent, config) && line::is_done(&child, config),
            src: line::task_name(&parent),
            dst: line::task_name(&child),
        };
        if seen_edges.insert(edge.clone()) {
            edges.push(edge);
        }
    }

    Ok((nodes, edges))
}

/// Resolves each line's immediate parent via an ancestor stack.
///
/// The stack entry at position `i` is the nearest enclosing ancestor at
/// depth `i`. A depth-0 line starts a new root and emits no edge; any
/// deeper line takes the stack entry one level up as its parent. Moving to
/// a sibling or back out truncates the stack, invalidating deeper entries
/// for subsequent lines.
fn ancestor_pairs(tasks: &[TaskLine]) -> Result<Vec<(String, String)>, ParseError> {
    let mut pairs = Vec::new();
    let mut ancestors: Vec<String> = Vec::new();

    for task in tasks {
        if task.depth > 0 {
            let parent =
                ancestors
                    .get(task.depth - 1)
                    .ok_or_else(|| ParseError::MalformedHierarchy {
                        line: task.text.clone(),
                        depth: task.depth,
                    })?;
            pairs.push((parent.clone(), task.text.clone()));
        }

        ancestors.truncate(task.depth);
        ancestors.push(task.text.clone());
    }

    Ok(pairs)
}
