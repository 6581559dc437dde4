//! Mikado dependency graph
//!
//! Wraps the parsed node and edge sets in a petgraph digraph keyed by task
//! name, for the structural queries the CLI reports on (goals, progress,
//! prerequisites).

use std::collections::HashMap;

use petgraph::graph::{DiGraph, NodeIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Edge references unknown task: {0}")]
    UnknownTask(String),
}

/// One unique task in the description.
///
/// Identity is the full (name, done, goal) tuple: a task appearing both as
/// a depth-0 goal and as a nested prerequisite yields two nodes differing
/// only in `goal`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub done: bool,
    pub goal: bool,
}

/// One direct parent-depends-on-child relationship.
///
/// `done` is true only when both endpoint tasks are individually done.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub src: String,
    pub dst: String,
    pub done: bool,
}

/// A mikado graph: deduplicated nodes and edges plus a name-indexed digraph
#[derive(Debug, Default)]
pub struct MikadoGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,

    /// Structural view, one graph node per unique task name
    graph: DiGraph<String, bool>,

    /// Map from task name to graph node index
    node_map: HashMap<String, NodeIndex>,
}

impl MikadoGraph {
    /// Builds a graph from parsed nodes and edges.
    ///
    /// Parser output always satisfies the edge-endpoint invariant; the
    /// check guards graphs assembled by hand.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let mut graph = DiGraph::new();
        let mut node_map: HashMap<String, NodeIndex> = HashMap::new();

        for node in &nodes {
            node_map
                .entry(node.name.clone())
                .or_insert_with(|| graph.add_node(node.name.clone()));
        }

        for edge in &edges {
            let src = *node_map
                .get(&edge.src)
                .ok_or_else(|| GraphError::UnknownTask(edge.src.clone()))?;
            let dst = *node_map
                .get(&edge.dst)
                .ok_or_else(|| GraphError::UnknownTask(edge.dst.clone()))?;
            graph.add_edge(src, dst, edge.done);
        }

        Ok(Self {
            nodes,
            edges,
            graph,
            node_map,
        })
    }

    /// All nodes in first-occurrence order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All edges in first-occurrence order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes flagged as goals (depth-0 occurrences)
    pub fn goals(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.goal)
    }

    /// Number of unique task names
    pub fn len(&self) -> usize {
        self.node_map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_map.is_empty()
    }

    /// Returns true if any occurrence of the named task exists
    pub fn contains(&self, name: &str) -> bool {
        self.node_map.contains_key(name)
    }

    /// Number of nodes marked done
    pub fn done_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.done).count()
    }

    /// Direct prerequisites of a task (its children in the description)
    pub fn prerequisites(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, petgraph::Direction::Outgoing)
    }

    /// Tasks that directly depend on the named task
    pub fn dependents(&self, name: &str) -> Vec<&str> {
        self.neighbors(name, petgraph::Direction::Incoming)
    }

    fn neighbors(&self, name: &str, direction: petgraph::Direction) -> Vec<&str> {
        let idx = match self.node_map.get(name) {
            Some(idx) => *idx,
            None => return vec![],
        };

        self.graph
            .neighbors_directed(idx, direction)
            .filter_map(|idx| self.graph.node_weight(idx).map(String::as_str))
            .collect()
    }
}
