//! Graphviz DOT backend
//!
//! Emits a strict digraph drawn bottom-to-top: prerequisites point up at
//! the tasks depending on them. Done tasks and edges are dark green, open
//! ones firebrick red; goals get a double outline.

use crate::domain::{Edge, MikadoGraph, Node};

/// A rendering backend consuming nodes and edges one at a time
pub trait GraphBackend {
    fn add_node(&mut self, node: &Node);
    fn add_edge(&mut self, edge: &Edge);
}

/// Accumulates DOT statements for a mikado graph
#[derive(Debug)]
pub struct DotBackend {
    body: String,
}

impl DotBackend {
    pub fn new() -> Self {
        Self {
            body: String::from("strict digraph {\n    rankdir=BT\n"),
        }
    }

    /// Closes the digraph and returns the DOT source
    pub fn finish(mut self) -> String {
        self.body.push_str("}\n");
        self.body
    }

    fn color(done: bool) -> &'static str {
        if done {
            "darkgreen"
        } else {
            "firebrick"
        }
    }
}

impl Default for DotBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBackend for DotBackend {
    fn add_node(&mut self, node: &Node) {
        let color = Self::color(node.done);
        let peripheries = if node.goal { 2 } else { 1 };
        self.body.push_str(&format!(
            "    \"{}\" [color={} fontcolor={} peripheries={}]\n",
            node.name, color, color, peripheries
        ));
    }

    fn add_edge(&mut self, edge: &Edge) {
        self.body.push_str(&format!(
            "    \"{}\" -> \"{}\" [color={}]\n",
            edge.src,
            edge.dst,
            Self::color(edge.done)
        ));
    }
}

/// Renders a whole graph to DOT source
pub fn render_dot(graph: &MikadoGraph) -> String {
    let mut backend = DotBackend::new();

    for node in graph.nodes() {
        backend.add_node(node);
    }
    for edge in graph.edges() {
        backend.add_edge(edge);
    }

    backend.finish()
}
