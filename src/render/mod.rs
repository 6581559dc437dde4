//! Graph rendering
//!
//! Backends consume nodes and edges and produce a visual artifact. The
//! bundled backend emits Graphviz DOT.

mod dot;

pub use dot::{render_dot, DotBackend, GraphBackend};
