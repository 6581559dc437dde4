//! Domain models for Mikado CLI
//!
//! The core description-to-graph transformation, free of any I/O concerns.

mod config;
mod graph;
mod line;
mod parse;

pub use config::{ConfigError, ParseConfig, CONFIG_FILE};
pub use graph::{Edge, GraphError, MikadoGraph, Node};
pub use parse::{parse_description, ParseError};
