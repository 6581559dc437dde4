//! Mikado CLI - dependency graphs for the Mikado refactoring method
//!
//! Parses indentation-structured "mikado description" files into a directed
//! graph of goals and prerequisite tasks, and renders the graph as Graphviz
//! DOT. Includes a watch mode that re-renders whenever the description
//! changes.

pub mod cli;
pub mod domain;
pub mod render;

pub use domain::{parse_description, Edge, MikadoGraph, Node, ParseConfig, ParseError};
