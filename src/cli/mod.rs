//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `render` | Parse a description and write the Graphviz graph |
//! | `check` | Parse a description and report statistics |
//! | `watch` | Re-render whenever the description changes |
//!
//! All commands support `--format text|json` and `--verbose`. Call
//! [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod render_cmd;
mod watch;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
