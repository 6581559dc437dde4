//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{render_cmd, watch};

#[derive(Parser)]
#[command(name = "mikado")]
#[command(author, version, about = "Draw dependency graphs for the Mikado refactoring method")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a mikado description to a Graphviz graph
    Render {
        /// Mikado description file
        file: PathBuf,

        /// Output file base name, no extension (defaults to the description file stem)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Also run Graphviz to produce this format (pdf, png, svg, ...)
        #[arg(long, short = 'T')]
        graph_format: Option<String>,

        /// Open the generated graph
        #[arg(long)]
        view: bool,
    },

    /// Parse a description and report graph statistics
    Check {
        /// Mikado description file
        file: PathBuf,
    },

    /// Watch a description file and re-render on change
    Watch {
        /// Mikado description file
        file: PathBuf,

        /// Output file base name, no extension (defaults to the description file stem)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Also run Graphviz to produce this format (pdf, png, svg, ...)
        #[arg(long, short = 'T')]
        graph_format: Option<String>,

        /// Debounce delay in milliseconds
        #[arg(long, default_value = "500")]
        debounce_ms: u64,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Mikado CLI starting");

    match cli.command {
        Commands::Render {
            file,
            output: out,
            graph_format,
            view,
        } => {
            output.verbose_ctx("render", &format!("Rendering {}", file.display()));
            render_cmd::render(&output, &file, out, graph_format, view)?;
        }

        Commands::Check { file } => {
            output.verbose_ctx("check", &format!("Checking {}", file.display()));
            render_cmd::check(&output, &file)?;
        }

        Commands::Watch {
            file,
            output: out,
            graph_format,
            debounce_ms,
        } => {
            output.verbose_ctx("watch", &format!("Watching {}", file.display()));
            watch::run(&output, &file, out, graph_format, debounce_ms)?;
        }
    }

    output.verbose("Command completed successfully");
    Ok(())
}
