//! Mikado CLI - dependency graphs for the Mikado refactoring method

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = mikado_cli::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
