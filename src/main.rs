//! Geometry CLI - shape measurements and reports from the command line

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = geometry_utils::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
