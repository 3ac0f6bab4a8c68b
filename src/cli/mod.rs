//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Commands
//!
//! | Command | Purpose | Example |
//! |---------|---------|---------|
//! | `circle`, `rectangle`, `square` | Measure one shape | `geometry circle --radius 5` |
//! | `export` | Serialize one shape | `geometry export circle --params '{"radius": 5}'` |
//! | `report` | Summarize a shape file | `geometry report shapes.json --output report.txt` |
//! | `largest` | Largest shape in a file | `geometry largest shapes.yaml` |
//! | `constants` | List constants | `geometry constants` |
//!
//! ## Output Formats
//!
//! All commands support the `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! The default can be changed with `default_format` in the config file.
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod shape_cmd;
mod report_cmd;

pub use app::{Cli, Commands, run};
pub use output::{Output, OutputFormat};
