//! # Command-Line Interface
//!
//! User-facing commands and output formatting. The CLI is the host
//! side of the pipeline: it produces the observed-task feed for the
//! export core and delivers the resulting string.
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `export <csv\|snippet>` | Render an export from a task feed |
//! | `catalog verify` | Check a catalog for duplicate task keys |
//! | `catalog list` | Print catalog entries |
//!
//! All commands support a global `--format text|json` flag for status
//! messages and `--verbose` (`-v`) for debug output on stderr.
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate
//! command.

mod app;
mod output;
mod export_cmd;
mod catalog_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
