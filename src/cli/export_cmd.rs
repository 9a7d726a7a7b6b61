//! Export command: the host side of the pipeline
//!
//! Reads the observed-task feed, enforces the host preconditions the
//! core cannot check (feed present, well-formed, non-empty), hands the
//! rows to the export core, and delivers the resulting string to
//! stdout or a file.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use super::catalog_cmd;
use super::output::Output;
use crate::domain::TaskState;
use crate::export::{self, ExportError, ExportFormat};

pub fn run(
    output: &Output,
    format: ExportFormat,
    input: &str,
    dest: Option<&Path>,
    catalog_path: Option<&Path>,
) -> Result<()> {
    let states = read_feed(output, input)?;

    output.verbose_ctx(
        "export",
        &format!("Rendering {} export for {} rows", format.as_str(), states.len()),
    );

    let rendered = match format {
        ExportFormat::Csv => export::export(&states, format)?,
        ExportFormat::RestoreSnippet => {
            let catalog = catalog_cmd::load_catalog(output, catalog_path)?;
            export::export_with_catalog(&catalog, &states, format)?
        }
    };

    deliver(output, &rendered, dest)
}

/// Reads and validates the task feed: a JSON array of
/// `{"name", "completed"}` rows, from a file or stdin (`-`).
fn read_feed(output: &Output, input: &str) -> Result<Vec<TaskState>> {
    let raw = if input == "-" {
        output.verbose_ctx("feed", "Reading task feed from stdin");
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| ExportError::Precondition(format!("could not read task feed from stdin: {e}")))?;
        buf
    } else {
        output.verbose_ctx("feed", &format!("Reading task feed from {input}"));
        fs::read_to_string(input)
            .map_err(|e| ExportError::Precondition(format!("could not read task feed {input}: {e}")))?
    };

    let states: Vec<TaskState> = serde_json::from_str(&raw)
        .map_err(|e| ExportError::Precondition(format!("malformed task feed: {e}")))?;

    if states.is_empty() {
        return Err(ExportError::Precondition("task feed contains no rows".to_string()).into());
    }

    output.verbose_ctx("feed", &format!("Read {} task rows", states.len()));
    Ok(states)
}

fn deliver(output: &Output, rendered: &str, dest: Option<&Path>) -> Result<()> {
    match dest {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write export to {}", path.display()))?;
            output.success(&format!("Export written to {}", path.display()));
        }
        None => print!("{rendered}"),
    }

    Ok(())
}
