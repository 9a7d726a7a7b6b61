//! Export pipeline
//!
//! Two serializers over one observed task list: a CSV report of every
//! row, and a restore snippet that rewrites osleague.tools' stored
//! completion state. The snippet path resolves display names to
//! catalog ids first and fails on the first unmatched completed task;
//! there is no partial output.

pub mod csv;
pub mod snippet;

use std::str::FromStr;

use thiserror::Error;

use crate::catalog::{Catalog, CatalogError};
use crate::domain::{TaskKey, TaskState};

/// Export kind selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// CSV report of every observed row
    Csv,
    /// Restore snippet for osleague.tools
    RestoreSnippet,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::RestoreSnippet => "snippet",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "snippet" | "restore" => Ok(ExportFormat::RestoreSnippet),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("No catalog entry for completed task: {0}")]
    UnknownTask(TaskKey),

    #[error("Invalid export format: {0}. Valid formats: csv, snippet")]
    UnknownFormat(String),

    #[error("Failed to encode identifier payload: {0}")]
    Snippet(#[source] serde_json::Error),

    #[error("Precondition failed: {0}")]
    Precondition(String),
}

/// Resolves every completed row to its catalog id, preserving input
/// order.
///
/// Fails on the first completed row whose normalized name is missing
/// from the catalog; nothing is skipped and no partial result is
/// returned.
pub fn resolve_completed(
    catalog: &Catalog,
    states: &[TaskState],
) -> Result<Vec<String>, ExportError> {
    states
        .iter()
        .filter(|state| state.completed)
        .map(|state| {
            let key = state.key();
            match catalog.id_for(&key) {
                Some(id) => Ok(id.to_string()),
                None => Err(ExportError::UnknownTask(key)),
            }
        })
        .collect()
}

/// Renders the chosen export against an already-loaded catalog.
///
/// The CSV report works from the raw rows alone; the catalog is only
/// consulted for the restore snippet.
pub fn export_with_catalog(
    catalog: &Catalog,
    states: &[TaskState],
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => Ok(csv::render(states)),
        ExportFormat::RestoreSnippet => {
            let ids = resolve_completed(catalog, states)?;
            snippet::render(&ids).map_err(ExportError::Snippet)
        }
    }
}

/// Renders the chosen export, loading the bundled catalog only when
/// the format needs one.
pub fn export(states: &[TaskState], format: ExportFormat) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => Ok(csv::render(states)),
        ExportFormat::RestoreSnippet => {
            let catalog = Catalog::bundled()?;
            export_with_catalog(&catalog, states, format)
        }
    }
}
