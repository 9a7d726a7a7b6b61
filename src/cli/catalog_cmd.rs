//! Catalog inspection commands

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Subcommand;

use super::output::Output;
use crate::catalog::Catalog;
use crate::config::GlobalConfig;

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// Check a catalog for duplicate task keys
    Verify {
        /// Alternate catalog file (defaults to the bundled dataset)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List catalog entries as id<TAB>name
    List {
        /// Alternate catalog file (defaults to the bundled dataset)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(cmd: CatalogCommands, output: &Output) -> Result<()> {
    match cmd {
        CatalogCommands::Verify { catalog } => {
            let catalog = load_catalog(output, catalog.as_deref())?;
            output.success(&format!("Catalog OK: {} tasks", catalog.len()));
        }

        CatalogCommands::List { catalog } => {
            let catalog = load_catalog(output, catalog.as_deref())?;
            if output.is_json() {
                output.data(&catalog.tasks());
            } else {
                for task in catalog.tasks() {
                    output.row(&[&task.id, &task.name]);
                }
            }
        }
    }

    Ok(())
}

/// Opens the catalog to use: the explicit override, then the
/// configured default, then the bundled dataset.
pub(crate) fn load_catalog(output: &Output, override_path: Option<&Path>) -> Result<Catalog> {
    let path = match override_path {
        Some(path) => Some(path.to_path_buf()),
        None => GlobalConfig::load()?.catalog,
    };

    match path {
        Some(path) => {
            output.verbose_ctx("catalog", &format!("Loading catalog from {}", path.display()));
            Catalog::load(&path)
                .with_context(|| format!("Failed to load catalog: {}", path.display()))
        }
        None => {
            output.verbose_ctx("catalog", "Using bundled catalog");
            Ok(Catalog::bundled()?)
        }
    }
}
