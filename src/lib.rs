//! osleague-export - Export OSRS Leagues task progress
//!
//! Takes an observed list of league task rows (display name plus a
//! completed flag), matches names against the bundled osleague.tools
//! task catalog, and renders either a CSV report or a restore snippet
//! that rewrites the site's locally stored completion state.

pub mod domain;
pub mod catalog;
pub mod config;
pub mod export;
pub mod cli;

pub use catalog::{Catalog, CatalogError, CatalogTask};
pub use domain::{TaskKey, TaskState};
pub use export::{ExportError, ExportFormat};
