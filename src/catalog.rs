//! Canonical task catalog
//!
//! osleague.tools identifies league tasks by stable ids while the game
//! client only exposes display names. The bundled dataset maps one to
//! the other and is indexed here by normalized name. Two entries
//! normalizing to the same key is a data-integrity fault in the
//! dataset itself, so loading rejects the conflict instead of letting
//! one entry silently shadow the other.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::TaskKey;

/// Task dataset from osleague.tools, compiled into the binary.
const BUNDLED_TASKS: &str = include_str!("../data/tasks.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate task key in catalog: {0}")]
    DuplicateKey(TaskKey),
}

/// One canonical task from the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTask {
    /// Stable osleague.tools identifier
    pub id: String,

    /// Display name
    pub name: String,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    tasks: Vec<CatalogTask>,
}

/// A loaded catalog: entries in dataset order plus a normalized-name
/// index for lookups.
#[derive(Debug)]
pub struct Catalog {
    tasks: Vec<CatalogTask>,
    index: HashMap<TaskKey, usize>,
}

impl Catalog {
    /// Loads the dataset compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(BUNDLED_TASKS)
    }

    /// Loads an alternate dataset from disk. Same JSON shape as the
    /// bundled one: `{"tasks": [{"id": ..., "name": ...}, ...]}`.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parses and indexes a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let data: CatalogData = serde_json::from_str(json)?;

        let mut index = HashMap::with_capacity(data.tasks.len());
        for (pos, task) in data.tasks.iter().enumerate() {
            let key = TaskKey::new(&task.name);
            if index.contains_key(&key) {
                return Err(CatalogError::DuplicateKey(key));
            }
            index.insert(key, pos);
        }

        Ok(Self {
            tasks: data.tasks,
            index,
        })
    }

    /// Looks up the canonical id for a normalized key.
    pub fn id_for(&self, key: &TaskKey) -> Option<&str> {
        self.index.get(key).map(|&pos| self.tasks[pos].id.as_str())
    }

    /// Entries in dataset order.
    pub fn tasks(&self) -> &[CatalogTask] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_and_indexes_entries() {
        let catalog = Catalog::from_json(
            r#"{"tasks": [
                {"id": "1", "name": "Kill the Dragon!"},
                {"id": "2", "name": "Catch a Shrimp"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.id_for(&TaskKey::new("kill the dragon")), Some("1"));
        assert_eq!(catalog.id_for(&TaskKey::new("CATCH A SHRIMP")), Some("2"));
        assert_eq!(catalog.id_for(&TaskKey::new("no such task")), None);
    }

    #[test]
    fn rejects_duplicate_keys() {
        let err = Catalog::from_json(
            r#"{"tasks": [
                {"id": "1", "name": "Kill the Dragon!"},
                {"id": "2", "name": "kill the dragon"}
            ]}"#,
        )
        .unwrap_err();

        match err {
            CatalogError::DuplicateKey(key) => assert_eq!(key.as_str(), "kill the dragon"),
            other => panic!("expected DuplicateKey, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            Catalog::from_json("not json").unwrap_err(),
            CatalogError::Parse(_)
        ));
    }

    #[test]
    fn empty_catalog_is_valid() {
        let catalog = Catalog::from_json(r#"{"tasks": []}"#).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn bundled_dataset_loads() {
        let catalog = Catalog::bundled().unwrap();
        assert!(!catalog.is_empty());
    }
}
