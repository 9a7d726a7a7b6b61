//! Normalized task-name keys
//!
//! Task names as the game client renders them differ cosmetically from
//! the names in the osleague.tools catalog ("Kill the Dragon!" vs
//! "kill the dragon"). Matching therefore happens on a canonical key:
//! lowercase, with every character outside `a-z`, `0-9`, and space
//! removed. The same derivation is applied to catalog entries and to
//! observed rows, so punctuation and capitalisation never break a
//! match.

use std::fmt;

/// Canonical lookup key derived from a task display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskKey(String);

impl TaskKey {
    /// Normalizes a display name into its lookup key.
    pub fn new(name: &str) -> Self {
        let key = name
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == ' ')
            .collect();
        Self(key)
    }

    /// Returns the key as a plain string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
