//! Domain models
//!
//! Core types for the export pipeline, free of any I/O concerns.

mod key;
mod task;

pub use key::TaskKey;
pub use task::TaskState;
