//! Persistence adapter for the tasks file.
//!
//! The whole store is written as one pretty-printed JSON array and read
//! back with per-field defaulting, so files written by older versions or
//! edited by hand still load. The file name is fixed and resolved relative
//! to the process working directory; there is nothing to configure.

use super::error::TaskResult;
use super::store::TaskStore;
use super::task::{PartialTask, Task};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Tasks file name, resolved relative to the working directory.
pub const TASKS_FILE_NAME: &str = "tasks.json";

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Default for Storage {
    fn default() -> Self {
        Storage::new()
    }
}

impl Storage {
    pub fn new() -> Self {
        Storage { path: PathBuf::from(TASKS_FILE_NAME) }
    }

    /// Storage rooted at an explicit path, used by tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Storage { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Overwrites the tasks file with the store's full ordered contents.
    pub fn save(&self, store: &TaskStore) -> TaskResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, store.all())?;
        Ok(())
    }

    /// Loads all tasks from the file.
    ///
    /// A missing file is an empty list, not an error. A file that is not a
    /// valid JSON array is a `Format` error. Each element is completed with
    /// `Task::from_partial`, so records may mix stored and defaulted fields.
    pub fn load(&self) -> TaskResult<Vec<Task>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let partials: Vec<PartialTask> = serde_json::from_str(&raw)?;
        Ok(partials.into_iter().map(Task::from_partial).collect())
    }
}
