//! In-memory task store.
//!
//! The store is the sole owner of the ordered task sequence. Order is
//! insertion order and is never changed by any operation. Single-record
//! operations report validation and not-found failures; bulk operations
//! are best-effort and silently skip unknown ids.

use super::error::{TaskError, TaskResult};
use super::stats::Stats;
use super::task::{Category, Priority, Task, TaskPatch};
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore { tasks: Vec::new() }
    }

    /// Wraps tasks loaded from disk. Order is preserved as given.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        TaskStore { tasks }
    }

    /// Appends a new task. The text is trimmed; an empty result is rejected
    /// with `EmptyText` and the store is left unchanged.
    pub fn add(&mut self, text: &str, priority: Priority, category: Category) -> TaskResult<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TaskError::EmptyText);
        }
        self.tasks.push(Task::new(text, priority, category));
        Ok(self.tasks.last().expect("task was just pushed"))
    }

    /// Linear lookup by exact id. Absence is a normal outcome.
    pub fn find(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Applies a partial update to the task with the given id.
    ///
    /// A patch text that trims down to nothing is rejected before any field
    /// is touched, so a failed update never leaves the record half-changed.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> TaskResult<()> {
        let task = self.tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        let text = match &patch.text {
            Some(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(TaskError::EmptyText);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };
        if let Some(text) = text {
            task.text = text;
        }
        if let Some(done) = patch.done {
            task.done = done;
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        if let Some(category) = patch.category {
            task.category = category;
        }
        Ok(())
    }

    /// Flips the completion flag and returns the new state.
    pub fn toggle_done(&mut self, id: &str) -> TaskResult<bool> {
        let task = self.tasks.iter_mut().find(|t| t.id == id).ok_or_else(|| TaskError::NotFound(id.to_string()))?;
        task.done = !task.done;
        Ok(task.done)
    }

    /// Marks every matching task done. Unknown ids are skipped; returns the
    /// number of tasks that changed state.
    pub fn mark_done(&mut self, ids: &HashSet<String>) -> usize {
        let mut updated = 0;
        for task in self.tasks.iter_mut().filter(|t| ids.contains(&t.id)) {
            if !task.done {
                updated += 1;
            }
            task.done = true;
        }
        updated
    }

    /// Removes every matching task. Unknown ids are skipped; returns the
    /// number of tasks removed.
    pub fn delete(&mut self, ids: &HashSet<String>) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !ids.contains(&t.id));
        before - self.tasks.len()
    }

    /// Empties the store unconditionally and returns the number of tasks
    /// removed. Asking the user first is the caller's job.
    pub fn clear(&mut self) -> usize {
        let removed = self.tasks.len();
        self.tasks.clear();
        removed
    }

    /// Read-only view of all tasks in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Recomputes aggregate counts over the full store.
    pub fn stats(&self) -> Stats {
        Stats::collect(&self.tasks)
    }
}
