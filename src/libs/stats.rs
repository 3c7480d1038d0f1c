//! Aggregate counts over the task store.
//!
//! Recomputed on demand from the full task list, never cached. Used by the
//! list command's summary line and the stats command's detailed report.

use super::task::{Category, Task};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Count per category, only for categories actually present.
    pub by_category: BTreeMap<Category, usize>,
}

impl Stats {
    pub fn collect(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.done).count();
        let mut by_category = BTreeMap::new();
        for task in tasks {
            *by_category.entry(task.category).or_insert(0) += 1;
        }
        Stats {
            total,
            completed,
            pending: total - completed,
            by_category,
        }
    }
}
