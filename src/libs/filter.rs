//! Filter engine for task list views.
//!
//! A filter is a pure predicate over a store snapshot. Applying it never
//! mutates the store; it only projects an order-preserving view, so
//! switching filters never loses data.

use super::task::{Category, Task};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StatusFilter {
    #[default]
    All,
    Pending,
    Completed,
}

/// Conjunction of search, status and category predicates. An unset field
/// passes everything.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub search: Option<String>,
    pub status: StatusFilter,
    pub category: Option<Category>,
}

impl TaskFilter {
    /// True iff the task passes all three predicates. The search predicate
    /// is a case-insensitive substring match on the task text.
    pub fn matches(&self, task: &Task) -> bool {
        let search_ok = match self.search.as_deref() {
            None | Some("") => true,
            Some(needle) => task.text.to_lowercase().contains(&needle.to_lowercase()),
        };
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Pending => !task.done,
            StatusFilter::Completed => task.done,
        };
        let category_ok = match self.category {
            None => true,
            Some(category) => task.category == category,
        };
        search_ok && status_ok && category_ok
    }

    /// Projects the matching tasks, preserving the snapshot's order.
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }
}
