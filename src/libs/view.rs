//! Console table rendering for tasks and statistics.

use super::stats::Stats;
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders a list of tasks, one row per record, in the given order.
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "TASK", "PRIORITY", "CATEGORY", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.short_id(),
                if task.done { "✔" } else { "" },
                task.text,
                task.priority,
                task.category,
                task.created
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders the per-category breakdown of a stats snapshot.
    pub fn stats(stats: &Stats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "TASKS"]);
        for (category, count) in &stats.by_category {
            table.add_row(row![category, count]);
        }
        table.printstd();

        Ok(())
    }
}
