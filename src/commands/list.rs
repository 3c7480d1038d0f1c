//! List tasks, optionally narrowed by search text, status and category.
//!
//! Filtering only projects a view for display; the underlying tasks file is
//! never reduced by a filter, so switching filters never loses data.

use super::load_store;
use crate::libs::filter::{StatusFilter, TaskFilter};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::Category;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Case-insensitive substring to look for in task text
    #[arg(long, short)]
    search: Option<String>,

    #[arg(long, value_enum, default_value_t = StatusFilter::All, help = "Only show tasks with this status")]
    status: StatusFilter,

    #[arg(long, short, value_enum, help = "Only show tasks in this category")]
    category: Option<Category>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let storage = Storage::new();
    let store = load_store(&storage);

    let filter = TaskFilter {
        search: args.search,
        status: args.status,
        category: args.category,
    };
    let tasks = filter.apply(store.all());

    if tasks.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;

    // Summary over the whole store, not the filtered view.
    let stats = store.stats();
    msg_print!(Message::StatsSummary {
        total: stats.total,
        completed: stats.completed,
        pending: stats.pending,
    });

    Ok(())
}
