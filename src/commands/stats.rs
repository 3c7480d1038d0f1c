//! Show aggregate task statistics.

use super::load_store;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Include the per-category breakdown
    #[arg(long, short)]
    detailed: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let storage = Storage::new();
    let store = load_store(&storage);
    let stats = store.stats();

    msg_print!(Message::StatsHeader, true);
    msg_print!(Message::StatsSummary {
        total: stats.total,
        completed: stats.completed,
        pending: stats.pending,
    });

    if args.detailed && !stats.by_category.is_empty() {
        View::stats(&stats)?;
    }

    Ok(())
}
