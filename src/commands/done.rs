//! Mark one or more tasks as done.
//!
//! Ids can be passed as arguments; with none, an interactive multi-select
//! over the pending tasks is shown. The bulk operation is best-effort:
//! unknown ids are reported and skipped, matching tasks are updated.

use super::{load_store, resolve_ids, task_line};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ids, full or unique prefixes
    ids: Vec<String>,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let storage = Storage::new();
    let mut store = load_store(&storage);

    let ids: HashSet<String> = if args.ids.is_empty() {
        let pending: Vec<_> = store.all().iter().filter(|t| !t.done).collect();
        if pending.is_empty() {
            msg_info!(Message::NoPendingTasks);
            return Ok(());
        }
        let items: Vec<String> = pending.iter().map(|t| task_line(t)).collect();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectTasksDone.to_string())
            .items(&items)
            .interact()?;
        selected.into_iter().map(|i| pending[i].id.clone()).collect()
    } else {
        let (matched, missed) = resolve_ids(&store, &args.ids);
        if !missed.is_empty() {
            msg_warning!(Message::TasksNotFoundForIds(missed));
        }
        matched
    };

    if ids.is_empty() {
        msg_info!(Message::NoTasksSelected);
        return Ok(());
    }

    let updated = store.mark_done(&ids);
    storage.save(&store)?;
    msg_success!(Message::TasksMarkedDone(updated));

    Ok(())
}
