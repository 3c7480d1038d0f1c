//! Delete one or more tasks after confirmation.

use super::{load_store, resolve_ids, task_line};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::{msg_info, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, MultiSelect};
use std::collections::HashSet;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ids, full or unique prefixes
    ids: Vec<String>,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let storage = Storage::new();
    let mut store = load_store(&storage);

    if store.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let ids: HashSet<String> = if args.ids.is_empty() {
        let items: Vec<String> = store.all().iter().map(task_line).collect();
        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectTasksDelete.to_string())
            .items(&items)
            .interact()?;
        selected.into_iter().map(|i| store.all()[i].id.clone()).collect()
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

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmDeleteTasks(ids.len()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = store.delete(&ids);
    storage.save(&store)?;
    msg_success!(Message::TasksDeletedCount(removed));

    Ok(())
}
