//! Delete every task after confirmation.

use super::load_store;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::{msg_info, msg_success};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

pub fn cmd() -> Result<()> {
    let storage = Storage::new();
    let mut store = load_store(&storage);

    if store.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmClearAll(store.len()).to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        msg_info!(Message::OperationCancelled);
        return Ok(());
    }

    let removed = store.clear();
    storage.save(&store)?;
    msg_success!(Message::AllTasksCleared(removed));

    Ok(())
}
