//! Toggle the completion flag of a single task.

use super::{load_store, resolve_id};
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task id, full or unique prefix
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let storage = Storage::new();
    let mut store = load_store(&storage);

    let id = match resolve_id(&store, &args.id) {
        Ok(id) => id,
        Err(msg) => {
            msg_error!(msg);
            return Ok(());
        }
    };

    let text = store.find(&id).map(|t| t.text.clone()).unwrap_or_default();
    let done = store.toggle_done(&id)?;
    storage.save(&store)?;

    if done {
        msg_success!(Message::TaskMarkedDone(text));
    } else {
        msg_success!(Message::TaskReopened(text));
    }

    Ok(())
}
