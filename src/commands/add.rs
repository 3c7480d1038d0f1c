//! Create a new task from command-line arguments.

use super::load_store;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::{Category, Priority};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    text: String,

    #[arg(long, short, value_enum, default_value_t = Priority::Medium, help = "Task priority")]
    priority: Priority,

    #[arg(long, short, value_enum, default_value_t = Category::General, help = "Task category")]
    category: Category,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let storage = Storage::new();
    let mut store = load_store(&storage);

    let text = match store.add(&args.text, args.priority, args.category) {
        Ok(task) => task.text.clone(),
        Err(TaskError::EmptyText) => {
            msg_error!(Message::EmptyTaskText);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    storage.save(&store)?;
    msg_success!(Message::TaskCreated(text));

    Ok(())
}
