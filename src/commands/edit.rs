//! Interactive task editing.
//!
//! Walks the user through the task's fields with the current values
//! prefilled, builds a patch from what actually changed, and applies it in
//! one store update. Leaving every field as-is is detected and reported
//! without touching the store or the tasks file.

use super::{load_store, resolve_id, task_line};
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::task::{Category, Priority, TaskPatch};
use crate::{msg_error, msg_info, msg_print, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task id, full or unique prefix; omit to pick from a list
    id: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let storage = Storage::new();
    let mut store = load_store(&storage);

    if store.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    let id = match args.id {
        Some(input) => match resolve_id(&store, &input) {
            Ok(id) => id,
            Err(msg) => {
                msg_error!(msg);
                return Ok(());
            }
        },
        None => {
            let items: Vec<String> = store.all().iter().map(task_line).collect();
            let selected = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSelectTaskToEdit.to_string())
                .items(&items)
                .default(0)
                .interact()?;
            store.all()[selected].id.clone()
        }
    };

    let current = store.find(&id).cloned().expect("id was resolved against the store");
    msg_print!(Message::EditingTask(current.text.clone()), true);

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTextEdit.to_string())
        .default(current.text.clone())
        .interact_text()?;

    let priorities = Priority::all();
    let priority_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(priorities.iter().position(|p| *p == current.priority).unwrap_or(0))
        .interact()?;
    let priority = priorities[priority_idx];

    let categories = Category::all();
    let category_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(&categories)
        .default(categories.iter().position(|c| *c == current.category).unwrap_or(0))
        .interact()?;
    let category = categories[category_idx];

    let done = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDone.to_string())
        .default(current.done)
        .interact()?;

    let patch = TaskPatch {
        text: (text.trim() != current.text).then(|| text.clone()),
        done: (done != current.done).then_some(done),
        priority: (priority != current.priority).then_some(priority),
        category: (category != current.category).then_some(category),
    };

    if patch.is_empty() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    match store.update(&id, patch) {
        Ok(()) => {}
        Err(TaskError::EmptyText) => {
            msg_error!(Message::EmptyTaskText);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let updated = store.find(&id).map(|t| t.text.clone()).unwrap_or_default();
    storage.save(&store)?;
    msg_success!(Message::TaskUpdatedWithName(updated));

    Ok(())
}
