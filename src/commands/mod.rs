pub mod add;
pub mod clear;
pub mod delete;
pub mod done;
pub mod edit;
pub mod list;
pub mod stats;
pub mod toggle;

use crate::libs::messages::Message;
use crate::libs::storage::Storage;
use crate::libs::store::TaskStore;
use crate::libs::task::Task;
use crate::msg_warning;
use clap::{Parser, Subcommand};
use std::collections::HashSet;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks with optional filters")]
    List(list::ListArgs),
    #[command(about = "Edit a task interactively")]
    Edit(edit::EditArgs),
    #[command(about = "Toggle completion of a task")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Mark tasks as done")]
    Done(done::DoneArgs),
    #[command(about = "Delete tasks")]
    Delete(delete::DeleteArgs),
    #[command(about = "Delete all tasks")]
    Clear,
    #[command(about = "Show task statistics")]
    Stats(stats::StatsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Clear => clear::cmd(),
            Commands::Stats(args) => stats::cmd(args),
        }
    }
}

/// Loads the store from disk. Load failures are reported once and degrade
/// to an empty store so no command is blocked by a broken tasks file.
pub(crate) fn load_store(storage: &Storage) -> TaskStore {
    match storage.load() {
        Ok(tasks) => TaskStore::from_tasks(tasks),
        Err(e) => {
            msg_warning!(Message::TasksLoadFailed(e.to_string()));
            TaskStore::new()
        }
    }
}

/// Resolves a user-supplied id, accepting the full id or a unique prefix.
/// The store itself only ever sees exact ids.
pub(crate) fn resolve_id(store: &TaskStore, input: &str) -> Result<String, Message> {
    if let Some(task) = store.find(input) {
        return Ok(task.id.clone());
    }
    let matches: Vec<&Task> = store.all().iter().filter(|t| t.id.starts_with(input)).collect();
    match matches.len() {
        1 => Ok(matches[0].id.clone()),
        0 => Err(Message::TaskNotFoundWithId(input.to_string())),
        _ => Err(Message::AmbiguousTaskId(input.to_string())),
    }
}

/// Resolves a batch of id inputs, splitting them into the matched full ids
/// and the inputs that matched nothing (or nothing unambiguous).
pub(crate) fn resolve_ids(store: &TaskStore, inputs: &[String]) -> (HashSet<String>, Vec<String>) {
    let mut matched = HashSet::new();
    let mut missed = Vec::new();
    for input in inputs {
        match resolve_id(store, input) {
            Ok(id) => {
                matched.insert(id);
            }
            Err(_) => missed.push(input.clone()),
        }
    }
    (matched, missed)
}

/// One-line task rendering for selection prompts.
pub(crate) fn task_line(task: &Task) -> String {
    let marker = if task.done { "✔ " } else { "" };
    format!("{}{} [{}]", marker, task.text, task.short_id())
}
