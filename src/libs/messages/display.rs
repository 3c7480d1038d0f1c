//! Display implementation for tudu application messages.
//!
//! Single source of truth for all user-facing text. Message variants carry
//! their dynamic parts as typed payloads; this impl turns them into the
//! strings the `msg_*!` macros print.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(text) => format!("Task '{}' created", text),
            Message::TaskUpdatedWithName(text) => format!("Task '{}' updated", text),
            Message::TaskMarkedDone(text) => format!("Task '{}' marked as done", text),
            Message::TaskReopened(text) => format!("Task '{}' reopened", text),
            Message::TasksMarkedDone(count) => format!("{} task(s) marked as done", count),
            Message::TasksDeletedCount(count) => format!("{} task(s) deleted", count),
            Message::AllTasksCleared(count) => format!("All tasks cleared ({} removed)", count),
            Message::TaskNotFoundWithId(id) => format!("Task not found: {}", id),
            Message::AmbiguousTaskId(id) => format!("Task id '{}' matches more than one task, use a longer prefix", id),
            Message::TasksNotFoundForIds(ids) => format!("No tasks found for ids: {}", ids.join(", ")),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::NoPendingTasks => "No pending tasks".to_string(),
            Message::NoTasksSelected => "No tasks selected".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::EmptyTaskText => "Task text cannot be empty".to_string(),
            Message::EditingTask(text) => format!("Editing task: {}", text),
            Message::TasksHeader => "📝 Tasks".to_string(),

            // === PROMPT MESSAGES ===
            Message::PromptTaskTextEdit => "Task text".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskDone => "Completed?".to_string(),
            Message::PromptSelectTaskToEdit => "Select a task to edit".to_string(),
            Message::PromptSelectTasksDone => "Select tasks to mark as done".to_string(),
            Message::PromptSelectTasksDelete => "Select tasks to delete".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} task(s)?", count),
            Message::ConfirmClearAll(count) => format!("Delete all {} task(s)?", count),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === PERSISTENCE MESSAGES ===
            Message::TasksLoadFailed(error) => format!("Failed to load tasks file, starting with an empty list: {}", error),

            // === STATS MESSAGES ===
            Message::StatsHeader => "📊 Task statistics".to_string(),
            Message::StatsSummary { total, completed, pending } => {
                format!("{} task(s): {} completed, {} pending", total, completed, pending)
            }
        };
        write!(f, "{}", message)
    }
}
