//! Task record types: the task itself, its priority and category enums,
//! and the partial shapes used for persistence defaulting and edits.

use chrono::Local;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp format used for the `created` field, minute resolution.
pub const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number of id characters shown in tables and prompts.
const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn all() -> [Priority; 4] {
        [Priority::Low, Priority::Medium, Priority::High, Priority::Urgent]
    }

    /// Parses a stored name, case-insensitively. Unknown names yield `None`
    /// so that callers can coerce to the default.
    pub fn from_name(name: &str) -> Option<Priority> {
        Priority::all().into_iter().find(|p| p.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize, ValueEnum)]
pub enum Category {
    #[default]
    General,
    Home,
    Work,
    Study,
    Shopping,
}

impl Category {
    pub fn all() -> [Category; 5] {
        [Category::General, Category::Home, Category::Work, Category::Study, Category::Shopping]
    }

    /// Parses a stored name, case-insensitively. Unknown names yield `None`
    /// so that callers can coerce to the default.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::all().into_iter().find(|c| c.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Category::General => "General",
            Category::Home => "Home",
            Category::Work => "Work",
            Category::Study => "Study",
            Category::Shopping => "Shopping",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One to-do entry. `id` and `created` are fixed at creation; the store
/// mutates the remaining fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub text: String,
    pub done: bool,
    pub created: String,
    pub priority: Priority,
    pub category: Category,
}

impl Task {
    /// Creates a task with a fresh id and the current timestamp. The caller
    /// is responsible for validating and trimming `text` beforehand.
    pub fn new(text: &str, priority: Priority, category: Category) -> Self {
        Task {
            id: new_id(),
            text: text.to_string(),
            done: false,
            created: now_stamp(),
            priority,
            category,
        }
    }

    /// Reconstructs a task from possibly-partial stored data, defaulting
    /// each missing field independently: fresh id, empty text, not done,
    /// current timestamp, Medium priority, General category. Unknown
    /// priority or category names coerce to the default variant.
    pub fn from_partial(partial: PartialTask) -> Self {
        Task {
            id: partial.id.unwrap_or_else(new_id),
            text: partial.text.unwrap_or_default(),
            done: partial.done.unwrap_or(false),
            created: partial.created.unwrap_or_else(now_stamp),
            priority: partial.priority.as_deref().and_then(Priority::from_name).unwrap_or_default(),
            category: partial.category.as_deref().and_then(Category::from_name).unwrap_or_default(),
        }
    }

    /// Leading slice of the id used for display and prefix lookup.
    pub fn short_id(&self) -> &str {
        self.id.get(..SHORT_ID_LEN).unwrap_or(&self.id)
    }
}

/// Deserialization shape for one element of the tasks file. Every field is
/// optional so that records written by older versions, or edited by hand,
/// still load; `Task::from_partial` fills the gaps.
#[derive(Debug, Default, Deserialize)]
pub struct PartialTask {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// A partial update for `TaskStore::update`. Fields left as `None` keep
/// their current value.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub done: Option<bool>,
    pub priority: Option<Priority>,
    pub category: Option<Category>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.done.is_none() && self.priority.is_none() && self.category.is_none()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now_stamp() -> String {
    Local::now().format(CREATED_FORMAT).to_string()
}
