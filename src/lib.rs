//! # Tudu - Terminal to-do list manager
//!
//! A command-line utility for managing a personal to-do list with
//! categories, priorities, search and JSON persistence.
//!
//! ## Features
//!
//! - **Task Management**: Create, edit, toggle and delete tasks
//! - **Categories and Priorities**: Organize tasks along two fixed axes
//! - **Search and Filters**: Case-insensitive search plus status and
//!   category filters over a non-destructive view
//! - **Bulk Operations**: Multi-select mark-done and delete
//! - **Statistics**: Totals and per-category breakdowns, computed on demand
//! - **JSON Persistence**: The whole list lives in one `tasks.json` file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
