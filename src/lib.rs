//! # Taskman
//!
//! A single-user task tracker for the command line.
//!
//! Tasks have a name, a description, a completion flag and a free-form
//! category. They live in a local SQLite database and are loaded into an
//! in-memory [`TaskStore`](libs::task::TaskStore) for every session.
//!
//! ## Features
//!
//! - **Task management**: create, edit, complete and delete tasks
//! - **Filtering**: search by name or id, select a category, hide completed
//! - **Categories**: tasks grouped by category in first-seen order
//! - **Import/Export**: pipe-delimited and CSV text files
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskman::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
