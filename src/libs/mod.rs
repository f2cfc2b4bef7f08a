//! Core library modules for taskman.
//!
//! - **Task list**: the [`task::Task`] record and the session's
//!   [`task::TaskStore`]
//! - **Queries**: search, category grouping, and combined filters in
//!   [`filter`]
//! - **Files**: pipe-delimited and CSV [`export`] and [`import`]
//! - **Session**: [`manager::TaskManager`], which keeps the database and the
//!   in-memory list in step
//! - **Infrastructure**: configuration, data directory, errors, terminal
//!   output
//!
//! ```rust
//! use taskman::libs::filter::{resolve, FilterState};
//! use taskman::libs::task::{Task, TaskStore};
//!
//! let mut store = TaskStore::new();
//! store.add(Task::with_id(1, "Pay rent", "", false, "Home"));
//! let visible = resolve(store.get_all(), &FilterState::default());
//! assert_eq!(visible.len(), 1);
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod export;
pub mod filter;
pub mod import;
pub mod manager;
pub mod messages;
pub mod task;
pub mod view;
