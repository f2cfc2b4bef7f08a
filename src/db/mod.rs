//! Persistence layer for taskman.
//!
//! A single SQLite table holds the tasks. Everything outside this module
//! reaches it through the [`repository::TaskRepository`] trait, so the
//! session logic can be exercised against any other implementation.
//!
//! ```rust,no_run
//! use taskman::db::repository::TaskRepository;
//! use taskman::db::tasks::Tasks;
//! use taskman::libs::task::Task;
//!
//! let mut tasks = Tasks::new()?;
//! let id = tasks.create(&Task::new("Review code", "Check the open PR", "Work"))?;
//! tasks.delete(id)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
///
/// Resolves the database location from configuration or the platform data
/// directory and opens the SQLite connection.
pub mod db;

/// The four-operation contract the session logic relies on.
pub mod repository;

/// SQLite implementation of the task repository.
pub mod tasks;
