//! The task record and the session's in-memory task list.

use serde::{Deserialize, Serialize};

/// A single tracked task.
///
/// `id` stays `None` until the database has stored the task and handed an id
/// back; after that it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub completed: bool,
    pub category: String,
}

impl Task {
    /// A freshly entered task: no id yet, not completed.
    pub fn new(name: &str, description: &str, category: &str) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            completed: false,
            category: category.to_string(),
        }
    }

    /// A task that already has an id, as loaded from storage or a file.
    pub fn with_id(id: i32, name: &str, description: &str, completed: bool, category: &str) -> Self {
        Task {
            id: Some(id),
            name: name.to_string(),
            description: description.to_string(),
            completed,
            category: category.to_string(),
        }
    }
}

/// The authoritative list of tasks for the running session.
///
/// The store never talks to the database. Callers persist first and only
/// then apply the matching mutation here, so none of these operations can
/// fail.
///
/// ```rust
/// use taskman::libs::task::{Task, TaskStore};
///
/// let mut store = TaskStore::new();
/// store.add(Task::with_id(1, "Write report", "", false, "Work"));
/// store.update_by_id(Task::with_id(1, "Write report", "", true, "Work"));
/// assert!(store.get_all()[0].completed);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Appends a task. Duplicates are not checked.
    pub fn add(&mut self, task: Task) {
        tracing::debug!(id = ?task.id, name = %task.name, "store: add");
        self.tasks.push(task);
    }

    /// Borrowed, read-only view of every task in insertion order.
    pub fn get_all(&self) -> &[Task] {
        &self.tasks
    }

    /// Replaces the first task whose id equals `task.id`.
    ///
    /// An unmatched id leaves the list untouched. The return value only
    /// reports whether a replacement happened.
    pub fn update_by_id(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                tracing::debug!(id = ?task.id, "store: update");
                *slot = task;
                true
            }
            None => {
                tracing::debug!(id = ?task.id, "store: update matched nothing");
                false
            }
        }
    }

    /// Removes every task with this id and returns how many went.
    pub fn remove_by_id(&mut self, id: i32) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != Some(id));
        let removed = before - self.tasks.len();
        tracing::debug!(id, removed, "store: remove");
        removed
    }

    /// Tasks satisfying `predicate`, in store order.
    pub fn filter<P>(&self, predicate: P) -> Vec<Task>
    where
        P: Fn(&Task) -> bool,
    {
        self.tasks.iter().filter(|t| predicate(t)).cloned().collect()
    }

    pub fn get(&self, id: i32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == Some(id))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl From<Vec<Task>> for TaskStore {
    fn from(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }
}
