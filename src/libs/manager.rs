//! Session controller tying persistence, the in-memory store, and the
//! filter engine together.
//!
//! Every mutation follows the same order: run the repository operation, and
//! only if it succeeds apply the matching [`TaskStore`] change. A failed
//! repository call leaves the session exactly as it was and hands the error
//! back to the caller to display.

use super::error::Result;
use super::export::{ExportSummary, Exporter, TextFormat};
use super::filter::{category_names, resolve, FilterState};
use super::import::Importer;
use super::messages::Message;
use super::task::{Task, TaskStore};
use crate::db::repository::TaskRepository;
use crate::msg_debug;
use std::path::Path;

pub struct TaskManager<R: TaskRepository> {
    repo: R,
    store: TaskStore,
}

impl<R: TaskRepository> TaskManager<R> {
    /// Starts a session with every stored task loaded.
    pub fn load(mut repo: R) -> Result<Self> {
        let store = TaskStore::from(repo.read_all()?);
        msg_debug!(Message::TasksLoaded(store.len()));
        Ok(Self { repo, store })
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn repository(&mut self) -> &mut R {
        &mut self.repo
    }

    /// Persists a new task, then adds it to the session with its new id.
    pub fn create(&mut self, name: &str, description: &str, category: &str) -> Result<Task> {
        let mut task = Task::new(name, description, category);
        let id = self.repo.create(&task)?;
        task.id = Some(id);
        self.store.add(task.clone());
        Ok(task)
    }

    /// Persists `task` over the stored task with the same id, then replaces
    /// it in the session.
    pub fn update(&mut self, task: Task) -> Result<()> {
        self.repo.update(&task)?;
        self.store.update_by_id(task);
        Ok(())
    }

    /// Replaces task `id` with a copy whose completion flag is `completed`.
    ///
    /// Returns `Ok(None)` when the session holds no such task.
    pub fn set_completed(&mut self, id: i32, completed: bool) -> Result<Option<Task>> {
        let Some(current) = self.store.get(id) else {
            return Ok(None);
        };
        let task = Task {
            completed,
            ..current.clone()
        };
        self.update(task.clone())?;
        Ok(Some(task))
    }

    pub fn delete(&mut self, id: i32) -> Result<()> {
        self.repo.delete(id)?;
        self.store.remove_by_id(id);
        Ok(())
    }

    /// The tasks to display for `state`.
    pub fn visible(&self, state: &FilterState) -> Vec<&Task> {
        resolve(self.store.get_all(), state)
    }

    /// Category selector entries, "show all" sentinel first.
    pub fn categories(&self) -> Vec<String> {
        category_names(self.store.get_all())
    }

    pub fn export(&self, format: TextFormat, path: &Path) -> Result<ExportSummary> {
        Exporter::new(format).export(self.store.get_all(), path)
    }

    /// Appends the tasks read from `path` to the session only; nothing is
    /// written to the repository. Returns the source file name.
    pub fn import(&mut self, format: TextFormat, path: &Path) -> Result<String> {
        Importer::new(format).import(path, &mut self.store)
    }

    /// Stores every session task from position `from` onward as a new
    /// repository entry and swaps in the ids the repository assigned.
    ///
    /// Used after [`import`](Self::import) to keep imported tasks beyond the
    /// session. Stops at the first failure; tasks saved before it keep their
    /// new ids.
    pub fn persist_from(&mut self, from: usize) -> Result<usize> {
        let pending: Vec<Task> = self.store.get_all().iter().skip(from).cloned().collect();
        let keep: Vec<Task> = self.store.get_all().iter().take(from).cloned().collect();

        let mut saved = Vec::with_capacity(pending.len());
        let mut result = Ok(());
        for task in &pending {
            match self.repo.create(task) {
                Ok(id) => saved.push(Task {
                    id: Some(id),
                    ..task.clone()
                }),
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        let count = saved.len();
        let unsaved = pending.into_iter().skip(count);
        self.store = TaskStore::from(keep.into_iter().chain(saved).chain(unsaved).collect::<Vec<_>>());
        result.map(|_| count)
    }
}
