use crate::libs::error::Result;
use crate::libs::task::Task;

/// Durable storage behind the session's task list.
///
/// Callers run one of these first and apply the matching
/// [`TaskStore`](crate::libs::task::TaskStore) mutation only when it
/// returns `Ok`.
pub trait TaskRepository {
    /// Stores a new task and returns the id assigned to it.
    fn create(&mut self, task: &Task) -> Result<i32>;

    fn read_all(&mut self) -> Result<Vec<Task>>;

    /// Overwrites every field of the stored task with the same id.
    fn update(&mut self, task: &Task) -> Result<()>;

    fn delete(&mut self, id: i32) -> Result<()>;
}
