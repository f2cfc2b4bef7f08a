use super::db::Db;
use super::repository::TaskRepository;
use crate::libs::error::{Result, TaskError};
use crate::libs::task::Task;
use rusqlite::{params, Connection, Row};
use std::path::Path;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    completion_status INTEGER NOT NULL DEFAULT 0,
    category TEXT NOT NULL DEFAULT ''
);";
const INSERT_TASK: &str = "INSERT INTO tasks (name, description, completion_status, category) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, name, description, completion_status, category FROM tasks ORDER BY id";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?1, description = ?2, completion_status = ?3, category = ?4 WHERE id = ?5";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

/// SQLite-backed task table.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the configured database and makes sure the table exists.
    pub fn new() -> anyhow::Result<Tasks> {
        Ok(Self::with_db(Db::new()?)?)
    }

    pub fn open(path: &Path) -> Result<Tasks> {
        Self::with_db(Db::open(path)?)
    }

    pub fn open_in_memory() -> Result<Tasks> {
        Self::with_db(Db::open_in_memory()?)
    }

    fn with_db(db: Db) -> Result<Tasks> {
        db.conn.execute(SCHEMA_TASKS, [])?;
        Ok(Tasks { conn: db.conn })
    }
}

impl TaskRepository for Tasks {
    /// Rolls the insert back when SQLite hands out a rowid that does not fit
    /// a task id.
    fn create(&mut self, task: &Task) -> Result<i32> {
        let tx = self.conn.transaction()?;
        tx.execute(INSERT_TASK, params![task.name, task.description, task.completed, task.category])?;
        let rowid = tx.last_insert_rowid();
        let id = i32::try_from(rowid).map_err(|_| TaskError::IdOutOfRange(rowid))?;
        tx.commit()?;
        tracing::debug!(id, "db: task inserted");
        Ok(id)
    }

    fn read_all(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], row_to_task)?;

        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    fn update(&mut self, task: &Task) -> Result<()> {
        let id = task.id.ok_or(TaskError::MissingId)?;
        let affected = self
            .conn
            .execute(UPDATE_TASK, params![task.name, task.description, task.completed, task.category, id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }

    fn delete(&mut self, id: i32) -> Result<()> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id));
        }
        Ok(())
    }
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        completed: row.get::<_, i64>(3)? == 1,
        category: row.get(4)?,
    })
}
