#[cfg(test)]
mod tests {
    use taskman::db::repository::TaskRepository;
    use taskman::db::tasks::Tasks;
    use taskman::libs::error::TaskError;
    use taskman::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_task_create_assigns_ids() {
        let mut tasks = Tasks::open_in_memory().unwrap();

        let first = tasks.create(&Task::new("Write report", "Quarterly", "Work")).unwrap();
        let second = tasks.create(&Task::new("Buy milk", "", "Home")).unwrap();

        assert!(second > first);
        let stored = tasks.read_all().unwrap();
        assert_eq!(
            stored,
            vec![
                Task::with_id(first, "Write report", "Quarterly", false, "Work"),
                Task::with_id(second, "Buy milk", "", false, "Home"),
            ]
        );
    }

    #[test]
    fn test_task_update() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        let id = tasks.create(&Task::new("Original name", "Original description", "")).unwrap();

        let updated = Task::with_id(id, "Updated name", "Updated description", true, "Done");
        tasks.update(&updated).unwrap();

        let stored = tasks.read_all().unwrap();
        assert_eq!(stored, vec![updated]);
    }

    #[test]
    fn test_task_update_unknown_id() {
        let mut tasks = Tasks::open_in_memory().unwrap();

        let result = tasks.update(&Task::with_id(77, "Ghost", "", false, ""));

        assert!(matches!(result, Err(TaskError::NotFound(77))));
    }

    #[test]
    fn test_task_update_without_id() {
        let mut tasks = Tasks::open_in_memory().unwrap();

        let result = tasks.update(&Task::new("Never saved", "", ""));

        assert!(matches!(result, Err(TaskError::MissingId)));
    }

    #[test]
    fn test_task_delete() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        let id = tasks.create(&Task::new("Test task", "Comment", "")).unwrap();

        tasks.delete(id).unwrap();
        assert!(tasks.read_all().unwrap().is_empty());

        // A second delete finds nothing
        assert!(matches!(tasks.delete(id), Err(TaskError::NotFound(_))));
    }

    #[test]
    fn test_create_rejects_rowid_beyond_i32() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        tasks
            .conn
            .execute("INSERT INTO tasks (id, name) VALUES (?1, 'Last')", [i64::from(i32::MAX)])
            .unwrap();

        let result = tasks.create(&Task::new("Overflow", "", ""));

        assert!(matches!(result, Err(TaskError::IdOutOfRange(id)) if id == i64::from(i32::MAX) + 1));
        // The insert was rolled back
        let stored = tasks.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, Some(i32::MAX));
    }

    #[test]
    fn test_completed_flag_round_trip() {
        let mut tasks = Tasks::open_in_memory().unwrap();
        let mut task = Task::new("Toggle me", "", "");
        task.completed = true;

        let id = tasks.create(&task).unwrap();

        let stored = tasks.read_all().unwrap();
        assert_eq!(stored[0].id, Some(id));
        assert!(stored[0].completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_tasks_persist_across_connections(ctx: &mut TaskTestContext) {
        let path = ctx.temp_dir.path().join("tasks.db");

        {
            let mut tasks = Tasks::open(&path).unwrap();
            tasks.create(&Task::new("Survives", "", "Work")).unwrap();
        }

        let mut reopened = Tasks::open(&path).unwrap();
        let stored = reopened.read_all().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].name, "Survives");
    }
}
