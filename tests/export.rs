#[cfg(test)]
mod tests {
    use std::fs;
    use taskman::libs::error::TaskError;
    use taskman::libs::export::{Exporter, TextFormat};
    use taskman::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ExportTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::with_id(1, "Write report", "Quarterly numbers", false, "Work"),
            Task::with_id(2, "Buy milk", "", true, "Home"),
        ]
    }

    #[test]
    fn test_pipe_render() {
        let text = Exporter::new(TextFormat::Pipe).render(&sample_tasks()).unwrap();

        assert_eq!(
            text,
            "1|Write report|Quarterly numbers|false|Work\n2|Buy milk||true|Home\n"
        );
    }

    #[test]
    fn test_pipe_render_does_not_quote() {
        let tasks = vec![Task::with_id(7, "Say \"hi\", then leave", "", false, "Social")];

        let text = Exporter::new(TextFormat::Pipe).render(&tasks).unwrap();

        assert_eq!(text, "7|Say \"hi\", then leave||false|Social\n");
    }

    #[test]
    fn test_csv_render_has_header() {
        let text = Exporter::new(TextFormat::Csv).render(&sample_tasks()).unwrap();

        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("ID,Name,Description,CompletionStatus,Category"));
        assert_eq!(lines.next(), Some("1,Write report,Quarterly numbers,false,Work"));
        assert_eq!(lines.next(), Some("2,Buy milk,,true,Home"));
        assert_eq!(lines.next(), None);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_csv_render_quotes_special_fields() {
        let tasks = vec![Task::with_id(3, "Plan, then build", "He said \"go\"", false, "Work")];

        let text = Exporter::new(TextFormat::Csv).render(&tasks).unwrap();

        assert!(text.ends_with("3,\"Plan, then build\",\"He said \"\"go\"\"\",false,Work\n"));
    }

    #[test]
    fn test_unsaved_task_has_empty_id() {
        let tasks = vec![Task::new("Draft", "", "")];

        let text = Exporter::new(TextFormat::Pipe).render(&tasks).unwrap();

        assert_eq!(text, "|Draft||false|\n");
    }

    #[test]
    fn test_empty_list_csv_is_header_only() {
        let text = Exporter::new(TextFormat::Csv).render(&[]).unwrap();
        assert_eq!(text, "ID,Name,Description,CompletionStatus,Category\n");

        let text = Exporter::new(TextFormat::Pipe).render(&[]).unwrap();
        assert!(text.is_empty());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_writes_file_and_reports_size(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.txt");
        let exporter = Exporter::new(TextFormat::Pipe);

        let summary = exporter.export(&sample_tasks(), &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, exporter.render(&sample_tasks()).unwrap());
        assert_eq!(summary.size, written.len() as u64);
        assert_eq!(summary.path, path);
        assert!(summary.modified.is_some());

        let report = summary.to_string();
        assert!(report.contains(&format!("File size: {} bytes", written.len())));
        assert!(report.contains("Last modified date: "));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_overwrites_existing_file(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("tasks.csv");
        fs::write(&path, "stale content that is much longer than the new export\n".repeat(10)).unwrap();

        let tasks = vec![Task::with_id(1, "A", "", false, "")];
        Exporter::new(TextFormat::Csv).export(&tasks, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "ID,Name,Description,CompletionStatus,Category\n1,A,,false,\n");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_to_missing_directory_fails(ctx: &mut ExportTestContext) {
        let path = ctx.temp_dir.path().join("missing").join("tasks.txt");

        let result = Exporter::new(TextFormat::Pipe).export(&sample_tasks(), &path);

        assert!(matches!(result, Err(TaskError::Write { .. })));
    }
}
