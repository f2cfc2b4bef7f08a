#[cfg(test)]
mod tests {
    use taskman::libs::messages::Message;
    use taskman::msg_bail_anyhow;

    fn require_name(name: &str) -> anyhow::Result<()> {
        if name.trim().is_empty() {
            msg_bail_anyhow!(Message::TaskNameRequired);
        }
        Ok(())
    }

    #[test]
    fn test_bail_message_has_no_status_prefix() {
        let err = require_name("  ").unwrap_err();

        assert_eq!(err.to_string(), Message::TaskNameRequired.to_string());
        assert!(!err.to_string().starts_with('❌'));
        assert!(require_name("Write report").is_ok());
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::TaskCreated(3, "Buy milk".to_string()).to_string(), "Task 'Buy milk' created with ID 3");
        assert_eq!(Message::TaskNotFoundWithId(9).to_string(), "Task with ID 9 not found.");
        assert_eq!(Message::ImportedTasksCount(2).to_string(), "2 task(s) read from file.");
    }
}
