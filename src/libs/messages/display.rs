//! Display implementation for taskman messages.
//!
//! All user-facing wording lives in this one match so commands never format
//! their own strings.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id, name) => format!("Task '{}' created with ID {}", name, id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(id) => format!("Task {} marked as completed", id),
            Message::TaskReopened(id) => format!("Task {} marked as not completed", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskNameRequired => "Task name must not be empty.".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({}):", count),
            Message::TasksNotFound => "No tasks match the current filters.".to_string(),
            Message::EditingTask(name) => format!("Editing task: {}", name),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::DeletionCancelled => "Deletion cancelled.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskName => "Name".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptTaskCompleted => "Completed?".to_string(),

            // === CATEGORY MESSAGES ===
            Message::CategoriesHeader => "Categories:".to_string(),
            Message::NoCategories => "No categories yet. Add a task to create one.".to_string(),

            // === FILTER / BROWSE MESSAGES ===
            Message::FilterStatus(status) => format!("Filter: {}", status),
            Message::BrowseMenuPrompt => "Choose an action".to_string(),
            Message::BrowseSearch => "Search".to_string(),
            Message::BrowseSearchField => "Change search field".to_string(),
            Message::BrowseCategory => "Filter by category".to_string(),
            Message::BrowseToggleCompleted => "Toggle completed tasks".to_string(),
            Message::BrowseImport => "Import tasks from file".to_string(),
            Message::BrowseReset => "Clear all filters".to_string(),
            Message::BrowseQuit => "Quit".to_string(),
            Message::PromptSearchQuery => "Search text (empty to clear)".to_string(),
            Message::SelectSearchField => "Search by".to_string(),
            Message::SelectCategory => "Category".to_string(),

            // === EXPORT / IMPORT MESSAGES ===
            Message::ExportCompleted(report) => format!("Tasks saved to file: {}", report),
            Message::ImportCompleted(source) => format!("Tasks imported from file: {}", source),
            Message::ImportedTasksCount(count) => format!("{} task(s) read from file.", count),
            Message::ImportedTasksSaved(count) => format!("{} imported task(s) saved to the database.", count),
            Message::ImportNotSaved => "Imported tasks were not stored in the database; they only last for this session.".to_string(),
            Message::ImportLineSkipped(line) => format!("Skipping malformed line {}", line),
            Message::PromptImportPath => "File to import".to_string(),
            Message::SelectFileFormat => "File format".to_string(),
            Message::PromptSaveImported => "Store the imported tasks in the database?".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseOpened(path) => format!("Database opened at {}", path),
            Message::TasksLoaded(count) => format!("Loaded {} task(s) from the database", count),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database".to_string(),
            Message::ConfigModuleTransfer => "Import / export".to_string(),
            Message::ConfigModuleView => "List view".to_string(),
            Message::SelectConfigModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default location)".to_string(),
            Message::PromptDefaultFormat => "Default file format".to_string(),
            Message::PromptSearchField => "Default search field".to_string(),
            Message::PromptShowCompleted => "Show completed tasks by default?".to_string(),
        };
        write!(f, "{}", text)
    }
}
