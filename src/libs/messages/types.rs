/// Every piece of user-facing text the application prints.
///
/// Variants carry the values they interpolate; the wording itself lives in
/// the `Display` implementation in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i32, String),
    TaskUpdated(i32),
    TaskDeleted(i32),
    TaskCompleted(i32),
    TaskReopened(i32),
    TaskNotFoundWithId(i32),
    TaskNameRequired,
    TasksHeader(usize),
    TasksNotFound,
    EditingTask(String),
    NoChangesDetected,
    ConfirmDeleteTask(String),
    DeletionCancelled,

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskDescription,
    PromptTaskCategory,
    PromptTaskCompleted,

    // === CATEGORY MESSAGES ===
    CategoriesHeader,
    NoCategories,

    // === FILTER / BROWSE MESSAGES ===
    FilterStatus(String),
    BrowseMenuPrompt,
    BrowseSearch,
    BrowseSearchField,
    BrowseCategory,
    BrowseToggleCompleted,
    BrowseImport,
    BrowseReset,
    BrowseQuit,
    PromptSearchQuery,
    SelectSearchField,
    SelectCategory,

    // === EXPORT / IMPORT MESSAGES ===
    ExportCompleted(String),
    ImportCompleted(String),
    ImportedTasksCount(usize),
    ImportedTasksSaved(usize),
    ImportNotSaved,
    ImportLineSkipped(usize),
    PromptImportPath,
    SelectFileFormat,
    PromptSaveImported,

    // === DATABASE MESSAGES ===
    DatabaseOpened(String),
    TasksLoaded(usize),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,
    ConfigModuleTransfer,
    ConfigModuleView,
    SelectConfigModules,
    PromptDatabasePath,
    PromptDefaultFormat,
    PromptSearchField,
    PromptShowCompleted,
}
