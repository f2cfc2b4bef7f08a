//! Query and filter engine over a snapshot of tasks.
//!
//! Nothing here mutates or copies tasks: every function borrows its input
//! and returns references into it, in input order.
//!
//! Filters are applied by [`resolve`] in a fixed order:
//!
//! 1. text search on name or id
//! 2. category selection over the search result
//! 3. removal of completed tasks when they are hidden
//!
//! ```rust
//! use taskman::libs::filter::{resolve, FilterState};
//! use taskman::libs::task::Task;
//!
//! let tasks = vec![
//!     Task::with_id(1, "A", "d1", false, "Work"),
//!     Task::with_id(2, "B", "d2", true, "Home"),
//! ];
//! let state = FilterState { query: "a".into(), ..FilterState::default() };
//! let visible = resolve(&tasks, &state);
//! assert_eq!(visible, vec![&tasks[0]]);
//! ```

use super::task::Task;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category selector value meaning "no category restriction".
pub const SHOW_ALL: &str = "-- Show All --";

/// Which task field a search query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum SearchField {
    /// Case-insensitive substring of the task name
    #[default]
    Name,
    /// Exact task id
    #[serde(rename = "ID")]
    Id,
}

impl SearchField {
    pub fn label(&self) -> &'static str {
        match self {
            SearchField::Name => "Name",
            SearchField::Id => "ID",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SearchField {
    type Err = std::convert::Infallible;

    /// `"Name"` selects name search; every other label is an id search.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("name") {
            Ok(SearchField::Name)
        } else {
            Ok(SearchField::Id)
        }
    }
}

/// Category restriction applied after searching.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl From<&str> for CategoryFilter {
    /// The [`SHOW_ALL`] sentinel maps to `All`; any other text, the empty
    /// string included, names a category.
    fn from(value: &str) -> Self {
        if value == SHOW_ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }
}

impl From<Option<String>> for CategoryFilter {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(category) => CategoryFilter::from(category.as_str()),
            None => CategoryFilter::All,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(SHOW_ALL),
            CategoryFilter::Only(category) => write!(f, "'{}'", category),
        }
    }
}

/// Everything a presentation layer needs to remember between refreshes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub field: SearchField,
    pub category: CategoryFilter,
    pub include_completed: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            field: SearchField::Name,
            category: CategoryFilter::All,
            include_completed: true,
        }
    }
}

impl FilterState {
    pub fn is_identity(&self) -> bool {
        self.query.trim().is_empty() && self.category == CategoryFilter::All && self.include_completed
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let query = self.query.trim();
        if query.is_empty() {
            write!(f, "search: none")?;
        } else {
            write!(f, "search: {} contains '{}'", self.field, query)?;
        }
        write!(f, ", category: {}", self.category)?;
        write!(f, ", completed: {}", if self.include_completed { "shown" } else { "hidden" })
    }
}

/// Groups tasks by category.
///
/// Categories appear in the order they are first met; each group keeps the
/// input order. Every task lands in exactly one group.
pub fn categorize<'a, I>(tasks: I) -> IndexMap<&'a str, Vec<&'a Task>>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut groups: IndexMap<&'a str, Vec<&'a Task>> = IndexMap::new();
    for task in tasks {
        groups.entry(task.category.as_str()).or_default().push(task);
    }
    groups
}

/// Matches `query` against the chosen field.
///
/// A blank query keeps every task. An id query that is not an integer
/// matches nothing.
pub fn search<'a, I>(tasks: I, query: &str, field: SearchField) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let query = query.trim();
    if query.is_empty() {
        return tasks.into_iter().collect();
    }

    match field {
        SearchField::Name => {
            let needle = query.to_lowercase();
            tasks.into_iter().filter(|t| t.name.to_lowercase().contains(&needle)).collect()
        }
        SearchField::Id => match query.parse::<i32>() {
            Ok(id) => tasks.into_iter().filter(|t| t.id == Some(id)).collect(),
            Err(_) => Vec::new(),
        },
    }
}

/// The exact list a presentation layer should render for `state`.
///
/// A category that matches nothing yields an empty list.
pub fn resolve<'a>(tasks: &'a [Task], state: &FilterState) -> Vec<&'a Task> {
    let found = search(tasks, &state.query, state.field);

    let selected = match &state.category {
        CategoryFilter::All => found,
        CategoryFilter::Only(category) => categorize(found).swap_remove(category.as_str()).unwrap_or_default(),
    };

    if state.include_completed {
        selected
    } else {
        selected.into_iter().filter(|t| !t.completed).collect()
    }
}

/// Entries for a category selector: the [`SHOW_ALL`] sentinel first, then
/// every category in encounter order.
pub fn category_names(tasks: &[Task]) -> Vec<String> {
    std::iter::once(SHOW_ALL.to_string())
        .chain(categorize(tasks).into_keys().map(str::to_string))
        .collect()
}
