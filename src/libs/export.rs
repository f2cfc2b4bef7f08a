//! Task export to flat text files.
//!
//! Two layouts share one field order, `id, name, description, completed,
//! category`, and one record per line:
//!
//! - **Pipe**: `1|Write report|Quarterly numbers|false|Work`, written as-is
//!   with no quoting. A `|` inside a field therefore produces a line the
//!   importer rejects.
//! - **CSV**: a header row `ID,Name,Description,CompletionStatus,Category`
//!   followed by comma-separated records. Fields holding a comma, a double
//!   quote, or a line break are wrapped in double quotes with inner quotes
//!   doubled.
//!
//! Every record, the last one included, ends with `\n`.
//!
//! ```rust,no_run
//! use taskman::libs::export::{Exporter, TextFormat};
//! use taskman::libs::task::Task;
//! use std::path::Path;
//!
//! let tasks = vec![Task::with_id(1, "Plan, then build", "", false, "Work")];
//! let summary = Exporter::new(TextFormat::Csv).export(&tasks, Path::new("tasks.csv"))?;
//! println!("{}", summary);
//! # Ok::<(), taskman::libs::error::TaskError>(())
//! ```

use super::error::{Result, TaskError};
use super::task::Task;
use chrono::{DateTime, Local};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Header row written before CSV records.
pub const CSV_HEADER: [&str; 5] = ["ID", "Name", "Description", "CompletionStatus", "Category"];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Flat text layout used for both export and import.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TextFormat {
    /// `|`-separated fields, no header, no quoting
    #[default]
    Pipe,
    /// Comma-separated fields with a header row and standard CSV quoting
    Csv,
}

impl TextFormat {
    pub fn delimiter(&self) -> u8 {
        match self {
            TextFormat::Pipe => b'|',
            TextFormat::Csv => b',',
        }
    }

    pub fn has_header(&self) -> bool {
        matches!(self, TextFormat::Csv)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            TextFormat::Pipe => "txt",
            TextFormat::Csv => "csv",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextFormat::Pipe => f.write_str("pipe-delimited"),
            TextFormat::Csv => f.write_str("csv"),
        }
    }
}

/// File properties reported after a successful export.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub size: u64,
    /// Not every filesystem records a creation time.
    pub created: Option<DateTime<Local>>,
    pub modified: Option<DateTime<Local>>,
}

impl ExportSummary {
    fn from_path(path: &Path) -> Result<Self> {
        let metadata = fs::metadata(path).map_err(|e| TaskError::write(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            size: metadata.len(),
            created: metadata.created().ok().map(DateTime::<Local>::from),
            modified: metadata.modified().ok().map(DateTime::<Local>::from),
        })
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stamp = |value: &Option<DateTime<Local>>| match value {
            Some(time) => time.format(DATE_FORMAT).to_string(),
            None => "unavailable".to_string(),
        };
        writeln!(f, "{}", self.path.display())?;
        writeln!(f, "File size: {} bytes", self.size)?;
        writeln!(f, "Creation date: {}", stamp(&self.created))?;
        write!(f, "Last modified date: {}", stamp(&self.modified))
    }
}

/// Writes task lists in one [`TextFormat`].
pub struct Exporter {
    format: TextFormat,
}

impl Exporter {
    pub fn new(format: TextFormat) -> Self {
        Self { format }
    }

    /// Renders `tasks` to text without touching the filesystem.
    pub fn render(&self, tasks: &[Task]) -> Result<String> {
        let quote_style = match self.format {
            TextFormat::Pipe => QuoteStyle::Never,
            TextFormat::Csv => QuoteStyle::Necessary,
        };
        let mut buf = Vec::new();
        let mut wtr = WriterBuilder::new()
            .delimiter(self.format.delimiter())
            .quote_style(quote_style)
            .terminator(Terminator::Any(b'\n'))
            .has_headers(false)
            .from_writer(&mut buf);

        if self.format.has_header() {
            wtr.write_record(CSV_HEADER)?;
        }
        for task in tasks {
            wtr.write_record(&record(task))?;
        }

        wtr.flush().map_err(csv::Error::from)?;
        drop(wtr);
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Writes `tasks` to `path`, replacing any existing file, and reports
    /// the resulting file's properties.
    pub fn export(&self, tasks: &[Task], path: &Path) -> Result<ExportSummary> {
        let text = self.render(tasks)?;
        fs::write(path, text).map_err(|e| TaskError::write(path, e))?;
        tracing::debug!(path = %path.display(), count = tasks.len(), format = %self.format, "tasks exported");
        ExportSummary::from_path(path)
    }
}

/// The five fields of one task in export order. A task that was never
/// persisted has an empty id field.
fn record(task: &Task) -> [String; 5] {
    [
        task.id.map(|id| id.to_string()).unwrap_or_default(),
        task.name.clone(),
        task.description.clone(),
        task.completed.to_string(),
        task.category.clone(),
    ]
}
