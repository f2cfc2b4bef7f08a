//! Task import from flat text files.
//!
//! Lines are accepted only when they carry exactly five fields and the first
//! one is an integer id. Anything else is skipped without failing the import
//! and without being counted. Fields are trimmed before use.
//!
//! The completion field is read leniently: `true` in any letter case means
//! completed, and every other value, `yes` or `1` included, means not
//! completed. The line is kept either way.

use super::error::{Result, TaskError};
use super::export::TextFormat;
use super::messages::Message;
use super::task::{Task, TaskStore};
use crate::msg_debug;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

const FIELD_COUNT: usize = 5;

/// Reads task lists written in one [`TextFormat`].
pub struct Importer {
    format: TextFormat,
}

impl Importer {
    pub fn new(format: TextFormat) -> Self {
        Self { format }
    }

    /// Parses one line, returning `None` when it must be skipped.
    pub fn parse_line(&self, line: &str) -> Option<Task> {
        match self.format {
            TextFormat::Pipe => {
                let fields: Vec<&str> = line.split('|').map(str::trim).collect();
                parse_fields(&fields)
            }
            TextFormat::Csv => {
                let mut rdr = self.csv_reader(line.as_bytes());
                let record = rdr.records().next()?.ok()?;
                parse_record(&record)
            }
        }
    }

    /// Reads every acceptable task from `reader`.
    ///
    /// Only an I/O failure is an error. CSV input is read record by record,
    /// so a quoted field may span several lines.
    pub fn read<R: Read>(&self, reader: R) -> io::Result<Vec<Task>> {
        let mut tasks = Vec::new();
        match self.format {
            TextFormat::Pipe => {
                for (index, line) in BufReader::new(reader).split(b'\n').enumerate() {
                    let raw = line?;
                    let raw = raw.strip_suffix(b"\r").unwrap_or(&raw);
                    let parsed = std::str::from_utf8(raw).ok().and_then(|line| self.parse_line(line));
                    match parsed {
                        Some(task) => tasks.push(task),
                        None => msg_debug!(Message::ImportLineSkipped(index + 1)),
                    }
                }
            }
            TextFormat::Csv => {
                let mut rdr = self.csv_reader(reader);
                for (index, record) in rdr.records().enumerate() {
                    let parsed = match record {
                        Ok(record) => parse_record(&record),
                        Err(e) => match e.into_kind() {
                            csv::ErrorKind::Io(source) => return Err(source),
                            _ => None,
                        },
                    };
                    match parsed {
                        Some(task) => tasks.push(task),
                        None => msg_debug!(Message::ImportLineSkipped(index + 1)),
                    }
                }
            }
        }
        Ok(tasks)
    }

    /// Reads `reader` and appends the accepted tasks to `store`.
    ///
    /// The store is left untouched when reading fails part-way.
    pub fn read_into<R: Read>(&self, reader: R, store: &mut TaskStore) -> io::Result<usize> {
        let tasks = self.read(reader)?;
        let count = tasks.len();
        for task in tasks {
            store.add(task);
        }
        Ok(count)
    }

    /// Imports the file at `path` into `store` and returns the file's name.
    pub fn import(&self, path: &Path, store: &mut TaskStore) -> Result<String> {
        let file = File::open(path).map_err(|e| TaskError::read(path, e))?;
        let count = self.read_into(file, store).map_err(|e| TaskError::read(path, e))?;
        tracing::debug!(path = %path.display(), count, format = %self.format, "tasks imported");

        let source = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(source)
    }

    fn csv_reader<R: Read>(&self, reader: R) -> csv::Reader<R> {
        ReaderBuilder::new()
            .delimiter(self.format.delimiter())
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
    }
}

/// Boolean parse that never fails: only `true`, ignoring case and
/// surrounding whitespace, is `true`.
pub fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_record(record: &StringRecord) -> Option<Task> {
    let fields: Vec<&str> = record.iter().collect();
    parse_fields(&fields)
}

fn parse_fields(fields: &[&str]) -> Option<Task> {
    if fields.len() != FIELD_COUNT {
        return None;
    }
    let id = fields[0].trim().parse::<i32>().ok()?;
    Some(Task::with_id(id, fields[1], fields[2], parse_bool(fields[3]), fields[4]))
}
