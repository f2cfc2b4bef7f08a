//! Saves the task list to a flat text file.
//!
//! - **pipe**: `id|name|description|completed|category`, one task per line
//! - **csv**: header row plus quoted CSV records, readable by spreadsheets
//!
//! Without `--format` the configured default is used. The whole task list is
//! written, regardless of any filters used with `list`.

use super::open_session;
use crate::{
    libs::{config::Config, export::TextFormat, messages::Message},
    msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file. Defaults to `taskman_export_<timestamp>.<ext>` in
    /// the current directory.
    output: Option<PathBuf>,

    /// Output layout
    #[arg(short, long, value_enum)]
    format: Option<TextFormat>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let format = args.format.unwrap_or(Config::read()?.transfer_format());
    let output = args.output.unwrap_or_else(|| default_output(format));

    let session = open_session()?;
    let summary = session.export(format, &output)?;

    msg_success!(Message::ExportCompleted(summary.to_string()));
    Ok(())
}

fn default_output(format: TextFormat) -> PathBuf {
    let stamp = Local::now().format("%Y%m%d_%H%M%S");
    PathBuf::from(format!("taskman_export_{}.{}", stamp, format.extension()))
}
