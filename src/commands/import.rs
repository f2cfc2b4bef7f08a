use super::open_session;
use crate::{
    libs::{config::Config, export::TextFormat, messages::Message, view::View},
    msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// File to read
    input: PathBuf,

    /// Input layout
    #[arg(short, long, value_enum)]
    format: Option<TextFormat>,

    /// Store the imported tasks in the database under new IDs
    #[arg(short, long)]
    save: bool,
}

/// Reads tasks into the session. Lines that do not parse are skipped
/// silently; only an unreadable file fails the command.
///
/// Without `--save` this is a preview of what the file holds. `browse` offers
/// the same import inside a session that stays open.
pub fn cmd(args: ImportArgs) -> Result<()> {
    let format = args.format.unwrap_or(Config::read()?.transfer_format());

    let mut session = open_session()?;
    let before = session.store().len();
    let source = session.import(format, &args.input)?;
    msg_success!(Message::ImportCompleted(source));

    let imported: Vec<_> = session.store().get_all()[before..].iter().collect();
    msg_info!(Message::ImportedTasksCount(imported.len()));
    if imported.is_empty() {
        return Ok(());
    }
    View::tasks(&imported);

    if args.save {
        let saved = session.persist_from(before)?;
        msg_success!(Message::ImportedTasksSaved(saved));
        let stored: Vec<_> = session.store().get_all()[before..].iter().collect();
        View::tasks(&stored);
    } else {
        msg_warning!(Message::ImportNotSaved);
    }
    Ok(())
}
