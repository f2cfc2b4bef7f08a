pub mod browse;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod task;

use crate::db::tasks::Tasks;
use crate::libs::manager::TaskManager;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Create a task")]
    Add(task::AddArgs),
    #[command(about = "Edit a task")]
    Edit(task::EditArgs),
    #[command(about = "Mark a task as completed")]
    Done(task::IdArgs),
    #[command(about = "Mark a task as not completed")]
    Undone(task::IdArgs),
    #[command(about = "Delete a task")]
    Delete(task::DeleteArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Show tasks grouped by category")]
    Categories,
    #[command(about = "Save tasks to a pipe-delimited or CSV file")]
    Export(export::ExportArgs),
    #[command(about = "Load tasks from a pipe-delimited or CSV file")]
    Import(import::ImportArgs),
    #[command(about = "Browse tasks interactively")]
    Browse,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => task::add(args),
            Commands::Edit(args) => task::edit(args),
            Commands::Done(args) => task::set_completed(args, true),
            Commands::Undone(args) => task::set_completed(args, false),
            Commands::Delete(args) => task::delete(args),
            Commands::List(args) => list::cmd(args),
            Commands::Categories => list::categories(),
            Commands::Export(args) => export::cmd(args),
            Commands::Import(args) => import::cmd(args),
            Commands::Browse => browse::cmd(),
        }
    }
}

/// Opens the configured database and loads every task into a session.
pub(crate) fn open_session() -> Result<TaskManager<Tasks>> {
    Ok(TaskManager::load(Tasks::new()?)?)
}
