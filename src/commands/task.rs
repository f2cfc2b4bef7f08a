use super::open_session;
use crate::{
    libs::{messages::Message, task::Task, view::View},
    msg_bail_anyhow, msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    name: String,
    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,
    /// Free-form category used for grouping and filtering
    #[arg(short, long, default_value = "")]
    category: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i32,
    #[arg(short, long)]
    name: Option<String>,
    #[arg(short, long)]
    description: Option<String>,
    #[arg(short, long)]
    category: Option<String>,
    /// New completion status (true or false)
    #[arg(long)]
    completed: Option<bool>,
}

impl EditArgs {
    fn has_changes(&self) -> bool {
        self.name.is_some() || self.description.is_some() || self.category.is_some() || self.completed.is_some()
    }
}

#[derive(Debug, Args)]
pub struct IdArgs {
    /// Task ID
    id: i32,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i32,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn add(args: AddArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        msg_bail_anyhow!(Message::TaskNameRequired);
    }

    let mut session = open_session()?;
    let task = session.create(&args.name, &args.description, &args.category)?;

    msg_success!(Message::TaskCreated(task.id.unwrap_or_default(), task.name));
    Ok(())
}

/// Replaces a task wholesale. Flags override single fields; with no flags
/// every field is prompted for, current values as defaults.
pub fn edit(args: EditArgs) -> Result<()> {
    let mut session = open_session()?;

    let Some(current) = session.store().get(args.id).cloned() else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    let updated = if args.has_changes() {
        Task {
            id: current.id,
            name: args.name.unwrap_or_else(|| current.name.clone()),
            description: args.description.unwrap_or_else(|| current.description.clone()),
            completed: args.completed.unwrap_or(current.completed),
            category: args.category.unwrap_or_else(|| current.category.clone()),
        }
    } else {
        prompt_task(&current)?
    };

    if updated == current {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    session.update(updated.clone())?;
    View::task(&updated);
    msg_success!(Message::TaskUpdated(args.id));
    Ok(())
}

pub fn set_completed(args: IdArgs, completed: bool) -> Result<()> {
    let mut session = open_session()?;

    match session.set_completed(args.id, completed)? {
        Some(_) if completed => msg_success!(Message::TaskCompleted(args.id)),
        Some(_) => msg_success!(Message::TaskReopened(args.id)),
        None => msg_error!(Message::TaskNotFoundWithId(args.id)),
    }
    Ok(())
}

pub fn delete(args: DeleteArgs) -> Result<()> {
    let mut session = open_session()?;

    let Some(task) = session.store().get(args.id).cloned() else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if !args.yes {
        View::task(&task);
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeletionCancelled);
            return Ok(());
        }
    }

    session.delete(args.id)?;
    msg_success!(Message::TaskDeleted(args.id));
    Ok(())
}

fn prompt_task(current: &Task) -> Result<Task> {
    msg_print!(Message::EditingTask(current.name.clone()), true);

    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .default(current.name.clone())
        .interact_text()?;

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(current.description.clone())
        .allow_empty(true)
        .interact_text()?;

    let category: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .default(current.category.clone())
        .allow_empty(true)
        .interact_text()?;

    let completed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCompleted.to_string())
        .default(current.completed)
        .interact()?;

    Ok(Task {
        id: current.id,
        name,
        description,
        completed,
        category,
    })
}
