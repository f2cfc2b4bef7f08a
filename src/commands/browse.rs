//! Interactive task browser.
//!
//! Keeps one [`FilterState`] for the whole run and redraws the task table
//! after every change, the way a list view would refresh on each keystroke.

use super::open_session;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        export::TextFormat,
        filter::{CategoryFilter, FilterState, SearchField},
        manager::TaskManager,
        messages::Message,
        task::Task,
        view::View,
    },
    msg_error, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy)]
enum Action {
    Search,
    SearchField,
    Category,
    ToggleCompleted,
    Import,
    Reset,
    Quit,
}

impl Action {
    const ALL: [Action; 7] = [
        Action::Search,
        Action::SearchField,
        Action::Category,
        Action::ToggleCompleted,
        Action::Import,
        Action::Reset,
        Action::Quit,
    ];

    fn label(&self) -> String {
        match self {
            Action::Search => Message::BrowseSearch,
            Action::SearchField => Message::BrowseSearchField,
            Action::Category => Message::BrowseCategory,
            Action::ToggleCompleted => Message::BrowseToggleCompleted,
            Action::Import => Message::BrowseImport,
            Action::Reset => Message::BrowseReset,
            Action::Quit => Message::BrowseQuit,
        }
        .to_string()
    }
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let defaults = config.filter_state();
    let mut session = open_session()?;
    let mut state = defaults.clone();

    let labels: Vec<String> = Action::ALL.iter().map(Action::label).collect();
    loop {
        render(&session.visible(&state), &state);

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::BrowseMenuPrompt.to_string())
            .items(&labels)
            .default(0)
            .interact()?;

        match Action::ALL[choice] {
            Action::Search => {
                state.query = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptSearchQuery.to_string())
                    .with_initial_text(state.query.clone())
                    .allow_empty(true)
                    .interact_text()?;
            }
            Action::SearchField => {
                let labels = [SearchField::Name.label(), SearchField::Id.label()];
                let current = labels.iter().position(|l| *l == state.field.label()).unwrap_or(0);
                let picked = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::SelectSearchField.to_string())
                    .items(&labels)
                    .default(current)
                    .interact()?;
                state.field = labels[picked].parse()?;
            }
            Action::Category => {
                let names = session.categories();
                let current = names.iter().position(|n| CategoryFilter::from(n.as_str()) == state.category).unwrap_or(0);
                let picked = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::SelectCategory.to_string())
                    .items(&names)
                    .default(current)
                    .interact()?;
                state.category = CategoryFilter::from(names[picked].as_str());
            }
            Action::ToggleCompleted => state.include_completed = !state.include_completed,
            Action::Import => import(&mut session, config.transfer_format())?,
            Action::Reset => state = defaults.clone(),
            Action::Quit => break,
        }
    }
    Ok(())
}

/// Appends tasks from a file to the running session. A failed read is
/// reported and the loop carries on; saving to the database is optional.
fn import(session: &mut TaskManager<Tasks>, default_format: TextFormat) -> Result<()> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptImportPath.to_string())
        .interact_text()?;

    let formats = [TextFormat::Pipe, TextFormat::Csv];
    let current = formats.iter().position(|f| *f == default_format).unwrap_or(0);
    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectFileFormat.to_string())
        .items(&formats)
        .default(current)
        .interact()?;

    let before = session.store().len();
    match session.import(formats[picked], &PathBuf::from(path.trim())) {
        Ok(source) => msg_success!(Message::ImportCompleted(source)),
        Err(e) => {
            msg_error!(e);
            return Ok(());
        }
    }

    let added = session.store().len() - before;
    msg_info!(Message::ImportedTasksCount(added));
    if added == 0 {
        return Ok(());
    }

    let save = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSaveImported.to_string())
        .default(false)
        .interact()?;
    if !save {
        msg_warning!(Message::ImportNotSaved);
        return Ok(());
    }
    match session.persist_from(before) {
        Ok(saved) => msg_success!(Message::ImportedTasksSaved(saved)),
        Err(e) => msg_error!(e),
    }
    Ok(())
}

fn render(visible: &[&Task], state: &FilterState) {
    if !state.is_identity() {
        msg_print!(Message::FilterStatus(state.to_string()), true);
    }
    if visible.is_empty() {
        msg_info!(Message::TasksNotFound);
    } else {
        View::tasks(visible);
    }
}
