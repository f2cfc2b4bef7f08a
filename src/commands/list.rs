use super::open_session;
use crate::{
    libs::{
        config::Config,
        filter::{categorize, CategoryFilter, FilterState, SearchField},
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Text to search for
    #[arg(short, long, default_value = "")]
    search: String,
    /// Field the search text is matched against
    #[arg(short, long, value_enum)]
    field: Option<SearchField>,
    /// Only show tasks in this category
    #[arg(short, long)]
    category: Option<String>,
    /// Hide completed tasks
    #[arg(long, conflicts_with = "show_completed")]
    hide_completed: bool,
    /// Show completed tasks even when the configuration hides them
    #[arg(long)]
    show_completed: bool,
}

impl ListArgs {
    /// Overlays the command-line flags on the configured defaults.
    fn filter_state(self, defaults: FilterState) -> FilterState {
        let include_completed = if self.hide_completed {
            false
        } else if self.show_completed {
            true
        } else {
            defaults.include_completed
        };
        FilterState {
            query: self.search,
            field: self.field.unwrap_or(defaults.field),
            category: CategoryFilter::from(self.category),
            include_completed,
        }
    }
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let state = args.filter_state(config.filter_state());

    let session = open_session()?;
    let visible = session.visible(&state);

    if !state.is_identity() {
        msg_print!(Message::FilterStatus(state.to_string()));
    }
    if visible.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader(visible.len()));
    View::tasks(&visible);
    Ok(())
}

pub fn categories() -> Result<()> {
    let session = open_session()?;
    let groups = categorize(session.store().get_all());

    if groups.is_empty() {
        msg_info!(Message::NoCategories);
        return Ok(());
    }

    msg_print!(Message::CategoriesHeader);
    View::categories(&groups);
    Ok(())
}
