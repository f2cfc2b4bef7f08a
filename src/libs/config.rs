//! Configuration for taskman.
//!
//! Settings live in `config.json` inside the application data directory (see
//! [`DataStorage`]). Every section is optional: a missing section, or a
//! missing file, means built-in defaults.
//!
//! ```json
//! {
//!   "database": { "path": "/home/me/tasks.db" },
//!   "transfer": { "format": "csv" },
//!   "view": { "search_field": "Name", "show_completed": false }
//! }
//! ```
//!
//! ```rust,no_run
//! use taskman::libs::config::Config;
//!
//! let config = Config::read()?;
//! let state = config.filter_state();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::export::TextFormat;
use super::filter::{FilterState, SearchField};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Where the task database lives.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct DatabaseConfig {
    /// Explicit database file. `None` keeps `taskman.db` in the data
    /// directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Defaults for `export` and `import`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct TransferConfig {
    pub format: TextFormat,
}

/// Initial filter state for `list` and `browse`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ViewConfig {
    pub search_field: SearchField,
    pub show_completed: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        ViewConfig {
            search_field: SearchField::Name,
            show_completed: true,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer: Option<TransferConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    /// Loads `config.json` from the data directory, or defaults when the
    /// file does not exist.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Loads configuration from an explicit file. A missing file is not an
    /// error; a malformed one is.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes pretty-printed JSON to `path`, replacing any existing file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn transfer_format(&self) -> TextFormat {
        self.transfer.as_ref().map(|t| t.format).unwrap_or_default()
    }

    /// Filter state a fresh view starts from.
    pub fn filter_state(&self) -> FilterState {
        let view = self.view.clone().unwrap_or_default();
        FilterState {
            field: view.search_field,
            include_completed: view.show_completed,
            ..FilterState::default()
        }
    }

    /// Interactive setup wizard. Current values are offered as defaults; the
    /// caller decides whether to save the result.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "database".to_string(),
                name: Message::ConfigModuleDatabase.to_string(),
            },
            ConfigModule {
                key: "transfer".to_string(),
                name: Message::ConfigModuleTransfer.to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: Message::ConfigModuleView.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectConfigModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "database" => {
                    msg_print!(Message::ConfigModuleDatabase);
                    let current = config
                        .database
                        .as_ref()
                        .and_then(|db| db.path.as_ref())
                        .map(|p| p.display().to_string())
                        .unwrap_or_default();
                    let path: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDatabasePath.to_string())
                        .default(current)
                        .allow_empty(true)
                        .interact_text()?;
                    let path = path.trim();
                    config.database = Some(DatabaseConfig {
                        path: if path.is_empty() { None } else { Some(PathBuf::from(path)) },
                    });
                }
                "transfer" => {
                    msg_print!(Message::ConfigModuleTransfer);
                    let formats = [TextFormat::Pipe, TextFormat::Csv];
                    let current = formats.iter().position(|f| *f == config.transfer_format()).unwrap_or(0);
                    let choice = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultFormat.to_string())
                        .items(&formats)
                        .default(current)
                        .interact()?;
                    config.transfer = Some(TransferConfig { format: formats[choice] });
                }
                "view" => {
                    msg_print!(Message::ConfigModuleView);
                    let default = config.view.clone().unwrap_or_default();
                    let fields = [SearchField::Name, SearchField::Id];
                    let current = fields.iter().position(|f| *f == default.search_field).unwrap_or(0);
                    let field = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSearchField.to_string())
                        .items(&fields)
                        .default(current)
                        .interact()?;
                    let show_completed = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptShowCompleted.to_string())
                        .default(default.show_completed)
                        .interact()?;
                    config.view = Some(ViewConfig {
                        search_field: fields[field],
                        show_completed,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
