use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use crate::libs::error::Result;
use crate::libs::messages::Message;
use crate::msg_debug;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "taskman.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database named in the configuration, falling back to
    /// `taskman.db` in the application data directory.
    pub fn new() -> anyhow::Result<Db> {
        let config = Config::read()?;
        let db_file_path = match config.database.and_then(|db| db.path) {
            Some(path) => path,
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };
        Ok(Self::open(&db_file_path)?)
    }

    pub fn open(path: &Path) -> Result<Db> {
        let conn = Connection::open(path)?;
        msg_debug!(Message::DatabaseOpened(path.display().to_string()));
        Ok(Db { conn })
    }

    pub fn open_in_memory() -> Result<Db> {
        let conn = Connection::open_in_memory()?;
        Ok(Db { conn })
    }
}
