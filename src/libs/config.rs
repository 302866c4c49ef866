//! Local application state for remi.
//!
//! Everything remi remembers between invocations lives in a single JSON file
//! under the platform data directory: the Redmine host, the API key and user
//! id obtained at login, user-defined aliases for issue and project ids, and
//! default values for settings such as the time entry activity.
//!
//! The file is loaded once at the start of a command and written back at most
//! once, by the mutating operation itself. A [`Config`] value is passed into
//! whatever needs it; there is no ambient global state.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::str::FromStr;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Settings a user may register a default value for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultKey {
    Activity,
}

impl DefaultKey {
    pub const ALL: &'static [&'static str] = &["activity"];

    pub fn as_str(&self) -> &'static str {
        match self {
            DefaultKey::Activity => "activity",
        }
    }
}

impl FromStr for DefaultKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "activity" => Ok(DefaultKey::Activity),
            _ => Err(msg_error_anyhow!(Message::InvalidDefaultKey(
                Self::ALL.iter().map(|key| key.to_string()).collect()
            ))),
        }
    }
}

/// Persistent application state.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Base URL of the Redmine server, set at login.
    #[serde(default)]
    pub host: String,
    /// API key of the logged-in user; empty when logged out.
    #[serde(default)]
    pub api_key: String,
    /// Numeric id of the logged-in user.
    #[serde(default)]
    pub user_id: i64,
    /// Default values for settings, keyed by [`DefaultKey`] names.
    #[serde(default)]
    pub defaults: HashMap<String, String>,
    /// User-defined names for issue and project ids.
    #[serde(default)]
    pub aliases: HashMap<String, String>,
}

impl Config {
    /// Reads the configuration file, falling back to the default
    /// configuration when no file exists yet.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration back to disk, creating the data directory
    /// when necessary.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Returns host and API key, or fails when either is missing.
    pub fn credentials(&self) -> Result<(String, String)> {
        if self.host.is_empty() || self.api_key.is_empty() {
            msg_bail_anyhow!(Message::NotLoggedIn);
        }

        Ok((self.host.clone(), self.api_key.clone()))
    }

    /// Looks up an alias value by name.
    pub fn alias(&self, name: &str) -> Option<&str> {
        self.aliases.get(name).map(String::as_str)
    }

    /// Inserts or overwrites an alias and persists the change. An empty
    /// value removes the entry instead.
    pub fn set_alias(&mut self, name: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            self.aliases.remove(name);
        } else {
            self.aliases.insert(name.to_string(), value.to_string());
        }

        self.save()
    }

    /// Looks up the default value for a setting.
    pub fn default_value(&self, key: DefaultKey) -> Option<&str> {
        self.defaults.get(key.as_str()).map(String::as_str)
    }

    /// Stores a default value and persists the change.
    pub fn set_default(&mut self, key: DefaultKey, value: &str) -> Result<()> {
        self.defaults.insert(key.as_str().to_string(), value.to_string());
        self.save()
    }
}
