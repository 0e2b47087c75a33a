//! User configuration: compiled-in defaults with an optional JSON file laid over them

use crate::{
    BlockType, Error, IconTables, Result,
    theme::{Colours, HostnameColour, Weights},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};
use tracing::debug;

/// What to show. Loaded once, read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    pub show_writable: bool,
    pub show_virtual_env: bool,
    pub show_cwd: bool,
    pub show_git: bool,
    pub show_hg: bool,
    pub show_return_code: bool,
    pub show_username: bool,
    pub sort_by_weight: bool,
    pub cwd_max_length: usize,
    pub hostname_max_length: usize,
    /// Battery chip shows at or below this percentage; 0 turns it off
    pub battery_warn: u8,
    pub hostname_colour: HostnameColour,
    pub colours: Colours,
    pub icons: IconTables,
    pub weights: Weights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_writable: true,
            show_virtual_env: true,
            show_cwd: true,
            show_git: true,
            show_hg: true,
            show_return_code: true,
            show_username: false,
            sort_by_weight: false,
            cwd_max_length: 12,
            hostname_max_length: 0,
            battery_warn: 0,
            hostname_colour: HostnameColour::Fixed,
            colours: Colours::default(),
            icons: IconTables::default(),
            weights: Weights::default(),
        }
    }
}

impl Config {
    /// `$POWERLINE_CONFIG`, or `config.json` in the user's config directory
    pub fn path() -> Option<PathBuf> {
        env::var_os("POWERLINE_CONFIG")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("powerline").join("config.json")))
    }

    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::from_file(&path),
            None => Ok(Self::default()),
        }
    }

    /// Missing file means defaults, a broken one is an error
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(Error::ConfigIo {
                    path: path.to_owned(),
                    source,
                });
            }
        };
        let config = Self::from_json(&text).map_err(|source| Error::Config {
            path: path.to_owned(),
            source,
        })?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Overrides defaults key by key, so `{"colours": {"git": {"text": 1}}}` keeps other git colours
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let overrides: Value = serde_json::from_str(text)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge(&mut merged, overrides);
        serde_json::from_value(merged)
    }

    pub fn enabled(&self, block: BlockType) -> bool {
        match block {
            BlockType::VirtualEnv => self.show_virtual_env,
            BlockType::Cwd => self.show_cwd,
            BlockType::ReadOnly => self.show_writable,
            BlockType::Git => self.show_git,
            BlockType::Hg => self.show_hg,
            BlockType::ReturnCode => self.show_return_code,
            BlockType::Battery => self.battery_warn > 0,
            BlockType::Hostname | BlockType::Dollar => true,
        }
    }
}

fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}
