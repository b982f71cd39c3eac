use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::contract::{ContractRegistry, DuplicatePolicy, UnknownInvokePolicy};

const APP_NAME: &str = "ledger-contracts";
const CONFIG_ENV: &str = "LEDGER_CONTRACTS_CONFIG";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duplicate_policy: DuplicatePolicy,

    #[serde(default)]
    pub unknown_invoke: UnknownInvokePolicy,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::default(),
            unknown_invoke: UnknownInvokePolicy::default(),
            log_level: default_log_level(),
            store_path: None,
        }
    }
}

impl Config {
    pub fn registry(&self) -> ContractRegistry {
        ContractRegistry::new(self.duplicate_policy, self.unknown_invoke)
    }

    /// Configured ledger path, else the default under the data dir
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        self.store_path.clone().or_else(ledger_db_path)
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Load the config file; only a missing file falls back to defaults
pub fn load() -> Result<Config> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => {
            return Err(err).with_context(|| format!("read config {}", path.display()));
        }
    };
    parse(&content).with_context(|| format!("parse config {}", path.display()))
}

pub fn parse(content: &str) -> Result<Config> {
    toml::from_str::<Config>(content).context("invalid config")
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_NAME).join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join(APP_NAME).join("config.toml"));
    }

    directories::ProjectDirs::from("io", APP_NAME, APP_NAME)
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join(APP_NAME));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join(APP_NAME));
    }
    directories::ProjectDirs::from("io", APP_NAME, APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
}

pub fn ledger_db_path() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("ledger.sqlite3"))
}
