//! JSON-file persistence for tasks and free-time windows, plus the
//! TOML application config.
//!
//! The store is a thin collaborator: whole-file read and write per
//! command, no concurrency control. Missing files read as empty lists
//! and are created on first save.
//!
//! Configuration lives at `~/.config/timeblock/config.toml`; the data
//! directory resolves from `TIMEBLOCK_DATA_DIR`, then the `data_dir`
//! config key, then `~/.local/share/timeblock`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use timeblock_core::{FreeWindow, Task};

const TASKS_FILE: &str = "tasks.json";
const FREE_TIME_FILE: &str = "free_time.json";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Data directory override
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl Config {
    /// Path of the config file.
    pub fn path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("timeblock")
            .join("config.toml")
    }

    /// Load the config, falling back to defaults when absent.
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::path();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Save the config, creating the directory on demand.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let path = Self::path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// Returns the data directory, creating it on demand.
pub fn data_dir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    let dir = if let Ok(dir) = std::env::var("TIMEBLOCK_DATA_DIR") {
        PathBuf::from(dir)
    } else if let Some(dir) = Config::load()?.data_dir {
        dir
    } else {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".local")
            .join("share")
            .join("timeblock")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn load_tasks() -> Result<Vec<Task>, Box<dyn std::error::Error>> {
    load_list(TASKS_FILE)
}

pub fn save_tasks(tasks: &[Task]) -> Result<(), Box<dyn std::error::Error>> {
    save_list(TASKS_FILE, tasks)
}

pub fn load_windows() -> Result<Vec<FreeWindow>, Box<dyn std::error::Error>> {
    load_list(FREE_TIME_FILE)
}

pub fn save_windows(windows: &[FreeWindow]) -> Result<(), Box<dyn std::error::Error>> {
    save_list(FREE_TIME_FILE, windows)
}

fn load_list<T: DeserializeOwned>(file: &str) -> Result<Vec<T>, Box<dyn std::error::Error>> {
    let path = data_dir()?.join(file);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

fn save_list<T: Serialize>(file: &str, items: &[T]) -> Result<(), Box<dyn std::error::Error>> {
    let path = data_dir()?.join(file);
    std::fs::write(path, serde_json::to_string_pretty(items)?)?;
    Ok(())
}
