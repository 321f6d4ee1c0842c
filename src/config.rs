//! Configuration handling for the TUI

use crate::state::{Cycle, PlanId};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

/// User preferences for a fresh signup session
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Plan pre-selected on the plan step
    pub default_plan: Option<String>,
    /// Start with yearly billing
    pub yearly_by_default: Option<bool>,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Log file under the platform data dir
    pub fn log_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "signup", "signup-tui")
            .map(|dirs| dirs.data_local_dir().join("signup-tui.log"))
    }

    /// Open a log file for appending, creating its directory if needed
    pub fn open_log_file(path: &Path) -> Result<File> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open {}", path.display()))
    }

    /// Load configuration from the platform config dir
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a file, falling back to defaults when it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Starting plan; unknown ids fall back to the default tier
    pub fn plan(&self) -> PlanId {
        match self.default_plan.as_deref() {
            None => PlanId::default(),
            Some(id) => PlanId::parse(id).unwrap_or_else(|err| {
                tracing::warn!("Ignoring default_plan from config: {err}");
                PlanId::default()
            }),
        }
    }

    pub fn cycle(&self) -> Cycle {
        Cycle::from_yearly(self.yearly_by_default.unwrap_or(false))
    }
}
