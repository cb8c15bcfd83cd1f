use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::calendar::MAX_SPAN_DAYS;
use crate::error::PlanError;
use crate::models::DailyTargets;

fn default_weekday_target() -> u32 {
    3
}
fn default_weekend_target() -> u32 {
    4
}
fn default_version() -> String {
    "NIV".to_string()
}
fn default_week_days() -> u32 {
    7
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanConfig {
    #[serde(default = "default_weekday_target")]
    pub weekday_target: u32,
    #[serde(default = "default_weekend_target")]
    pub weekend_target: u32,
    /// Translation label shown alongside readings; does not change the catalog.
    #[serde(default = "default_version")]
    pub version: String,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            weekday_target: default_weekday_target(),
            weekend_target: default_weekend_target(),
            version: default_version(),
        }
    }
}

impl PlanConfig {
    pub fn targets(&self) -> Result<DailyTargets, PlanError> {
        DailyTargets::new(self.weekday_target, self.weekend_target)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Days shown by `week` when `--days` is not given.
    #[serde(default = "default_week_days")]
    pub week_days: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            week_days: default_week_days(),
        }
    }
}

impl DisplayConfig {
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.week_days == 0 || self.week_days > MAX_SPAN_DAYS {
            return Err(PlanError::InvalidSpan {
                days: self.week_days,
                max: MAX_SPAN_DAYS,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub plan: PlanConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl AppConfig {
    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("", "", "bible-year")
            .context("Could not determine project directories")
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = Self::project_dirs()?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Reading {:?}", path))?;
        let config: AppConfig = toml::from_str(&content).context("Parsing config.toml")?;
        config.plan.targets().context("Invalid [plan] targets")?;
        config.display.validate().context("Invalid [display] settings")?;
        Ok(config)
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).context("Serializing config")?;
        std::fs::write(path, content).with_context(|| format!("Writing {:?}", path))?;
        Ok(())
    }
}
