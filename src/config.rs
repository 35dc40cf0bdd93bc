use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::runs::summary::{MAX_RECENT_DAYS, TimeUnit};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    /// Plain-text file with one `date,distance,duration[,comments]` run per line
    #[serde(default = "default_runs_file")]
    pub runs_file: PathBuf,
    #[serde(default)]
    pub summary: SummaryConfig,
}

fn default_runs_file() -> PathBuf {
    PathBuf::from("existing_runs.txt")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runs_file: default_runs_file(),
            summary: SummaryConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SummaryConfig {
    pub recent_days: u32,
    pub default_unit: TimeUnit,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            recent_days: 7,
            default_unit: TimeUnit::Weekly,
        }
    }
}

impl SummaryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.recent_days == 0 || self.recent_days > MAX_RECENT_DAYS {
            anyhow::bail!(
                "summary.recent_days must be between 1 and {}, got {}",
                MAX_RECENT_DAYS,
                self.recent_days
            );
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.summary.validate()
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".runlog")
        .join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    let config: Config = loader
        .try_deserialize()
        .context("Failed to parse config file")?;
    config.validate()?;
    Ok(config)
}

/// Load `~/.runlog/config.toml`, falling back to defaults when it does not exist
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load_from_path(&path)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
    Ok(())
}
