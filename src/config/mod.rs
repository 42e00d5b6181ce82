use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the city CSV files
    pub data_dir: String,
    /// Rows shown per page of raw data
    pub page_size: usize,
    /// Length of the "top N" station listings
    pub top_n: usize,
    /// Print how long each reporter took
    pub show_run_time: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: ".".to_string(),
            page_size: 5,
            top_n: 5,
            show_run_time: true,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("bikeshare")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("bikeshare.yaml")
    }

    /// Load configuration from `path` (or the standard location), or return
    /// defaults if the file does not exist.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            log::debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        log::info!("configuration loaded from {}", path.display());
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.page_size == 0 {
            return Err(AppError::Config("page_size must be at least 1".into()));
        }
        if self.top_n == 0 {
            return Err(AppError::Config("top_n must be at least 1".into()));
        }
        Ok(())
    }

    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write a default configuration file at `path`. An existing file is left
    /// untouched; returns whether a file was written.
    pub fn init_file(path: &Path) -> AppResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, Self::default().to_yaml()?)?;
        Ok(true)
    }
}
