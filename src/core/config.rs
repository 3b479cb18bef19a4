use crate::core::device::DEFAULT_DEVICE;
use crate::core::thresholds::HealthThresholds;
use crate::error::{Result, SsdError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub thresholds: HealthThresholds,
    /// Explicit smartctl binary, otherwise looked up on PATH
    #[serde(default)]
    pub smartctl_path: Option<String>,
    #[serde(default)]
    pub default_device: Option<String>,
    /// Prefix smartctl invocations with sudo
    #[serde(default)]
    pub use_sudo: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read(config_path)?;

        // If the file is empty or corrupted, return default config
        if data.is_empty() {
            return Ok(Config::default());
        }

        let config: Config = match serde_json::from_slice(&data) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Ignoring unreadable config file {:?}: {}",
                    config_path,
                    e
                );
                return Ok(Config::default());
            }
        };

        if let Err(e) = config.thresholds.validate() {
            log::warn!("Ignoring stored thresholds in {:?}: {}", config_path, e);
            return Ok(Config {
                thresholds: HealthThresholds::default(),
                ..config
            });
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(config_path, data)?;
        log::debug!("Saved config to {:?}", config_path);

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SsdError::config("Could not determine config directory"))?;

        Ok(config_dir.join("ssd-status").join("config.json"))
    }

    /// Device used when none is given on the command line
    pub fn device(&self) -> &str {
        self.default_device.as_deref().unwrap_or(DEFAULT_DEVICE)
    }

    pub fn set_factory_limit(&mut self, tb: u32) -> Result<()> {
        HealthThresholds::new(
            tb,
            self.thresholds.write_warning_tb,
            self.thresholds.online_warning_years,
        )?;
        self.thresholds.factory_limit_tb = tb;
        Ok(())
    }

    pub fn set_write_warning(&mut self, tb: u32) {
        self.thresholds.write_warning_tb = tb;
    }

    pub fn set_online_warning(&mut self, years: u32) {
        self.thresholds.online_warning_years = years;
    }

    pub fn set_default_device(&mut self, device: String) {
        self.default_device = Some(device);
    }

    pub fn set_smartctl_path(&mut self, path: String) {
        self.smartctl_path = Some(path);
    }

    /// Reset to built-in defaults
    pub fn reset_to_defaults(&mut self) {
        *self = Config::default();
    }
}
