use crate::error::{Result, SsdError};
use serde::{Deserialize, Serialize};

pub const DEFAULT_FACTORY_LIMIT_TB: u32 = 75;
pub const DEFAULT_WRITE_WARNING_TB: u32 = 70;
pub const DEFAULT_ONLINE_WARNING_YEARS: u32 = 5;

/// Wear limits the projection is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthThresholds {
    /// Vendor rated write endurance (TB)
    #[serde(default = "default_factory_limit")]
    pub factory_limit_tb: u32,
    /// Warn once more than this much has been written (TB)
    #[serde(default = "default_write_warning")]
    pub write_warning_tb: u32,
    /// Warn once the drive has been powered longer than this (years)
    #[serde(default = "default_online_warning")]
    pub online_warning_years: u32,
}

fn default_factory_limit() -> u32 {
    DEFAULT_FACTORY_LIMIT_TB
}

fn default_write_warning() -> u32 {
    DEFAULT_WRITE_WARNING_TB
}

fn default_online_warning() -> u32 {
    DEFAULT_ONLINE_WARNING_YEARS
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self {
            factory_limit_tb: DEFAULT_FACTORY_LIMIT_TB,
            write_warning_tb: DEFAULT_WRITE_WARNING_TB,
            online_warning_years: DEFAULT_ONLINE_WARNING_YEARS,
        }
    }
}

impl HealthThresholds {
    pub fn new(
        factory_limit_tb: u32,
        write_warning_tb: u32,
        online_warning_years: u32,
    ) -> Result<Self> {
        let thresholds = Self {
            factory_limit_tb,
            write_warning_tb,
            online_warning_years,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// A zero factory limit makes every percentage undefined.
    pub fn validate(&self) -> Result<()> {
        if self.factory_limit_tb == 0 {
            return Err(SsdError::config(
                "factory limit must be greater than 0 TB",
            ));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of these values.
    pub fn with_overrides(&self, overrides: &ThresholdOverrides) -> Result<Self> {
        Self::new(
            overrides.factory_limit_tb.unwrap_or(self.factory_limit_tb),
            overrides.write_warning_tb.unwrap_or(self.write_warning_tb),
            overrides
                .online_warning_years
                .unwrap_or(self.online_warning_years),
        )
    }
}

/// Per-invocation overrides; `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdOverrides {
    pub factory_limit_tb: Option<u32>,
    pub write_warning_tb: Option<u32>,
    pub online_warning_years: Option<u32>,
}
