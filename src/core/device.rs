use super::projector::HealthReport;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEVICE: &str = "/dev/sda";

/// A device reported by `smartctl --scan`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub path: String,
    pub model: Option<String>,
}

impl DeviceDescriptor {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            model: None,
        }
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// "Model (path)" when the model is known, otherwise just the path
    pub fn display_name(&self) -> String {
        match &self.model {
            Some(model) => format!("{} ({})", model, self.path),
            None => self.path.clone(),
        }
    }
}

/// A projected report together with the device it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceHealth {
    pub device: DeviceDescriptor,
    pub report: HealthReport,
    /// Set when smartctl exited non-zero; the report is then best-effort.
    pub invocation_warning: Option<String>,
}
