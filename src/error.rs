use std::io;
use thiserror::Error;

/// Custom error type for ssd-status
#[derive(Error, Debug)]
pub enum SsdError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{tool} not found, is smartmontools installed?")]
    ToolNotInstalled { tool: String },

    #[error("{} exited with {} for device '{}'", .tool, exit_label(.code), .device)]
    ToolInvocationFailed {
        tool: String,
        device: String,
        code: Option<i32>,
    },

    #[error("No devices found")]
    NoDevices,

    #[error("{0}")]
    Other(String),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "no status (terminated by signal)".to_string(),
    }
}

/// Result type alias for ssd-status
pub type Result<T> = std::result::Result<T, SsdError>;

impl SsdError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SsdError::Config(msg.into())
    }

    /// Create a tool-not-installed error
    pub fn tool_not_installed<S: Into<String>>(tool: S) -> Self {
        SsdError::ToolNotInstalled { tool: tool.into() }
    }

    pub fn tool_invocation_failed<T: Into<String>, D: Into<String>>(
        tool: T,
        device: D,
        code: Option<i32>,
    ) -> Self {
        SsdError::ToolInvocationFailed {
            tool: tool.into(),
            device: device.into(),
            code,
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SsdError::Other(msg.into())
    }
}
