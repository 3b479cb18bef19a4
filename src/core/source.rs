//! Boundary between the health engine and whatever produces smartctl text.

use super::device::DeviceDescriptor;
use crate::error::{Result, SsdError};

/// Text captured from one diagnostic tool run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticText {
    pub device: String,
    pub lines: Vec<String>,
    /// `Some` when the tool exited unsuccessfully
    pub failure: Option<InvocationFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationFailure {
    pub tool: String,
    pub code: Option<i32>,
}

impl DiagnosticText {
    pub fn from_output<S: Into<String>>(device: S, output: &str) -> Self {
        Self {
            device: device.into(),
            lines: output.lines().map(str::to_string).collect(),
            failure: None,
        }
    }

    /// The non-zero exit as an error value, for reporting next to the data.
    pub fn invocation_error(&self) -> Option<SsdError> {
        self.failure.as_ref().map(|failure| {
            SsdError::tool_invocation_failed(&failure.tool, &self.device, failure.code)
        })
    }

    /// Value after the first ':' of the first line starting with `prefix`
    pub fn field_value(&self, prefix: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.starts_with(prefix))
            .and_then(|line| line.split_once(':'))
            .map(|(_, value)| value.trim())
    }
}

/// Supplies diagnostic text and device lists.
///
/// Only I/O failures are errors here: a missing tool, or a process that could
/// not be launched. A non-zero exit is carried in [`DiagnosticText::failure`].
pub trait DiagnosticSource: Send + Sync {
    fn fetch_diagnostic_text(&self, device: &str) -> Result<DiagnosticText>;

    fn enumerate_devices(&self) -> Result<Vec<DeviceDescriptor>>;
}
