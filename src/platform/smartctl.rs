//! smartctl process wrapper.
//!
//! Runs the external smartmontools binary and hands its text output to the
//! core. A non-zero exit is not an error here: smartctl sets bits in its exit
//! status for conditions such as "SMART disabled" or "error log has entries"
//! while still printing usable attribute tables.

use crate::core::assess::model_name;
use crate::core::config::Config;
use crate::core::device::DeviceDescriptor;
use crate::core::source::{DiagnosticSource, DiagnosticText, InvocationFailure};
use crate::error::{Result, SsdError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

pub const SMARTCTL: &str = "smartctl";
const SUDO: &str = "sudo";

/// Enable SMART, print identity, attributes (brief, hex ids) and the
/// device statistics log.
pub const INFO_ARGS: [&str; 10] = [
    "-s", "on", "-i", "-A", "-f", "brief", "-f", "hex,id", "-l", "devstat",
];
pub const SCAN_ARGS: [&str; 1] = ["--scan"];

const SCAN_DEVICE_PREFIX: &str = "/dev/";

/// Where smartctl usually lives when it is not on an unprivileged PATH.
const SBIN_DIRS: [&str; 3] = ["/usr/local/sbin", "/usr/sbin", "/sbin"];

fn find_sudo(name: &str) -> Result<PathBuf> {
    which::which(name).map_err(|_| {
        SsdError::config(format!("sudo was requested but '{}' is not on PATH", name))
    })
}

/// Locate the smartctl binary. Under sudo a bare name that is not on the
/// caller's PATH is looked up in `sbin_dirs`, and otherwise handed to sudo
/// unresolved so its `secure_path` can find it.
fn resolve_program<D: AsRef<Path>>(
    name: &str,
    use_sudo: bool,
    sbin_dirs: &[D],
) -> Result<PathBuf> {
    if let Ok(path) = which::which(name) {
        return Ok(path);
    }
    if !use_sudo {
        return Err(SsdError::tool_not_installed(name));
    }

    let bare = Path::new(name).components().count() == 1;
    if bare {
        if let Some(path) = sbin_dirs
            .iter()
            .map(|dir| dir.as_ref().join(name))
            .find(|candidate| candidate.is_file())
        {
            return Ok(path);
        }
    }

    log::debug!("{} not found on PATH, leaving the lookup to sudo", name);
    Ok(PathBuf::from(name))
}

/// Descriptor for a scanned device. A failed identity query keeps the
/// device with no model.
fn describe_device(source: &dyn DiagnosticSource, path: String) -> DeviceDescriptor {
    let model = match source.fetch_diagnostic_text(&path) {
        Ok(text) => model_name(&text),
        Err(err) => {
            log::warn!("Could not read model of {}: {}", path, err);
            None
        }
    };
    DeviceDescriptor { path, model }
}

#[derive(Debug, Clone)]
pub struct SmartctlRunner {
    program: PathBuf,
    sudo: Option<PathBuf>,
}

impl SmartctlRunner {
    /// Resolve smartctl (and sudo, if requested) up front so a missing
    /// binary is reported before any device is touched.
    pub fn locate(program: Option<&str>, use_sudo: bool) -> Result<Self> {
        let sudo = if use_sudo { Some(find_sudo(SUDO)?) } else { None };
        let program = resolve_program(program.unwrap_or(SMARTCTL), use_sudo, &SBIN_DIRS)?;

        log::debug!("Using smartctl at {:?} (sudo: {})", program, sudo.is_some());
        Ok(Self { program, sudo })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::locate(config.smartctl_path.as_deref(), config.use_sudo)
    }

    fn tool_name(&self) -> String {
        self.program
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| SMARTCTL.to_string())
    }

    fn command(&self) -> Command {
        match &self.sudo {
            Some(sudo) => {
                let mut cmd = Command::new(sudo);
                cmd.arg(&self.program);
                cmd
            }
            None => Command::new(&self.program),
        }
    }

    fn run(&self, args: &[&str], device: &str) -> Result<DiagnosticText> {
        let mut cmd = self.command();
        cmd.args(args);
        if !device.is_empty() {
            cmd.arg(device);
        }
        log::debug!("Running {:?}", cmd);

        let output = cmd.output().map_err(|e| match e.kind() {
            ErrorKind::NotFound => SsdError::tool_not_installed(self.tool_name()),
            _ => SsdError::Io(e),
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mut text = DiagnosticText::from_output(device, &stdout);

        if !output.status.success() {
            let failure = InvocationFailure {
                tool: self.tool_name(),
                code: output.status.code(),
            };
            log::warn!(
                "{} exited with {:?} for '{}', using its output anyway",
                failure.tool,
                failure.code,
                device
            );
            let stderr = String::from_utf8_lossy(&output.stderr);
            if !stderr.trim().is_empty() {
                log::debug!("{} stderr: {}", failure.tool, stderr.trim());
            }
            text.failure = Some(failure);
        }

        Ok(text)
    }
}

impl DiagnosticSource for SmartctlRunner {
    fn fetch_diagnostic_text(&self, device: &str) -> Result<DiagnosticText> {
        self.run(&INFO_ARGS, device)
    }

    fn enumerate_devices(&self) -> Result<Vec<DeviceDescriptor>> {
        let scan = self.run(&SCAN_ARGS, "")?;
        if let Some(err) = scan.invocation_error() {
            log::warn!("Device scan incomplete: {}", err);
        }

        Ok(parse_scan_output(&scan.lines)
            .into_iter()
            .map(|path| describe_device(self, path))
            .collect())
    }
}

/// Device paths from `smartctl --scan` lines such as
/// `/dev/sda -d sat # /dev/sda [SAT], ATA device`.
pub fn parse_scan_output<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| line.starts_with(SCAN_DEVICE_PREFIX))
        .filter_map(|line| line.split_whitespace().next())
        .map(str::to_string)
        .collect()
}
