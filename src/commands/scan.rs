use crate::core::{Config, DiagnosticSource};
use crate::platform::{needs_privilege_warning, SmartctlRunner};
use crate::ui::prompts;
use anyhow::Result;
use colored::Colorize;

pub fn execute() -> Result<()> {
    let config = Config::load()?;
    if needs_privilege_warning(config.use_sudo) {
        prompts::warn("smartctl usually needs root access; model names may be missing");
    }

    let runner = SmartctlRunner::from_config(&config)?;
    let devices = runner.enumerate_devices()?;

    if devices.is_empty() {
        println!("{}", "No devices found.".yellow());
        return Ok(());
    }

    println!("{}", "Devices:".white().bold());
    for device in &devices {
        match &device.model {
            Some(model) => println!("  {}  {}", device.path.cyan().bold(), model),
            None => println!("  {}  {}", device.path.cyan().bold(), "(unknown model)".dimmed()),
        }
    }

    Ok(())
}
