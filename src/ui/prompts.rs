// UI prompts and user interaction module

use crate::core::device::DeviceDescriptor;
use colored::Colorize;
use dialoguer::Select;

/// Display a warning message
pub fn warn(message: &str) {
    eprintln!("{}", format!("⚠️  Warning: {}", message).yellow().bold());
}

/// Display a success message
pub fn success(message: &str) {
    println!("{}", message.green().bold());
}

/// Display a dimmed/secondary message
pub fn dimmed(message: &str) {
    println!("{}", message.dimmed());
}

/// Interactive device picker.
/// Returns the index of the selected device, or None if cancelled
pub fn select_device(devices: &[DeviceDescriptor]) -> anyhow::Result<Option<usize>> {
    if devices.is_empty() {
        return Ok(None);
    }

    let items: Vec<String> = devices.iter().map(DeviceDescriptor::display_name).collect();

    let selection = Select::new()
        .with_prompt("Select a device")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection)
}
