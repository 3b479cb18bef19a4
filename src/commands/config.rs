use crate::core::Config;
use crate::ui::prompts;
use anyhow::{Context, Result};
use colored::Colorize;

/// Persisted settings, for DRY set handling
enum Setting {
    FactoryLimit,
    WriteWarning,
    TimeWarning,
    Device,
    Smartctl,
    Sudo,
}

impl Setting {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "limit" => Some(Setting::FactoryLimit),
            "write-warning" => Some(Setting::WriteWarning),
            "time-warning" => Some(Setting::TimeWarning),
            "device" => Some(Setting::Device),
            "smartctl" => Some(Setting::Smartctl),
            "sudo" => Some(Setting::Sudo),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Setting::FactoryLimit => "Factory capacity limit",
            Setting::WriteWarning => "Write warning limit",
            Setting::TimeWarning => "Online warning limit",
            Setting::Device => "Default device",
            Setting::Smartctl => "smartctl path",
            Setting::Sudo => "Use sudo",
        }
    }

    fn apply(&self, config: &mut Config, matches: &clap::ArgMatches) -> Result<String> {
        match self {
            Setting::FactoryLimit => {
                let tb = *matches.get_one::<u32>("value").context("Value is required")?;
                config.set_factory_limit(tb)?;
                Ok(format!("{} TB", tb))
            }
            Setting::WriteWarning => {
                let tb = *matches.get_one::<u32>("value").context("Value is required")?;
                config.set_write_warning(tb);
                Ok(format!("{} TB", tb))
            }
            Setting::TimeWarning => {
                let years = *matches.get_one::<u32>("value").context("Value is required")?;
                config.set_online_warning(years);
                Ok(format!("{} year(s)", years))
            }
            Setting::Device => {
                let device = matches
                    .get_one::<String>("value")
                    .context("Value is required")?;
                config.set_default_device(device.clone());
                Ok(device.clone())
            }
            Setting::Smartctl => {
                let path = matches
                    .get_one::<String>("value")
                    .context("Value is required")?;
                config.set_smartctl_path(path.clone());
                Ok(path.clone())
            }
            Setting::Sudo => {
                let enabled = *matches.get_one::<bool>("value").context("Value is required")?;
                config.use_sudo = enabled;
                Ok(enabled.to_string())
            }
        }
    }
}

pub fn handle_set(matches: &clap::ArgMatches) -> Result<()> {
    let Some((name, sub_matches)) = matches.subcommand() else {
        println!("Use 'ssd-status set --help' for more information.");
        return Ok(());
    };
    let Some(setting) = Setting::from_name(name) else {
        println!("Use 'ssd-status set --help' for more information.");
        return Ok(());
    };

    let mut config = Config::load()?;
    let shown = setting.apply(&mut config, sub_matches)?;
    config.save()?;

    prompts::success(&format!("✓ {} set to: {}", setting.label(), shown));

    Ok(())
}

pub fn handle_get() -> Result<()> {
    let config = Config::load()?;
    let thresholds = &config.thresholds;

    println!("{}", "Preferences".white().bold());
    println!(
        "  Factory capacity limit: {} TB",
        thresholds.factory_limit_tb.to_string().cyan()
    );
    println!(
        "  Write warning limit:    {} TB",
        thresholds.write_warning_tb.to_string().cyan()
    );
    println!(
        "  Online warning limit:   {} year(s)",
        thresholds.online_warning_years.to_string().cyan()
    );
    println!("  Default device:         {}", config.device().cyan());
    println!(
        "  smartctl:               {}",
        config.smartctl_path.as_deref().unwrap_or("smartctl (PATH)").cyan()
    );
    println!("  Use sudo:               {}", config.use_sudo.to_string().cyan());

    if let Ok(path) = Config::get_config_path() {
        println!();
        println!("{}", format!("Config file: {}", path.display()).dimmed());
    }

    Ok(())
}

pub fn handle_reset() -> Result<()> {
    let mut config = Config::load()?;
    config.reset_to_defaults();
    config.save()?;
    prompts::success("✓ Settings reset to defaults");
    Ok(())
}
