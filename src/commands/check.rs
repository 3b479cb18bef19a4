use crate::core::{
    assess_device, assess_devices, assess_text, partition_outcomes, Config, DeviceHealth,
    DiagnosticSource, DiagnosticText, HealthReport, SmartctlBriefHexParser, ThresholdOverrides,
};
use crate::error::SsdError;
use crate::platform::{needs_privilege_warning, SmartctlRunner};
use crate::ui::{self, prompts, OutputFormat};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use std::fs;
use std::io::{self, Read};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(path) = matches.get_one::<String>("smartctl") {
        config.set_smartctl_path(path.clone());
    }
    if matches.get_flag("sudo") {
        config.use_sudo = true;
    }

    let overrides = ThresholdOverrides {
        factory_limit_tb: matches.get_one::<u32>("limit").copied(),
        write_warning_tb: matches.get_one::<u32>("write-warning").copied(),
        online_warning_years: matches.get_one::<u32>("time-warning").copied(),
    };
    let thresholds = config.thresholds.with_overrides(&overrides)?;
    log::debug!("Using thresholds {:?}", thresholds);

    let format = match matches.get_one::<String>("format") {
        Some(name) => name.parse::<OutputFormat>().map_err(|e| anyhow!(e))?,
        None => OutputFormat::default(),
    };

    let parser = SmartctlBriefHexParser;
    let device_arg = matches.get_one::<String>("device");

    let results = if let Some(input) = matches.get_one::<String>("input") {
        let label = device_arg.cloned().unwrap_or_else(|| input.clone());
        let text = read_input(input, &label)?;
        vec![assess_text(&text, &parser, &thresholds)]
    } else {
        if needs_privilege_warning(config.use_sudo) {
            prompts::warn("smartctl usually needs root access; run as root or pass --sudo");
        }
        let runner = SmartctlRunner::from_config(&config)?;

        if matches.get_flag("all") {
            let devices = runner.enumerate_devices()?;
            if devices.is_empty() {
                return Err(SsdError::NoDevices.into());
            }
            let results = assess_devices(&runner, &devices, &parser, &thresholds);
            let (reports, failures) = partition_outcomes(&devices, results);
            let failed = failures.len();
            let mut first_failure = None;
            for (path, err) in failures {
                prompts::warn(&format!("Could not check {}: {}", path, err));
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
            if reports.is_empty() {
                if let Some(err) = first_failure {
                    return Err(anyhow::Error::from(err)
                        .context(format!("All {} devices failed", failed)));
                }
            }
            reports
        } else {
            let device = if matches.get_flag("select") {
                match pick_device(&runner)? {
                    Some(device) => device,
                    None => {
                        prompts::dimmed("No device selected.");
                        return Ok(());
                    }
                }
            } else {
                device_arg
                    .cloned()
                    .unwrap_or_else(|| config.device().to_string())
            };
            vec![assess_device(&runner, &device, &parser, &thresholds)?]
        }
    };

    present(&results, format)
}

fn pick_device(source: &dyn DiagnosticSource) -> Result<Option<String>> {
    let devices = source.enumerate_devices()?;
    if devices.is_empty() {
        return Err(SsdError::NoDevices.into());
    }
    let selected = prompts::select_device(&devices)?;
    Ok(selected.map(|index| devices[index].path.clone()))
}

/// Saved smartctl output from a file, or stdin when `input` is "-"
fn read_input(input: &str, label: &str) -> Result<DiagnosticText> {
    let contents = if input == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read smartctl output from stdin")?;
        buffer
    } else {
        fs::read_to_string(input)
            .with_context(|| format!("Failed to read smartctl output from {}", input))?
    };

    Ok(DiagnosticText::from_output(label, &contents))
}

fn present(results: &[DeviceHealth], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (i, health) in results.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print!("{}", ui::render_text(health));
                if health.report == HealthReport::default() {
                    prompts::warn(&format!(
                        "No wear counters found for {}; the drive may not report attributes 0x09/0xf1",
                        health.device.path
                    ));
                }
            }
        }
        OutputFormat::Html => {
            let now = chrono::Local::now();
            for health in results {
                println!("{}", ui::render_html(health, &now));
            }
        }
        OutputFormat::Json => {
            println!("{}", ui::render_json(results)?);
        }
    }

    Ok(())
}
