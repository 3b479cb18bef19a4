//! Presenters for projected health reports.
//!
//! All three formats read the same [`DeviceHealth`]; none of them computes
//! anything beyond formatting.

use crate::core::device::DeviceHealth;
use crate::core::projector::WarningKind;
use crate::ui::formatters::{escape_html, format_optional, format_timestamp};
use chrono::{DateTime, Local};
use colored::Colorize;
use std::fmt;
use std::str::FromStr;

pub const DEGRADED_BANNER: &str = "*** Warning!!! The SSD has been degraded too much! ***";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["text", "html", "json"];
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

struct Row {
    label: &'static str,
    value: Option<f64>,
    unit: &'static str,
    warned: bool,
}

fn rows(health: &DeviceHealth) -> [Row; 4] {
    let report = &health.report;
    [
        Row {
            label: "Total data written:",
            value: report.total_written_tb,
            unit: "TB",
            warned: report.has_warning(WarningKind::ExcessiveWrite),
        },
        Row {
            label: "Total power on:",
            value: report.power_on_days,
            unit: "day(s)",
            warned: report.has_warning(WarningKind::ExcessiveOnlineTime),
        },
        Row {
            label: "Health status:",
            value: report.health_percent,
            unit: "percent",
            warned: false,
        },
        Row {
            label: "Estimated remaining:",
            value: report.estimated_remaining_days,
            unit: "day(s)",
            warned: false,
        },
    ]
}

pub fn render_text(health: &DeviceHealth) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", health.device.display_name().bold()));

    if let Some(ref warning) = health.invocation_warning {
        out.push_str(&format!(
            "{}\n\n",
            format!("⚠️  {} (results may be incomplete)", warning).yellow()
        ));
    }

    for row in rows(health) {
        let value = format_optional(row.value, row.unit);
        let value = if row.warned {
            value.red().bold().to_string()
        } else if row.value.is_none() {
            value.dimmed().to_string()
        } else {
            value
        };
        out.push_str(&format!("    {:<21}{}\n", row.label, value));
    }

    if health.report.is_degraded() {
        out.push('\n');
        out.push_str(&format!("{}\n", DEGRADED_BANNER.red().bold()));
        for kind in &health.report.warnings {
            out.push_str(&format!("    - {}\n", kind.description()));
        }
    }

    out
}

pub fn render_html(health: &DeviceHealth, generated_at: &DateTime<Local>) -> String {
    let mut items = String::new();
    for row in rows(health) {
        let Some(value) = row.value else {
            continue;
        };
        if row.warned {
            items.push_str(&format!(
                "<li style=\"color:red\">{} {:.2} {} *** WARNING ***</li>",
                row.label, value, row.unit
            ));
        } else {
            items.push_str(&format!("<li>{} {:.2} {}</li>", row.label, value, row.unit));
        }
    }

    let notice = match &health.invocation_warning {
        Some(warning) => format!("<p style=\"color:orange\">{}</p>", escape_html(warning)),
        None => String::new(),
    };

    format!(
        "<!DOCTYPE html><html><body><p>{}</p><p><b>{}</b></p>{}<u>Health status:</u><ul>{}</ul></body></html>",
        format_timestamp(generated_at),
        escape_html(&health.device.display_name()),
        notice,
        items
    )
}

pub fn render_json(results: &[DeviceHealth]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}
