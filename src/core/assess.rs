use super::device::{DeviceDescriptor, DeviceHealth};
use super::extractor::{extract_with, AttributeParser};
use super::projector::project;
use super::source::{DiagnosticSource, DiagnosticText};
use super::thresholds::HealthThresholds;
use crate::error::{Result, SsdError};

pub const MODEL_PREFIX: &str = "Device Model:";
const NO_INFORMATION: &str = "[No Information Found]";

/// Model name from smartctl identity output, if it reports a usable one.
pub fn model_name(text: &DiagnosticText) -> Option<String> {
    text.field_value(MODEL_PREFIX)
        .filter(|model| !model.is_empty() && !model.contains(NO_INFORMATION))
        .map(str::to_string)
}

/// Extract and project from already captured text.
pub fn assess_text(
    text: &DiagnosticText,
    parser: &dyn AttributeParser,
    thresholds: &HealthThresholds,
) -> DeviceHealth {
    let metrics = extract_with(parser, &text.lines);
    if metrics.is_empty() {
        log::debug!("No wear counters found in output for {}", text.device);
    }

    let device = DeviceDescriptor {
        path: text.device.clone(),
        model: model_name(text),
    };

    DeviceHealth {
        device,
        report: project(&metrics, thresholds),
        invocation_warning: text.invocation_error().map(|e| e.to_string()),
    }
}

/// Fetch, extract and project for a single device.
pub fn assess_device(
    source: &dyn DiagnosticSource,
    device: &str,
    parser: &dyn AttributeParser,
    thresholds: &HealthThresholds,
) -> Result<DeviceHealth> {
    let text = source.fetch_diagnostic_text(device)?;
    Ok(assess_text(&text, parser, thresholds))
}

/// Assess every device on its own thread; results keep the input order.
pub fn assess_devices(
    source: &dyn DiagnosticSource,
    devices: &[DeviceDescriptor],
    parser: &dyn AttributeParser,
    thresholds: &HealthThresholds,
) -> Vec<Result<DeviceHealth>> {
    std::thread::scope(|scope| {
        let handles: Vec<_> = devices
            .iter()
            .map(|device| {
                scope.spawn(move || -> Result<DeviceHealth> {
                    let mut health = assess_device(source, &device.path, parser, thresholds)?;
                    if health.device.model.is_none() {
                        health.device.model = device.model.clone();
                    }
                    Ok(health)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(_) => Err(SsdError::other("device check panicked")),
            })
            .collect()
    })
}

/// Split per-device outcomes into finished reports and failures tagged with
/// the device path. `results` must be in the same order as `devices`.
pub fn partition_outcomes(
    devices: &[DeviceDescriptor],
    results: Vec<Result<DeviceHealth>>,
) -> (Vec<DeviceHealth>, Vec<(String, SsdError)>) {
    let mut reports = Vec::new();
    let mut failures = Vec::new();
    for (device, result) in devices.iter().zip(results) {
        match result {
            Ok(health) => reports.push(health),
            Err(err) => failures.push((device.path.clone(), err)),
        }
    }
    (reports, failures)
}
