use ssd_status::core::source::InvocationFailure;
use ssd_status::core::{
    assess_device, assess_devices, assess_text, partition_outcomes, DeviceDescriptor,
    DiagnosticSource, DiagnosticText, SmartctlBriefHexParser, WarningKind,
};
use ssd_status::core::thresholds::HealthThresholds;
use ssd_status::{Result, SsdError};
use std::collections::HashMap;

/// In-memory stand-in for smartctl
struct FakeSource {
    outputs: HashMap<String, (String, Option<i32>)>,
}

impl FakeSource {
    fn new() -> Self {
        Self {
            outputs: HashMap::new(),
        }
    }

    fn with_device(mut self, path: &str, output: &str, exit_code: Option<i32>) -> Self {
        self.outputs
            .insert(path.to_string(), (output.to_string(), exit_code));
        self
    }
}

impl DiagnosticSource for FakeSource {
    fn fetch_diagnostic_text(&self, device: &str) -> Result<DiagnosticText> {
        let (output, exit_code) = self
            .outputs
            .get(device)
            .ok_or_else(|| SsdError::other(format!("unknown device {}", device)))?;

        let mut text = DiagnosticText::from_output(device, output);
        if let Some(code) = exit_code {
            text.failure = Some(InvocationFailure {
                tool: "smartctl".to_string(),
                code: Some(*code),
            });
        }
        Ok(text)
    }

    fn enumerate_devices(&self) -> Result<Vec<DeviceDescriptor>> {
        let mut paths: Vec<&String> = self.outputs.keys().collect();
        paths.sort();
        Ok(paths.into_iter().map(|p| DeviceDescriptor::new(p.as_str())).collect())
    }
}

const WORN_DRIVE: &str = "\
Device Model:     Samsung SSD 840 EVO 120GB
Sector Size:      512 bytes logical/physical
0x09 Power_On_Hours          -O--CK   094   094   000    -    43800
0xf1 Total_LBAs_Written      -O--CK   099   099   000    -    146000000000
";

const FRESH_DRIVE: &str = "\
Device Model:     [No Information Found]
Sector Size:      4096 bytes logical/physical
0x09 Power_On_Hours          -O--CK   100   100   000    -    10
0xf1 Total_LBAs_Written      -O--CK   100   100   000    -    0
";

#[test]
fn test_assess_single_device() {
    let source = FakeSource::new().with_device("/dev/sda", WORN_DRIVE, None);
    let health = assess_device(
        &source,
        "/dev/sda",
        &SmartctlBriefHexParser,
        &HealthThresholds::default(),
    )
    .unwrap();

    assert_eq!(
        health.device.model.as_deref(),
        Some("Samsung SSD 840 EVO 120GB")
    );
    assert!(health.invocation_warning.is_none());
    assert!(health.report.has_warning(WarningKind::ExcessiveWrite));
    assert!(health.report.estimated_remaining_days.is_some());
}

#[test]
fn test_non_zero_exit_keeps_partial_report() {
    let source = FakeSource::new().with_device("/dev/sda", WORN_DRIVE, Some(64));
    let health = assess_device(
        &source,
        "/dev/sda",
        &SmartctlBriefHexParser,
        &HealthThresholds::default(),
    )
    .unwrap();

    let warning = health.invocation_warning.expect("warning should be surfaced");
    assert!(warning.contains("status 64"));
    assert!(health.report.total_written_tb.is_some());
}

#[test]
fn test_unknown_device_is_an_error() {
    let source = FakeSource::new();
    let result = assess_device(
        &source,
        "/dev/sdz",
        &SmartctlBriefHexParser,
        &HealthThresholds::default(),
    );
    assert!(result.is_err());
}

#[test]
fn test_assess_all_devices_keeps_order() {
    let source = FakeSource::new()
        .with_device("/dev/sda", WORN_DRIVE, None)
        .with_device("/dev/sdb", FRESH_DRIVE, None);
    let devices = source.enumerate_devices().unwrap();

    let results = assess_devices(
        &source,
        &devices,
        &SmartctlBriefHexParser,
        &HealthThresholds::default(),
    );
    assert_eq!(results.len(), 2);

    let worn = results[0].as_ref().unwrap();
    assert_eq!(worn.device.path, "/dev/sda");
    assert!(worn.report.is_degraded());

    let fresh = results[1].as_ref().unwrap();
    assert_eq!(fresh.device.path, "/dev/sdb");
    assert_eq!(fresh.device.model, None);
    assert_eq!(fresh.report.total_written_tb, Some(0.0));
    assert_eq!(fresh.report.estimated_remaining_days, None);
    assert!(!fresh.report.is_degraded());
}

#[test]
fn test_failed_device_does_not_drop_other_reports() {
    let source = FakeSource::new().with_device("/dev/sda", WORN_DRIVE, None);
    let devices = vec![
        DeviceDescriptor::new("/dev/sda"),
        DeviceDescriptor::new("/dev/sdz"),
    ];

    let results = assess_devices(
        &source,
        &devices,
        &SmartctlBriefHexParser,
        &HealthThresholds::default(),
    );
    let (reports, failures) = partition_outcomes(&devices, results);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].device.path, "/dev/sda");
    assert!(reports[0].report.total_written_tb.is_some());

    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].0, "/dev/sdz");
    assert!(failures[0].1.to_string().contains("/dev/sdz"));
}

#[test]
fn test_malformed_blocks_written_gives_partial_report() {
    let output = WORN_DRIVE.replace("146000000000", "not-a-number");
    let text = DiagnosticText::from_output("/dev/sda", &output);

    let health = assess_text(&text, &SmartctlBriefHexParser, &HealthThresholds::default());

    assert_eq!(health.report.total_written_tb, None);
    assert_eq!(health.report.health_percent, None);
    assert_eq!(health.report.estimated_remaining_days, None);
    assert_eq!(health.report.power_on_days, Some(1825.0));
    assert!(!health.report.has_warning(WarningKind::ExcessiveWrite));
}
