use ssd_status::{project, ExtractedMetrics, HealthReport, HealthThresholds, WarningKind};

fn metrics(sector: Option<u64>, hours: Option<u64>, blocks: Option<u64>) -> ExtractedMetrics {
    ExtractedMetrics {
        sector_size_bytes: sector,
        power_on_hours: hours,
        logical_blocks_written: blocks,
    }
}

fn assert_close(actual: Option<f64>, expected: f64, tolerance: f64) {
    let actual = actual.expect("expected a value");
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {} ± {}, got {}",
        expected,
        tolerance,
        actual
    );
}

#[test]
fn test_worn_drive_scenario() {
    let report = project(
        &metrics(Some(512), Some(43_800), Some(146_000_000_000)),
        &HealthThresholds::default(),
    );

    assert_close(report.total_written_tb, 74.75, 0.01);
    assert_close(report.power_on_days, 1825.0, 1e-9);
    assert_close(report.health_percent, 0.33, 0.01);
    assert!(report.estimated_remaining_days.is_some());
    assert!(report.has_warning(WarningKind::ExcessiveWrite));
    assert!(!report.has_warning(WarningKind::ExcessiveOnlineTime));
}

#[test]
fn test_all_fields_present_populates_everything() {
    let samples = [
        (512, 1, 1),
        (512, 8_760, 2_000_000_000),
        (4096, 30_000, 10_000_000_000),
        (512, 0, 146_000_000_000),
    ];
    for (sector, hours, blocks) in samples {
        let report = project(
            &metrics(Some(sector), Some(hours), Some(blocks)),
            &HealthThresholds::default(),
        );
        assert!(report.total_written_tb.is_some());
        assert!(report.power_on_days.is_some());
        assert!(report.health_percent.is_some());
        assert!(report.estimated_remaining_days.is_some());
    }
}

#[test]
fn test_each_missing_field_drops_only_dependents() {
    let thresholds = HealthThresholds::default();

    let no_sector = project(&metrics(None, Some(1000), Some(1_000_000)), &thresholds);
    assert!(no_sector.total_written_tb.is_none());
    assert!(no_sector.health_percent.is_none());
    assert!(no_sector.estimated_remaining_days.is_none());
    assert!(no_sector.power_on_days.is_some());

    let no_blocks = project(&metrics(Some(512), Some(1000), None), &thresholds);
    assert!(no_blocks.total_written_tb.is_none());
    assert!(no_blocks.health_percent.is_none());
    assert!(no_blocks.estimated_remaining_days.is_none());
    assert!(no_blocks.power_on_days.is_some());

    let no_hours = project(&metrics(Some(512), None, Some(1_000_000)), &thresholds);
    assert!(no_hours.power_on_days.is_none());
    assert!(no_hours.estimated_remaining_days.is_none());
    assert!(no_hours.total_written_tb.is_some());
    assert!(no_hours.health_percent.is_some());
}

#[test]
fn test_zero_written_never_yields_infinite_remaining_days() {
    let report = project(
        &metrics(Some(512), Some(10_000), Some(0)),
        &HealthThresholds::default(),
    );
    assert_eq!(report.estimated_remaining_days, None);
    assert_close(report.health_percent, 100.0, 1e-9);
}

#[test]
fn test_all_absent_is_empty_report() {
    let report = project(&metrics(None, None, None), &HealthThresholds::default());
    assert_eq!(report, HealthReport::default());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_write_warning_is_monotonic() {
    let thresholds = HealthThresholds::default();
    let mut seen_warning = false;

    // 1 TB steps of 512 byte blocks, from 60 TB to 80 TB
    for tb in 60u64..=80 {
        let blocks = tb * 1_000_000_000_000 / 512;
        let report = project(&metrics(Some(512), Some(100), Some(blocks)), &thresholds);
        let warned = report.has_warning(WarningKind::ExcessiveWrite);

        if seen_warning {
            assert!(warned, "warning cleared again at {} TB", tb);
        }
        seen_warning |= warned;
        assert_eq!(warned, tb > 70, "unexpected classification at {} TB", tb);
    }
}

#[test]
fn test_custom_thresholds() {
    let thresholds = HealthThresholds::new(150, 140, 3).unwrap();
    let report = project(
        &metrics(Some(512), Some(4 * 365 * 24), Some(146_000_000_000)),
        &thresholds,
    );

    assert!(!report.has_warning(WarningKind::ExcessiveWrite));
    assert!(report.has_warning(WarningKind::ExcessiveOnlineTime));
    assert_close(report.health_percent, 100.0 - 74.752 * 100.0 / 150.0, 1e-9);
}
