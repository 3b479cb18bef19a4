use ssd_status::core::extractor::{extract_metrics, AttributeParser, SmartctlBriefHexParser};
use ssd_status::core::metrics::ExtractedMetrics;

const SMARTCTL_OUTPUT: &str = "\
smartctl 7.4 2023-08-01 r5530 [x86_64-linux-6.8.0] (local build)
Copyright (C) 2002-23, Bruce Allen, Christian Franke, www.smartmontools.org

=== START OF INFORMATION SECTION ===
Model Family:     Crucial/Micron Client SSDs
Device Model:     CT500MX500SSD1
Serial Number:    1234ABCD5678
User Capacity:    500,107,862,016 bytes [500 GB]
Sector Sizes:     512 bytes logical, 4096 bytes physical
Sector Size:      512 bytes logical/physical
Rotation Rate:    Solid State Device
SMART support is: Enabled

=== START OF ENABLE/DISABLE COMMANDS SECTION ===
SMART Enabled.

=== START OF READ SMART DATA SECTION ===
SMART Attributes Data Structure revision number: 16
Vendor Specific SMART Attributes with Thresholds:
ID# ATTRIBUTE_NAME          FLAGS    VALUE WORST THRESH FAIL RAW_VALUE
0x01 Raw_Read_Error_Rate     -O--CK   100   100   000    -    0
0x05 Reallocate_NAND_Blk_Cnt -O--CK   100   100   010    -    0
0x09 Power_On_Hours          -O--CK   100   100   000    -    12345
0x0c Power_Cycle_Count       -O--CK   100   100   000    -    789
0xf1 Total_LBAs_Written      -O--CK   100   100   000    -    29296875000
                            ||||||_ K auto-keep
                            |||||__ C event count

Device Statistics (GP Log 0x04)
Page  Offset Size        Value Flags Description
0x01  =====  =               =  ===  == General Statistics (rev 1) ==
0x01  0x008  4             789  ---  Lifetime Power-On Resets
";

#[test]
fn test_realistic_output() {
    let metrics = extract_metrics(SMARTCTL_OUTPUT.lines());
    assert_eq!(
        metrics,
        ExtractedMetrics {
            sector_size_bytes: Some(512),
            power_on_hours: Some(12345),
            logical_blocks_written: Some(29_296_875_000),
        }
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let lines: Vec<&str> = SMARTCTL_OUTPUT.lines().collect();
    let first = extract_metrics(&lines);
    let second = extract_metrics(&lines);
    assert_eq!(first, second);
}

#[test]
fn test_malformed_blocks_written_keeps_other_fields() {
    let output = SMARTCTL_OUTPUT.replace("29296875000", "not-a-number");
    let metrics = extract_metrics(output.lines());

    assert_eq!(metrics.logical_blocks_written, None);
    assert_eq!(metrics.sector_size_bytes, Some(512));
    assert_eq!(metrics.power_on_hours, Some(12345));
}

#[test]
fn test_unparseable_input_extracts_nothing() {
    let metrics = extract_metrics("smartctl: command failed\n\n???".lines());
    assert!(metrics.is_empty());
}

#[test]
fn test_parser_reports_format_version() {
    let parser = SmartctlBriefHexParser;
    assert_eq!(parser.format_version(), SmartctlBriefHexParser::FORMAT_VERSION);
    assert_eq!(
        parser.extract(SMARTCTL_OUTPUT.lines()),
        extract_metrics(SMARTCTL_OUTPUT.lines())
    );
}
