//! Attribute extraction from smartctl text output.
//!
//! smartctl does not guarantee a stable text layout, so the marker/column
//! table is owned by an [`AttributeParser`] implementation. A new smartctl
//! layout only needs a new parser; the projection code never sees raw text.

use super::metrics::ExtractedMetrics;

/// Line-oriented parser for one smartctl output layout.
pub trait AttributeParser: Send + Sync {
    /// Identifier of the output layout this parser understands.
    fn format_version(&self) -> &'static str;

    /// Fold a single line into `metrics`.
    ///
    /// Lines that do not match any marker must leave `metrics` untouched.
    fn apply_line(&self, line: &str, metrics: &mut ExtractedMetrics);

    /// Run the parser over a full line sequence.
    fn extract<I, S>(&self, lines: I) -> ExtractedMetrics
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        Self: Sized,
    {
        extract_with(self, lines)
    }
}

/// Run any parser (including trait objects) over a line sequence.
pub fn extract_with<P, I, S>(parser: &P, lines: I) -> ExtractedMetrics
where
    P: AttributeParser + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut metrics = ExtractedMetrics::default();
    for line in lines {
        parser.apply_line(line.as_ref(), &mut metrics);
    }
    metrics
}

/// Extract metrics using the default parser.
pub fn extract_metrics<I, S>(lines: I) -> ExtractedMetrics
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_with(&SmartctlBriefHexParser, lines)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    SectorSize,
    PowerOnHours,
    BlocksWritten,
}

struct Marker {
    prefix: &'static str,
    token_index: usize,
    field: Field,
}

/// Layout produced by `smartctl -i -A -f brief -f hex,id`.
///
/// ```text
/// Sector Size:      512 bytes logical/physical
/// 0x09 Power_On_Hours          -O--CK   094   094   000    -    28143
/// 0xf1 Total_LBAs_Written      -O--CK   099   099   000    -    41552104576
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SmartctlBriefHexParser;

impl SmartctlBriefHexParser {
    pub const FORMAT_VERSION: &'static str = "smartctl-brief-hexid-v1";

    const MARKERS: [Marker; 3] = [
        Marker {
            prefix: "Sector Size:",
            token_index: 2,
            field: Field::SectorSize,
        },
        Marker {
            prefix: "0x09",
            token_index: 7,
            field: Field::PowerOnHours,
        },
        Marker {
            prefix: "0xf1",
            token_index: 7,
            field: Field::BlocksWritten,
        },
    ];
}

impl AttributeParser for SmartctlBriefHexParser {
    fn format_version(&self) -> &'static str {
        Self::FORMAT_VERSION
    }

    fn apply_line(&self, line: &str, metrics: &mut ExtractedMetrics) {
        for marker in &Self::MARKERS {
            if !line.starts_with(marker.prefix) {
                continue;
            }

            let value = positional_u64(line, marker.token_index);
            if value.is_none() {
                log::debug!(
                    "Malformed '{}' line, token {} is missing or not numeric: {:?}",
                    marker.prefix,
                    marker.token_index,
                    line
                );
            }

            // Last match wins, even when the later line is malformed.
            match marker.field {
                Field::SectorSize => metrics.sector_size_bytes = value,
                Field::PowerOnHours => metrics.power_on_hours = value,
                Field::BlocksWritten => metrics.logical_blocks_written = value,
            }
        }
    }
}

fn positional_u64(line: &str, index: usize) -> Option<u64> {
    line.split_whitespace()
        .nth(index)
        .and_then(|token| token.parse::<u64>().ok())
}

/// Look up a parser by its format version.
pub fn parser_for_version(version: &str) -> Option<Box<dyn AttributeParser>> {
    match version {
        SmartctlBriefHexParser::FORMAT_VERSION => Some(Box::new(SmartctlBriefHexParser)),
        _ => None,
    }
}
