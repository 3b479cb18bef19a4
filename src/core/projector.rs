//! Health projection.
//!
//! Turns raw counters into physical units and projects the remaining
//! lifetime assuming future writes continue at the historical average rate.
//! Each derived value is computed only when its inputs are available; a
//! missing input or undefined arithmetic leaves the output `None`.

use super::metrics::ExtractedMetrics;
use super::thresholds::HealthThresholds;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

const BYTES_PER_TB: f64 = 1e12;
const HOURS_PER_DAY: f64 = 24.0;
const DAYS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    ExcessiveWrite,
    ExcessiveOnlineTime,
}

impl WarningKind {
    pub fn description(&self) -> &'static str {
        match self {
            WarningKind::ExcessiveWrite => "written data exceeds the write warning limit",
            WarningKind::ExcessiveOnlineTime => "power-on time exceeds the online warning limit",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub total_written_tb: Option<f64>,
    pub power_on_days: Option<f64>,
    pub health_percent: Option<f64>,
    pub estimated_remaining_days: Option<f64>,
    pub warnings: BTreeSet<WarningKind>,
}

impl HealthReport {
    pub fn has_warning(&self, kind: WarningKind) -> bool {
        self.warnings.contains(&kind)
    }

    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Project a health report from extracted counters.
pub fn project(metrics: &ExtractedMetrics, thresholds: &HealthThresholds) -> HealthReport {
    let mut warnings = BTreeSet::new();
    let factory_limit = f64::from(thresholds.factory_limit_tb);

    let total_written_tb = match (metrics.logical_blocks_written, metrics.sector_size_bytes) {
        (Some(blocks), Some(sector)) => finite(
            "total written",
            blocks as f64 * sector as f64 / BYTES_PER_TB,
        ),
        _ => None,
    };
    if let Some(tb) = total_written_tb {
        if tb > f64::from(thresholds.write_warning_tb) {
            warnings.insert(WarningKind::ExcessiveWrite);
        }
    }

    let power_on_days = metrics
        .power_on_hours
        .map(|hours| hours as f64 / HOURS_PER_DAY);
    if let Some(days) = power_on_days {
        if days / DAYS_PER_YEAR > f64::from(thresholds.online_warning_years) {
            warnings.insert(WarningKind::ExcessiveOnlineTime);
        }
    }

    let health_percent = total_written_tb
        .and_then(|tb| finite("health percent", 100.0 - tb * 100.0 / factory_limit));

    let estimated_remaining_days = match (total_written_tb, power_on_days) {
        (Some(tb), Some(days)) if tb > 0.0 => finite(
            "remaining days",
            (factory_limit / tb - 1.0) * days,
        ),
        (Some(_), Some(_)) => {
            log::debug!("Remaining days undefined: nothing has been written yet");
            None
        }
        _ => None,
    };

    HealthReport {
        total_written_tb,
        power_on_days,
        health_percent,
        estimated_remaining_days,
        warnings,
    }
}

fn finite(label: &str, value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        log::debug!("Projection for {} is undefined ({})", label, value);
        None
    }
}
