use serde::{Deserialize, Serialize};

/// Raw counters pulled out of smartctl output.
///
/// Every field is independently optional: a drive (or a smartctl build) that
/// does not print the matching line simply leaves it `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetrics {
    pub sector_size_bytes: Option<u64>,
    pub power_on_hours: Option<u64>,
    pub logical_blocks_written: Option<u64>,
}

impl ExtractedMetrics {
    /// True when none of the counters could be read
    pub fn is_empty(&self) -> bool {
        self.sector_size_bytes.is_none()
            && self.power_on_hours.is_none()
            && self.logical_blocks_written.is_none()
    }
}
