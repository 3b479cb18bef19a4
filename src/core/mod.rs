// Core health estimation logic

pub mod assess;
pub mod config;
pub mod device;
pub mod extractor;
pub mod metrics;
pub mod projector;
pub mod source;
pub mod thresholds;

// Re-export commonly used items
pub use assess::{assess_device, assess_devices, assess_text, partition_outcomes};
pub use config::Config;
pub use device::{DeviceDescriptor, DeviceHealth};
pub use extractor::{extract_metrics, AttributeParser, SmartctlBriefHexParser};
pub use metrics::ExtractedMetrics;
pub use projector::{project, HealthReport, WarningKind};
pub use source::{DiagnosticSource, DiagnosticText};
pub use thresholds::{HealthThresholds, ThresholdOverrides};
