// Platform-specific code module

pub mod elevation;
pub mod smartctl;

// Re-exports for cleaner imports
pub use elevation::{is_elevated, needs_privilege_warning};
pub use smartctl::{parse_scan_output, SmartctlRunner};
