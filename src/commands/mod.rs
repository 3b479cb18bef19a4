// Command handlers module
pub mod check;
pub mod completions;
pub mod config;
pub mod scan;
pub mod version;

// Re-exports for cleaner imports
pub use check::execute as check;
pub use scan::execute as scan;
pub use version::execute as version;
