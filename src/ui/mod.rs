// UI and formatting module

pub mod formatters;
pub mod prompts;
pub mod report_view;

// Re-export commonly used items for cleaner imports
pub use formatters::{escape_html, format_optional, format_timestamp};
pub use prompts::{dimmed, select_device, success, warn};
pub use report_view::{render_html, render_json, render_text, OutputFormat};
