//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod export;
pub mod models;
pub mod probe;
pub mod render;
pub mod summary;
pub mod utils;

// Re-export main command functions
pub use export::{execute_export, validate_export_args};
pub use models::{validate_filter, ExportArgs, ExportFormat, ProbeArgs, RenderArgs, SummaryArgs, ViewOptions};
pub use probe::execute_probe;
pub use render::{execute_render, validate_render_args};
pub use summary::execute_summary;
pub use utils::{display_schema, display_version, validate_document_file};
