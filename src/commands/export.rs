//! Export command implementation.
//!
//! Writes a parsed trace either as a versioned model document or as
//! per-cluster ROI tracks.

use super::models::{validate_filter, ExportArgs, ExportFormat};
use crate::output::{to_roi_tracks, write_document, write_roi, TraceDocument};
use crate::parser::load_trace_file;
use anyhow::{Context, Result};
use log::info;

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
pub fn execute_export(args: ExportArgs) -> Result<()> {
    info!("Exporting {} as {:?}", args.input.display(), args.format);

    let parsed = load_trace_file(&args.input)
        .with_context(|| format!("Failed to load trace {}", args.input.display()))?;
    let model = args.filter.apply(&parsed.model);

    match args.format {
        ExportFormat::Model => {
            let document = TraceDocument::new(args.input.display().to_string(), model, &parsed.report);
            write_document(&document, &args.output).context("Failed to write trace model JSON")?;
        }
        ExportFormat::Roi => {
            let tracks = to_roi_tracks(&model);
            write_roi(&tracks, &args.output).context("Failed to write ROI JSON")?;
        }
    }

    info!("✓ Export written to: {}", args.output.display());

    Ok(())
}

/// Validate export arguments
pub fn validate_export_args(args: &ExportArgs) -> Result<()> {
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    validate_filter(&args.filter)
}
