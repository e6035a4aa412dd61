//! Output writers for trace models, ROI tracks and timelines.
//!
//! This module handles writing data to disk in various formats:
//! - JSON trace models
//! - ROI track JSON
//! - SVG timelines

pub mod json;
pub mod roi;
pub mod svg;

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

// Re-export main functions
pub use json::{document_to_string, read_document, write_document, TraceDocument};
pub use roi::{to_roi_tracks, write_roi, RoiEntry, RoiTracks};
pub use svg::write_svg;

/// Validate that an output path is writable
///
/// **Public** - shared by every writer
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories of an output path
fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory {}: {}", parent.display(), e))
            })?;
        }
    }
    Ok(())
}
