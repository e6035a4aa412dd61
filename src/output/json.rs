//! JSON trace model output.
//!
//! Writes the parsed model wrapped in a versioned document so exported
//! files can be validated and read back.

use super::{create_parent_dirs, validate_path};
use crate::parser::{ParseReport, TraceModel};
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level document written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDocument {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace file the model was parsed from
    pub source: String,

    /// Timestamp when the document was generated
    pub generated_at: String,

    /// Lines that were skipped as malformed
    #[serde(default)]
    pub skipped_lines: usize,

    pub model: TraceModel,
}

impl TraceDocument {
    pub fn new(source: impl Into<String>, model: TraceModel, report: &ParseReport) -> Self {
        use chrono::Utc;

        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            skipped_lines: report.issues.len(),
            model,
        }
    }
}

/// Write a trace document to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_document(document: &TraceDocument, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing trace model to: {}", output_path.display());

    validate_path(output_path)?;
    create_parent_dirs(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, document).map_err(OutputError::SerializationFailed)?;

    info!(
        "Trace model written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a trace document from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_document(input_path: impl AsRef<Path>) -> Result<TraceDocument, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace model from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let document: TraceDocument =
        serde_json::from_reader(BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Trace model loaded: version {}, source {}",
        document.version, document.source
    );

    Ok(document)
}

/// Serialize a document to a JSON string
pub fn document_to_string(document: &TraceDocument) -> Result<String, OutputError> {
    serde_json::to_string_pretty(document).map_err(OutputError::SerializationFailed)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
