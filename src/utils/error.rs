//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a trace file
///
/// Only file-level failures are reported here. Line-level anomalies
/// never abort a load, see [`ParseIssue`].
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read trace file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a text trace file: {}", .0.display())]
    NotText(PathBuf),
}

/// Data-format anomalies found on individual trace lines
///
/// These are recorded as warnings in the parse report; the offending
/// line contributes nothing to the model and parsing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParseIssue {
    #[error("line {line}: finished operation without a 'N ns ---> M ns' span: {description}")]
    MalformedSpan { line: usize, description: String },

    #[error("line {line}: operation ends before it starts ({start} ns ---> {end} ns)")]
    InvertedSpan { line: usize, start: u64, end: u64 },
}

impl ParseIssue {
    /// 1-based line number the issue was found on
    pub fn line(&self) -> usize {
        match self {
            ParseIssue::MalformedSpan { line, .. } | ParseIssue::InvertedSpan { line, .. } => *line,
        }
    }
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
