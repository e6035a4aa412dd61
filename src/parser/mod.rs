//! Trace parsing and model definitions.
//!
//! This module handles:
//! - Classifying raw simulator trace lines
//! - Pairing finished engine records into intervals
//! - Defining the event model
//! - Cutting a model down to clusters and time windows

pub mod engine;
pub mod filter;
pub mod grammar;
pub mod schema;
pub mod trace_parser;

// Re-export main types
pub use engine::Engine;
pub use filter::TraceFilter;
pub use grammar::{classify_line, LineKind, RawLine};
pub use schema::{ClusterTimelines, EngineInterval, EngineSlots, TraceEvent, TraceModel};
pub use trace_parser::{
    load_trace_file, parse_trace, parse_trace_str, parse_trace_with_report, ParseReport, ParsedTrace,
};
