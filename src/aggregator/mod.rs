//! Aggregation of a parsed trace into activity metrics.
//!
//! This module turns the event model into:
//! - Whole-trace statistics (counts, time span)
//! - Per-engine busy time and utilization
//! - A plain-text summary table

pub mod metrics;

// Re-export main types and functions
pub use metrics::{
    calculate_engine_usage, calculate_trace_stats, generate_text_summary, EngineUsage, TraceStats,
};
