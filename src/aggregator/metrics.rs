//! Per-engine activity metrics computed from a trace model.
//!
//! Busy time is the plain sum of interval durations, so overlapping
//! operations on one engine are counted twice.

use crate::parser::{Engine, TraceModel};
use log::debug;
use serde::Serialize;

/// Activity of one engine of one cluster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineUsage {
    pub cluster: String,
    pub engine: Engine,

    /// Completed operations
    pub operations: usize,

    /// Sum of operation durations in ns
    pub busy_ns: u64,

    pub first_start: u64,
    pub last_end: u64,

    /// Busy time as a percentage of the whole trace span
    pub utilization: f64,
}

/// Whole-trace statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TraceStats {
    pub control_events: usize,
    pub clusters: usize,
    pub intervals: usize,

    /// Earliest and latest timestamp of any event or interval endpoint
    pub span: Option<(u64, u64)>,
}

impl TraceStats {
    pub fn span_ns(&self) -> u64 {
        self.span.map(|(lo, hi)| hi - lo).unwrap_or(0)
    }
}

/// Calculate whole-trace statistics
///
/// **Public** - summary header data
pub fn calculate_trace_stats(model: &TraceModel) -> TraceStats {
    let starts = model
        .clusters
        .values()
        .flat_map(|slots| slots.intervals().map(|(_, interval)| interval.start));

    let span = model
        .domain_timestamps()
        .chain(starts)
        .fold(None, |acc: Option<(u64, u64)>, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        });

    TraceStats {
        control_events: model.control_events.len(),
        clusters: model.clusters.len(),
        intervals: model.interval_count(),
        span,
    }
}

/// Calculate usage of every engine that completed work
///
/// **Public** - main entry point for metrics calculation
///
/// Rows follow cluster first-seen order, then engine priority order.
pub fn calculate_engine_usage(model: &TraceModel) -> Vec<EngineUsage> {
    let span_ns = calculate_trace_stats(model).span_ns();

    let usage: Vec<EngineUsage> = model
        .clusters
        .iter()
        .flat_map(|(cluster, slots)| {
            slots.used_engines().map(move |engine| {
                let intervals = slots.slot(engine);
                let busy_ns: u64 = intervals.iter().map(|i| i.duration()).sum();
                EngineUsage {
                    cluster: cluster.clone(),
                    engine,
                    operations: intervals.len(),
                    busy_ns,
                    first_start: intervals.iter().map(|i| i.start).min().unwrap_or(0),
                    last_end: intervals.iter().map(|i| i.end).max().unwrap_or(0),
                    utilization: if span_ns > 0 {
                        (busy_ns as f64 / span_ns as f64) * 100.0
                    } else {
                        0.0
                    },
                }
            })
        })
        .collect();

    debug!("Calculated usage for {} engines", usage.len());
    usage
}

/// Generate a plain-text summary table
///
/// **Public** - used by the summary command
pub fn generate_text_summary(model: &TraceModel) -> String {
    let stats = calculate_trace_stats(model);
    let usage = calculate_engine_usage(model);

    let mut out = String::new();
    out.push_str(&format!("Control events: {}\n", stats.control_events));
    out.push_str(&format!("Clusters:       {}\n", stats.clusters));
    out.push_str(&format!("Intervals:      {}\n", stats.intervals));
    match stats.span {
        Some((lo, hi)) => out.push_str(&format!("Time span:      {} ns ---> {} ns ({} ns)\n", lo, hi, hi - lo)),
        None => out.push_str("Time span:      no events found\n"),
    }

    if usage.is_empty() {
        return out;
    }

    out.push('\n');
    out.push_str(&format!(
        "{:<14} {:<8} {:>6} {:>14} {:>8}\n",
        "CLUSTER", "ENGINE", "OPS", "BUSY (ns)", "UTIL %"
    ));
    for row in &usage {
        out.push_str(&format!(
            "{:<14} {:<8} {:>6} {:>14} {:>8.1}\n",
            row.cluster, row.engine.name(), row.operations, row.busy_ns, row.utilization
        ));
    }
    out
}
