//! Main trace parser for simulator log output.
//!
//! Folds raw trace lines into a [`TraceModel`]. Parsing never fails as
//! a whole: unrecognized lines are dropped and malformed engine records
//! are skipped with a warning, so one bad line cannot lose a
//! multi-megabyte trace.

use super::grammar::{classify_line, parse_span, LineKind};
use super::schema::{EngineInterval, EngineSlots, TraceEvent, TraceModel};
use crate::utils::error::{LoadError, ParseIssue};
use log::{debug, info, warn};
use serde::Serialize;
use std::path::Path;

/// Counters and issues collected while parsing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    /// Lines fed to the parser
    pub lines_total: usize,

    /// Lines that contributed an event or an interval
    pub lines_used: usize,

    pub control_events: usize,
    pub intervals: usize,

    /// Lines dropped without error (no match, start records, unknown components)
    pub lines_ignored: usize,

    /// Finished records that could not be turned into intervals
    pub issues: Vec<ParseIssue>,
}

/// Parsed trace data together with its report
#[derive(Debug, Clone)]
pub struct ParsedTrace {
    pub model: TraceModel,
    pub report: ParseReport,
}

/// Parse trace lines into a model
///
/// **Public** - main entry point for parsing
///
/// Lines are processed strictly in input order. The result is a pure
/// function of the input; an input without recognizable lines yields
/// an empty model.
pub fn parse_trace<I, S>(lines: I) -> TraceModel
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    parse_trace_with_report(lines).model
}

/// Parse trace lines, also returning counters and skipped-line issues
///
/// **Public** - used by commands that report on parse quality
pub fn parse_trace_with_report<I, S>(lines: I) -> ParsedTrace
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut model = TraceModel::new();
    let mut report = ParseReport::default();

    for (index, line) in lines.into_iter().enumerate() {
        report.lines_total += 1;
        let line_number = index + 1;

        let kind = classify_line(line.as_ref());

        // Clusters keep the order of their first path reference
        if let Some(cluster) = kind.as_ref().and_then(LineKind::cluster) {
            if !model.clusters.contains_key(cluster) {
                model.clusters.insert(cluster.to_string(), EngineSlots::default());
            }
        }

        match kind {
            Some(LineKind::Control {
                timestamp,
                description,
            }) => {
                model.control_events.push(TraceEvent {
                    timestamp,
                    description: description.to_string(),
                });
                report.control_events += 1;
                report.lines_used += 1;
            }

            Some(LineKind::EngineFinished {
                cluster,
                engine,
                description,
                ..
            }) => match interval_from_description(description, line_number) {
                Ok(interval) => {
                    model
                        .clusters
                        .entry(cluster.to_string())
                        .or_default()
                        .slot_mut(engine)
                        .push(interval);
                    report.intervals += 1;
                    report.lines_used += 1;
                }
                Err(issue) => {
                    warn!("Skipping trace {}", issue);
                    report.issues.push(issue);
                }
            },

            Some(LineKind::EngineProgress { .. }) | Some(LineKind::OtherComponent { .. }) | None => {
                report.lines_ignored += 1;
            }
        }
    }

    model.clusters.retain(|_, slots| slots.interval_count() > 0);

    debug!(
        "Parsed {} lines: {} control events, {} intervals, {} ignored, {} skipped",
        report.lines_total,
        report.control_events,
        report.intervals,
        report.lines_ignored,
        report.issues.len()
    );

    ParsedTrace { model, report }
}

/// Parse a whole trace text
///
/// **Public** - convenience wrapper splitting on newlines
///
/// Both LF and CRLF line endings are accepted; a final newline does not
/// count as an extra line.
pub fn parse_trace_str(text: &str) -> ParsedTrace {
    parse_trace_with_report(text.lines())
}

/// Read and parse a trace file
///
/// **Public** - the only parse entry point that can fail
///
/// # Errors
/// * `LoadError::Io` - the file cannot be read
/// * `LoadError::NotText` - the file is binary or not valid UTF-8
pub fn load_trace_file(path: impl AsRef<Path>) -> Result<ParsedTrace, LoadError> {
    let path = path.as_ref();

    info!("Loading trace: {}", path.display());

    let bytes = std::fs::read(path)?;

    if bytes.contains(&0) {
        return Err(LoadError::NotText(path.to_path_buf()));
    }

    let text = String::from_utf8(bytes).map_err(|_| LoadError::NotText(path.to_path_buf()))?;

    let parsed = parse_trace_str(&text);

    info!(
        "Loaded {} control events and {} intervals across {} clusters",
        parsed.report.control_events,
        parsed.report.intervals,
        parsed.model.clusters.len()
    );

    Ok(parsed)
}

/// Build an interval from a finished record's description
///
/// **Private** - internal helper for parse_trace_with_report
fn interval_from_description(description: &str, line: usize) -> Result<EngineInterval, ParseIssue> {
    let (start, end) = parse_span(description).ok_or_else(|| ParseIssue::MalformedSpan {
        line,
        description: description.to_string(),
    })?;

    if start > end {
        return Err(ParseIssue::InvertedSpan { line, start, end });
    }

    Ok(EngineInterval {
        start,
        end,
        description: description.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::engine::Engine;

    #[test]
    fn test_report_counts() {
        let parsed = parse_trace_with_report([
            "header line",
            "1: 1: [ctrl_registers] sync",
            "2: 2: [/chip/cluster_0/redmule/trace] Start : 2 ns",
            "9: 9: [/chip/cluster_0/redmule/trace] Finished : 2 ns ---> 9 ns",
            "9: 9: [/chip/cluster_0/redmule/trace] Finished but garbled",
        ]);

        let report = &parsed.report;
        assert_eq!(report.lines_total, 5);
        assert_eq!(report.lines_used, 2);
        assert_eq!(report.control_events, 1);
        assert_eq!(report.intervals, 1);
        assert_eq!(report.lines_ignored, 2);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].line(), 5);
    }

    #[test]
    fn test_report_serializes_issues() {
        let parsed = parse_trace_with_report([
            "1: 1: [ctrl_registers] sync",
            "9: 9: [/chip/cluster_0/redmule/trace] Finished but garbled",
        ]);
        let value = serde_json::to_value(&parsed.report).unwrap();

        assert_eq!(value["lines_total"], 2);
        assert_eq!(value["issues"][0]["kind"], "malformed_span");
        assert_eq!(value["issues"][0]["line"], 2);
    }

    #[test]
    fn test_inverted_span_skipped() {
        let parsed = parse_trace_with_report([
            "9: 9: [/chip/cluster_0/idma/fe/trace] Finished : 30 ns ---> 10 ns",
        ]);
        assert!(parsed.model.clusters.is_empty());
        assert_eq!(
            parsed.report.issues,
            vec![ParseIssue::InvertedSpan {
                line: 1,
                start: 30,
                end: 10
            }]
        );
    }

    #[test]
    fn test_crlf_lines() {
        let parsed = parse_trace_str("1: 1: [ctrl_registers] a\r\n2: 2: [ctrl_registers] b\r\n");
        let descriptions: Vec<&str> = parsed
            .model
            .control_events
            .iter()
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(descriptions, vec!["a", "b"]);
        assert_eq!(parsed.report.lines_total, 2);
    }

    #[test]
    fn test_cluster_created_on_first_reference() {
        let model = parse_trace([
            "5: 5: [/chip/cluster_2/vecteng/trace] Finished 1 ns ---> 5 ns",
            "6: 6: [/chip/cluster_1/idma/fe/trace] Finished 2 ns ---> 6 ns",
            "7: 7: [/chip/cluster_2/idma/fe/trace] Finished 3 ns ---> 7 ns",
        ]);
        let order: Vec<&str> = model.clusters.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["cluster_2", "cluster_1"]);
        assert_eq!(model.clusters["cluster_2"].slot(Engine::Vecteng).len(), 1);
        assert_eq!(model.clusters["cluster_2"].slot(Engine::Idma).len(), 1);
    }

    #[test]
    fn test_cluster_order_follows_start_records() {
        let model = parse_trace([
            "1: 1: [/chip/cluster_1/redmule/trace] Start : 1 ns",
            "2: 2: [/chip/cluster_0/idma/fe/trace] Start : 2 ns",
            "5: 5: [/chip/cluster_0/idma/fe/trace] Finished 2 ns ---> 5 ns",
            "9: 9: [/chip/cluster_1/redmule/trace] Finished 1 ns ---> 9 ns",
        ]);
        let order: Vec<&str> = model.clusters.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["cluster_1", "cluster_0"]);
    }

    #[test]
    fn test_unknown_component_orders_cluster() {
        let model = parse_trace([
            "1: 1: [/chip/cluster_3/spatz/trace] Finished 0 ns ---> 1 ns",
            "2: 2: [/chip/cluster_5/vecteng/trace] Finished 0 ns ---> 2 ns",
            "3: 3: [/chip/cluster_3/redmule/trace] Finished 0 ns ---> 3 ns",
        ]);
        let order: Vec<&str> = model.clusters.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["cluster_3", "cluster_5"]);
    }

    #[test]
    fn test_cluster_without_intervals_dropped() {
        let model = parse_trace([
            "2: 2: [/chip/cluster_4/redmule/trace] Start : 2 ns",
            "3: 3: [/chip/cluster_4/redmule/trace] Finished without span",
            "4: 4: [/chip/cluster_6/spatz/trace] Finished 0 ns ---> 4 ns",
        ]);
        assert!(model.clusters.is_empty());
        assert_eq!(model, TraceModel::new());
    }
}
