//! Line grammar of simulator traces.
//!
//! Every trace record has the shape
//! `<rawTimestamp>: <timestamp>: [<path>] <description>`.
//! Lines that do not fit are not errors; simulator output is full of
//! headers, blank lines and partially flushed records.

use super::engine::Engine;
use crate::utils::config::{CTRL_REGISTERS_MARKER, FINISHED_MARKER};
use regex::Regex;
use std::sync::LazyLock;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+):\s+(\d+):\s+\[(.*?)\]\s+(.*)$").expect("line pattern is valid")
});

static CLUSTER_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/chip/(cluster_\d+)/(.+?)/trace").expect("cluster path pattern is valid")
});

static SPAN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) ns ---> (\d+) ns").expect("span pattern is valid")
});

/// Fields of one well-formed trace record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawLine<'a> {
    /// First counter on the line; kept for diagnostics only
    pub raw_timestamp: u64,
    /// Authoritative timestamp in nanoseconds
    pub timestamp: u64,
    /// Bracketed component path
    pub path: &'a str,
    /// Free text after the path
    pub description: &'a str,
}

/// Closed set of record kinds a line can be classified into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Control register record, rendered as a point marker
    Control { timestamp: u64, description: &'a str },

    /// Completed operation on a recognized engine
    EngineFinished {
        cluster: &'a str,
        engine: Engine,
        timestamp: u64,
        description: &'a str,
    },

    /// Any other record of a recognized engine (operation start, progress)
    EngineProgress { cluster: &'a str, engine: Engine },

    /// Record of a cluster component outside the recognized engines
    OtherComponent { cluster: &'a str },
}

impl<'a> LineKind<'a> {
    /// Cluster the record belongs to, `None` for control records
    pub fn cluster(&self) -> Option<&'a str> {
        match *self {
            LineKind::Control { .. } => None,
            LineKind::EngineFinished { cluster, .. }
            | LineKind::EngineProgress { cluster, .. }
            | LineKind::OtherComponent { cluster } => Some(cluster),
        }
    }
}

/// Split a line into its grammar fields
///
/// Returns `None` when the line does not follow the record grammar or
/// a counter does not fit in 64 bits.
pub fn split_line(line: &str) -> Option<RawLine<'_>> {
    let caps = LINE_RE.captures(line)?;

    let raw_timestamp = caps.get(1)?.as_str().parse().ok()?;
    let timestamp = caps.get(2)?.as_str().parse().ok()?;

    Some(RawLine {
        raw_timestamp,
        timestamp,
        path: caps.get(3)?.as_str(),
        description: caps.get(4)?.as_str(),
    })
}

/// Classify a line into one of the record kinds
///
/// `None` means the line is not of interest: it does not match the
/// grammar, or its path is neither a control register nor a cluster
/// component.
pub fn classify_line(line: &str) -> Option<LineKind<'_>> {
    let raw = split_line(line)?;
    classify(&raw)
}

/// Classify already split fields, see [`classify_line`]
pub fn classify<'a>(raw: &RawLine<'a>) -> Option<LineKind<'a>> {
    if raw.path.contains(CTRL_REGISTERS_MARKER) {
        return Some(LineKind::Control {
            timestamp: raw.timestamp,
            description: raw.description,
        });
    }

    let caps = CLUSTER_PATH_RE.captures(raw.path)?;
    let cluster = caps.get(1)?.as_str();
    let Some(engine) = Engine::from_component(caps.get(2)?.as_str()) else {
        return Some(LineKind::OtherComponent { cluster });
    };

    if raw.description.contains(FINISHED_MARKER) {
        Some(LineKind::EngineFinished {
            cluster,
            engine,
            timestamp: raw.timestamp,
            description: raw.description,
        })
    } else {
        Some(LineKind::EngineProgress { cluster, engine })
    }
}

/// Extract the `<start> ns ---> <end> ns` span from a description
pub fn parse_span(description: &str) -> Option<(u64, u64)> {
    let caps = SPAN_RE.captures(description)?;
    let start = caps.get(1)?.as_str().parse().ok()?;
    let end = caps.get(2)?.as_str().parse().ok()?;
    Some((start, end))
}
