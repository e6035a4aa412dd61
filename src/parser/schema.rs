//! Typed event model built from a trace.
//!
//! The model is built once per loaded trace and not mutated afterwards.
//! It serializes to the JSON layout written by `output::json`.

use super::engine::Engine;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Instantaneous control register record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    /// Timestamp in nanoseconds
    pub timestamp: u64,

    /// Free text of the trace line
    pub description: String,
}

/// Completed operation on one engine, `start <= end`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineInterval {
    pub start: u64,
    pub end: u64,
    pub description: String,
}

impl EngineInterval {
    /// Duration in nanoseconds
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }

    /// Whether the interval overlaps the closed window `[from, to]`
    pub fn overlaps(&self, from: u64, to: u64) -> bool {
        self.start <= to && self.end >= from
    }
}

/// Interval sequences of one cluster, one slot per recognized engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSlots {
    #[serde(default)]
    pub idma: Vec<EngineInterval>,
    #[serde(default)]
    pub redmule: Vec<EngineInterval>,
    #[serde(default)]
    pub vecteng: Vec<EngineInterval>,
}

impl EngineSlots {
    pub fn slot(&self, engine: Engine) -> &[EngineInterval] {
        match engine {
            Engine::Idma => &self.idma,
            Engine::Redmule => &self.redmule,
            Engine::Vecteng => &self.vecteng,
        }
    }

    pub fn slot_mut(&mut self, engine: Engine) -> &mut Vec<EngineInterval> {
        match engine {
            Engine::Idma => &mut self.idma,
            Engine::Redmule => &mut self.redmule,
            Engine::Vecteng => &mut self.vecteng,
        }
    }

    /// Engines holding at least one interval, in row priority order
    pub fn used_engines(&self) -> impl Iterator<Item = Engine> + '_ {
        Engine::ALL
            .into_iter()
            .filter(|engine| !self.slot(*engine).is_empty())
    }

    /// Iterate all intervals together with their engine
    pub fn intervals(&self) -> impl Iterator<Item = (Engine, &EngineInterval)> + '_ {
        Engine::ALL
            .into_iter()
            .flat_map(move |engine| self.slot(engine).iter().map(move |i| (engine, i)))
    }

    pub fn interval_count(&self) -> usize {
        self.idma.len() + self.redmule.len() + self.vecteng.len()
    }
}

/// Cluster identifier to engine slots, in first-seen order
pub type ClusterTimelines = IndexMap<String, EngineSlots>;

/// Structured result of parsing one trace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceModel {
    /// Control register records in log order
    pub control_events: Vec<TraceEvent>,

    /// Per-cluster engine timelines
    pub clusters: ClusterTimelines,
}

impl TraceModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the trace produced neither events nor intervals
    pub fn is_empty(&self) -> bool {
        self.control_events.is_empty() && self.interval_count() == 0
    }

    pub fn interval_count(&self) -> usize {
        self.clusters.values().map(EngineSlots::interval_count).sum()
    }

    /// Timestamps that bound the visible time range: control event
    /// times and interval completion times
    pub fn domain_timestamps(&self) -> impl Iterator<Item = u64> + '_ {
        self.domain_timestamps_for(&Engine::ALL)
    }

    /// Like [`TraceModel::domain_timestamps`], restricted to some engines
    pub fn domain_timestamps_for<'a>(&'a self, engines: &'a [Engine]) -> impl Iterator<Item = u64> + 'a {
        let events = self.control_events.iter().map(|e| e.timestamp);
        let ends = self.clusters.values().flat_map(move |slots| {
            slots
                .intervals()
                .filter(move |(engine, _)| engines.contains(engine))
                .map(|(_, interval)| interval.end)
        });
        events.chain(ends)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: u64, end: u64) -> EngineInterval {
        EngineInterval {
            start,
            end,
            description: format!("Finished {} ns ---> {} ns", start, end),
        }
    }

    #[test]
    fn test_used_engines_skips_empty_slots() {
        let slots = EngineSlots {
            vecteng: vec![interval(1, 2)],
            idma: vec![interval(0, 5)],
            ..Default::default()
        };
        let used: Vec<Engine> = slots.used_engines().collect();
        assert_eq!(used, vec![Engine::Idma, Engine::Vecteng]);
    }

    #[test]
    fn test_domain_timestamps_use_interval_ends() {
        let mut model = TraceModel::new();
        model.control_events.push(TraceEvent {
            timestamp: 70,
            description: "barrier".to_string(),
        });
        model.clusters.insert(
            "cluster_0".to_string(),
            EngineSlots {
                redmule: vec![interval(10, 40)],
                ..Default::default()
            },
        );

        let mut ts: Vec<u64> = model.domain_timestamps().collect();
        ts.sort();
        assert_eq!(ts, vec![40, 70]);

        let only_idma: Vec<u64> = model.domain_timestamps_for(&[Engine::Idma]).collect();
        assert_eq!(only_idma, vec![70]);
    }

    #[test]
    fn test_overlaps() {
        let i = interval(10, 20);
        assert!(i.overlaps(0, 10));
        assert!(i.overlaps(20, 30));
        assert!(i.overlaps(12, 15));
        assert!(!i.overlaps(21, 30));
        assert_eq!(i.duration(), 10);
    }

    #[test]
    fn test_empty_model() {
        let model = TraceModel::new();
        assert!(model.is_empty());
        assert_eq!(model.domain_timestamps().count(), 0);
    }
}
