//! Cutting a parsed trace down to some clusters and a time window.

use super::schema::{EngineSlots, TraceModel};
use log::debug;

/// Selection of clusters and time range to keep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceFilter {
    /// Cluster identifiers to keep; empty keeps every cluster
    pub clusters: Vec<String>,

    /// Inclusive lower bound in ns
    pub from: Option<u64>,

    /// Inclusive upper bound in ns
    pub to: Option<u64>,
}

impl TraceFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clusters(mut self, clusters: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.clusters = clusters.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_window(mut self, from: Option<u64>, to: Option<u64>) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    /// Whether applying the filter would keep everything
    pub fn is_noop(&self) -> bool {
        self.clusters.is_empty() && self.from.is_none() && self.to.is_none()
    }

    /// Build a new model holding only the selected records
    ///
    /// Control events are kept when their timestamp lies in the window,
    /// intervals when they overlap it. Cluster order is preserved and
    /// clusters left without intervals are dropped.
    pub fn apply(&self, model: &TraceModel) -> TraceModel {
        if self.is_noop() {
            return model.clone();
        }

        let from = self.from.unwrap_or(0);
        let to = self.to.unwrap_or(u64::MAX);

        let control_events = model
            .control_events
            .iter()
            .filter(|event| (from..=to).contains(&event.timestamp))
            .cloned()
            .collect();

        let clusters = model
            .clusters
            .iter()
            .filter(|(id, _)| self.clusters.is_empty() || self.clusters.contains(*id))
            .filter_map(|(id, slots)| {
                let mut kept = EngineSlots::default();
                for (engine, interval) in slots.intervals() {
                    if interval.overlaps(from, to) {
                        kept.slot_mut(engine).push(interval.clone());
                    }
                }
                (kept.interval_count() > 0).then(|| (id.clone(), kept))
            })
            .collect();

        let filtered = TraceModel {
            control_events,
            clusters,
        };

        debug!(
            "Filter kept {} of {} control events and {} of {} intervals",
            filtered.control_events.len(),
            model.control_events.len(),
            filtered.interval_count(),
            model.interval_count()
        );

        filtered
    }
}
