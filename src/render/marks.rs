//! Positioned marks for the current view.
//!
//! Marks are cheap to rebuild: after every zoom or pan the renderer
//! recomputes positions from the unchanged model and layout.

use crate::layout::{RowKey, ViewScales};
use crate::parser::{Engine, TraceModel};
use crate::utils::config::{BAR_HEIGHT, EVENT_RADIUS};
use crate::zoom::ZoomTransform;

/// A position in plot-area pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One drawable element with its tooltip text
#[derive(Debug, Clone, PartialEq)]
pub enum Mark<'a> {
    /// Control event circle on the global lane
    Event {
        cx: f64,
        cy: f64,
        r: f64,
        description: &'a str,
    },

    /// Engine interval bar centred on its lane
    Interval {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        engine: Engine,
        description: &'a str,
    },
}

impl<'a> Mark<'a> {
    pub fn description(&self) -> &'a str {
        match self {
            Mark::Event { description, .. } | Mark::Interval { description, .. } => *description,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        match *self {
            Mark::Event { cx, cy, r, .. } => {
                let (dx, dy) = (point.x - cx, point.y - cy);
                dx * dx + dy * dy <= r * r
            }
            Mark::Interval {
                x,
                y,
                width,
                height,
                ..
            } => point.x >= x && point.x <= x + width && point.y >= y && point.y <= y + height,
        }
    }
}

/// Build every mark of the model under the given transform
///
/// Events come first and intervals after, so bars are drawn on top.
/// Engines outside the layout's visible set are not drawn.
pub fn build_marks<'a>(
    model: &'a TraceModel,
    scales: &ViewScales,
    transform: &ZoomTransform,
) -> Vec<Mark<'a>> {
    let time = transform.rescale(&scales.time);
    let mut marks = Vec::with_capacity(model.control_events.len() + model.interval_count());

    if let Some(cy) = scales.row(&RowKey::Global) {
        marks.extend(model.control_events.iter().map(|event| Mark::Event {
            cx: time.apply(event.timestamp as f64),
            cy,
            r: EVENT_RADIUS,
            description: &event.description,
        }));
    }

    for (cluster, slots) in &model.clusters {
        for &engine in &scales.engines {
            let Some(row_y) = scales.row(&RowKey::engine(cluster.as_str(), engine)) else {
                continue;
            };
            marks.extend(slots.slot(engine).iter().map(|interval| {
                let x0 = time.apply(interval.start as f64);
                let x1 = time.apply(interval.end as f64);
                Mark::Interval {
                    x: x0,
                    y: row_y - BAR_HEIGHT / 2.0,
                    width: (x1 - x0).max(0.0),
                    height: BAR_HEIGHT,
                    engine,
                    description: &interval.description,
                }
            }));
        }
    }

    marks
}

/// Topmost mark under `point`
pub fn hit_test<'m, 'a>(marks: &'m [Mark<'a>], point: Point) -> Option<&'m Mark<'a>> {
    marks.iter().rev().find(|mark| mark.contains(point))
}
