//! Timeline layout: rows per component and the time axis domain.

use super::scales::{LinearScale, PointScale};
use crate::parser::{Engine, TraceModel};
use crate::utils::config::{DEFAULT_PLOT_HEIGHT, DEFAULT_PLOT_WIDTH, EMPTY_DOMAIN, GLOBAL_ROW_KEY, GLOBAL_ROW_LABEL};
use log::debug;
use std::fmt;

/// One horizontal lane of the timeline
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    /// Control register lane
    Global,
    /// One engine of one cluster
    Engine { cluster: String, engine: Engine },
}

impl RowKey {
    pub fn engine(cluster: impl Into<String>, engine: Engine) -> Self {
        RowKey::Engine {
            cluster: cluster.into(),
            engine,
        }
    }

    /// Axis label of the lane
    pub fn label(&self) -> String {
        match self {
            RowKey::Global => GLOBAL_ROW_LABEL.to_string(),
            RowKey::Engine { .. } => self.to_string(),
        }
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowKey::Global => f.write_str(GLOBAL_ROW_KEY),
            RowKey::Engine { cluster, engine } => write!(f, "{}/{}", cluster, engine),
        }
    }
}

/// Pixel size of the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Build an extent, replacing unusable sizes with one pixel
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize_length(width),
            height: sanitize_length(height),
        }
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::new(DEFAULT_PLOT_WIDTH, DEFAULT_PLOT_HEIGHT)
    }
}

fn sanitize_length(value: f64) -> f64 {
    if value.is_finite() && value >= 1.0 {
        value
    } else {
        1.0
    }
}

/// Layout options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Engines given a row, also the engines the renderer draws
    pub engines: Vec<Engine>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            engines: Engine::ALL.to_vec(),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_engines(mut self, engines: impl IntoIterator<Item = Engine>) -> Self {
        self.engines = engines.into_iter().collect();
        self
    }

    pub fn shows(&self, engine: Engine) -> bool {
        self.engines.contains(&engine)
    }

    /// Visible engines in row priority order, without duplicates
    pub fn ordered_engines(&self) -> Vec<Engine> {
        Engine::ALL
            .into_iter()
            .filter(|engine| self.shows(*engine))
            .collect()
    }
}

/// Scales mapping the model onto the plot area
#[derive(Debug, Clone, PartialEq)]
pub struct ViewScales {
    /// Time in ns to x pixel
    pub time: LinearScale,

    /// Row key to y pixel
    pub rows: PointScale<RowKey>,

    /// Engines the rows were built for
    pub engines: Vec<Engine>,

    /// True when the model had no timestamps and the default domain is used
    pub empty: bool,
}

impl ViewScales {
    /// y pixel of a lane
    pub fn row(&self, key: &RowKey) -> Option<f64> {
        self.rows.position(key)
    }

    /// x pixel of a timestamp without any zoom applied
    pub fn time_x(&self, timestamp: u64) -> f64 {
        self.time.apply(timestamp as f64)
    }
}

/// Compute the view scales of a model with every recognized engine
///
/// **Public** - main entry point for layout
pub fn compute_layout(model: &TraceModel, width: f64, height: f64) -> ViewScales {
    compute_layout_with(model, Extent::new(width, height), &LayoutConfig::default())
}

/// Compute the view scales of a model for some visible engines
///
/// Rows are the global lane followed, per cluster in first-seen order,
/// by one lane per visible engine holding intervals. The time domain
/// spans control event timestamps and interval end times.
pub fn compute_layout_with(model: &TraceModel, extent: Extent, config: &LayoutConfig) -> ViewScales {
    let engines = config.ordered_engines();
    let rows = row_keys(model, &engines);
    let domain = time_domain(model, &engines);

    debug!(
        "Layout: {} rows, time domain {:?}, extent {}x{}",
        rows.len(),
        domain,
        extent.width,
        extent.height
    );

    ViewScales {
        time: LinearScale::new(domain.unwrap_or(EMPTY_DOMAIN), (0.0, extent.width)),
        rows: PointScale::new(rows, (0.0, extent.height)),
        engines,
        empty: domain.is_none(),
    }
}

/// Ordered, unique row keys for the visible engines
pub fn row_keys(model: &TraceModel, engines: &[Engine]) -> Vec<RowKey> {
    let mut keys = vec![RowKey::Global];
    for (cluster, slots) in &model.clusters {
        keys.extend(
            slots
                .used_engines()
                .filter(|engine| engines.contains(engine))
                .map(|engine| RowKey::engine(cluster.as_str(), engine)),
        );
    }
    keys
}

/// `[min, max]` of the domain timestamps, `None` when there are none
///
/// A single distinct timestamp is widened to `[t, t + 1]`.
pub fn time_domain(model: &TraceModel, engines: &[Engine]) -> Option<(f64, f64)> {
    let (min, max) = model
        .domain_timestamps_for(engines)
        .fold(None, |acc: Option<(u64, u64)>, t| match acc {
            None => Some((t, t)),
            Some((lo, hi)) => Some((lo.min(t), hi.max(t))),
        })?;

    let min = min as f64;
    let max = max as f64;
    if max > min {
        Some((min, max))
    } else {
        Some((min, min + 1.0))
    }
}
